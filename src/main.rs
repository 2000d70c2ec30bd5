use log::info;
use pmme_dados::{Pipeline, PipelineConfig, Result};

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let summary = Pipeline::new(PipelineConfig::default()).run()?;
    info!(
        "Wrote {} ({} records, {} malformed sub-documents)",
        summary.output_path.display(),
        summary.stats.records,
        summary.stats.malformed_sections
    );
    Ok(())
}
