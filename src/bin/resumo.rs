use anyhow::Context;
use log::info;
use pmme_dados::utils::logging::{print_dataset_overview, print_qualitative_overview};
use pmme_dados::{PipelineConfig, PublicDataset, QualitativeResults};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PipelineConfig::default();
    let dataset = PublicDataset::load(&config.output_path)
        .with_context(|| format!("loading public dataset {}", config.output_path.display()))?;
    let qualitative = QualitativeResults::load_optional(&config.qualitative_path)?;
    info!(
        "Loaded public dataset; qualitative results {}",
        if qualitative.is_some() { "available" } else { "missing" }
    );

    print_dataset_overview(&dataset, config.top_categories);
    print_qualitative_overview(qualitative.as_ref());
    Ok(())
}
