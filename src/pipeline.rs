//! The batch pipeline
//!
//! Flattener → Derivation → Aggregator → Writer, run once, single-threaded.
//! Loading errors abort the run before anything is written; per-record
//! problems are absorbed by the flattening and derivation steps.

use std::path::PathBuf;
use std::time::Instant;

use crate::algorithm::aggregation::aggregate;
use crate::algorithm::derivation::derive_rows;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::models::dataset::PublicDataset;
use crate::models::raw::RawRecord;
use crate::registry::flatten::{FlattenStats, flatten_records};
use crate::registry::loader::{JsonExport, RecordSource};
use crate::utils::io::json::write_json_pretty;
use crate::utils::logging::{log_dataset_written, log_source_start};

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    /// Flattening counters
    pub stats: FlattenStats,
    /// File the public dataset was written to
    pub output_path: PathBuf,
}

/// Offline aggregation pipeline
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    #[must_use]
    pub const fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run against the configured input file
    pub fn run(&self) -> Result<PipelineSummary> {
        self.run_with_source(&JsonExport::new(&self.config.input_path))
    }

    /// Run against any record source and write the configured output file
    pub fn run_with_source(&self, source: &dyn RecordSource) -> Result<PipelineSummary> {
        log::info!("{}", self.config);
        log_source_start(&source.source_name());
        let start = Instant::now();

        let records = source.load()?;
        let (dataset, stats) = self.build(&records);
        write_json_pretty(&self.config.output_path, &dataset)?;

        log_dataset_written(&self.config.output_path, stats.records, start.elapsed());
        Ok(PipelineSummary {
            stats,
            output_path: self.config.output_path.clone(),
        })
    }

    /// Flatten, derive and aggregate records without touching the filesystem
    #[must_use]
    pub fn build(&self, records: &[RawRecord]) -> (PublicDataset, FlattenStats) {
        let (mut rows, stats) = flatten_records(records, self.config.show_progress);
        derive_rows(&mut rows, self.config.evaluation_date);
        (aggregate(&rows), stats)
    }
}
