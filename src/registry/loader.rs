//! Loading of the anonymized registry export
//!
//! The export is a single JSON document with a `RECORDS` array. Any failure to
//! read it is fatal for the run.

use std::path::PathBuf;
use std::time::Instant;

use crate::error::{PipelineError, Result};
use crate::models::raw::{RawDataset, RawRecord};
use crate::utils::io::json::read_json;
use crate::utils::logging::log_records_loaded;

/// Source of raw registry records
pub trait RecordSource {
    /// Human-readable name used in log output
    fn source_name(&self) -> String;

    /// Load every record, in source order
    fn load(&self) -> Result<Vec<RawRecord>>;
}

/// The `RECORDS` export on disk
#[derive(Debug, Clone)]
pub struct JsonExport {
    path: PathBuf,
}

impl JsonExport {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonExport {
    fn source_name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<RawRecord>> {
        let start = Instant::now();

        let dataset: RawDataset = read_json(&self.path, "registry export")?;
        let records = dataset
            .records
            .ok_or_else(|| PipelineError::MissingRecords(self.path.clone()))?;

        log_records_loaded(&self.path, records.len(), start.elapsed());
        Ok(records)
    }
}

/// Records already held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<RawRecord>,
}

impl InMemorySource {
    #[must_use]
    pub const fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }
}

impl RecordSource for InMemorySource {
    fn source_name(&self) -> String {
        format!("{} in-memory records", self.records.len())
    }

    fn load(&self) -> Result<Vec<RawRecord>> {
        Ok(self.records.clone())
    }
}
