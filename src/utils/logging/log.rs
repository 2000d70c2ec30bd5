//! Logging utilities
//!
//! Run-level messages for the registry export and the public dataset.

use std::path::Path;
use std::time::Duration;

/// Announce that a record source is about to be read
pub fn log_source_start(source: &str) {
    log::info!("Reading registry records from {source}");
}

/// Report how many records were read from the export
///
/// # Arguments
/// * `path` - Registry export that was read
/// * `records` - Records found under `RECORDS`
/// * `elapsed` - Time spent reading and decoding
pub fn log_records_loaded(path: &Path, records: usize, elapsed: Duration) {
    log::info!(
        "Loaded {records} registry records from {} in {elapsed:?}",
        path.display()
    );
}

/// Report the public dataset that was written
///
/// # Arguments
/// * `path` - Destination of the aggregate dataset
/// * `records` - Records that were aggregated into it
/// * `elapsed` - Duration of the whole run
pub fn log_dataset_written(path: &Path, records: usize, elapsed: Duration) {
    log::info!(
        "Wrote public dataset {} aggregating {records} records in {elapsed:?}",
        path.display()
    );
}

/// Log a warning, optionally tied to a file
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{message}: {}", path.display()),
        None => log::warn!("{message}"),
    }
}
