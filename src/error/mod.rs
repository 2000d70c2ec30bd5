//! Error handling for the aggregation pipeline.
//!
//! Only run-level failures are represented here. Problems confined to a single
//! record (a malformed sub-document, an unparsable date) are absorbed where they
//! occur and never become a `PipelineError`.

pub mod util;

use std::io;
use std::path::{Path, PathBuf};

/// Errors that abort a pipeline run
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Input file does not exist or is not a regular file
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Error opening, reading or writing a file
    #[error("IO error at {}: {source}", path.display())]
    Io {
        /// File the operation was applied to
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File content is not valid JSON for the expected shape
    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        /// File being decoded
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Input document has no `RECORDS` array
    #[error("Input {} has no `RECORDS` array", .0.display())]
    MissingRecords(PathBuf),

    /// Public dataset could not be encoded
    #[error("Failed to serialize public dataset: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PipelineError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Wrap a JSON decoding error with the path it happened on
    pub fn json(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Whether the error comes from a missing input file
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound(_))
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
