//! JSON document IO
//!
//! Whole-file reads and writes. Output is pretty-printed with two-space
//! indentation and non-ASCII text is written as UTF-8, never `\u` escaped.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::util::safe_read_to_string;
use crate::error::{PipelineError, Result};

/// Read and decode a JSON document
///
/// # Arguments
/// * `path` - File to read
/// * `purpose` - What the file is for (for log context)
pub fn read_json<T: DeserializeOwned>(path: &Path, purpose: &str) -> Result<T> {
    let content = safe_read_to_string(path, purpose)?;
    serde_json::from_str(&content).map_err(|e| PipelineError::json(path, e))
}

/// Encode a value as pretty JSON bytes
pub fn to_pretty_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(value)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write a value as pretty JSON, replacing any existing file
///
/// The value is encoded fully before the file is created, so an encoding
/// failure leaves any previous file untouched.
pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let bytes = to_pretty_bytes(value)?;

    let file = File::create(path).map_err(|e| PipelineError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .map_err(|e| PipelineError::io(path, e))?;
    writer.flush().map_err(|e| PipelineError::io(path, e))
}
