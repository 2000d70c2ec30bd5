//! Utility functions for error handling
//!
//! File access helpers that attach the offending path to every failure.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{PipelineError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for log context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.is_file() {
        log::debug!("{purpose}: {} is missing or not a file", path.display());
        return Err(PipelineError::FileNotFound(path.to_path_buf()));
    }

    fs::File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PipelineError::FileNotFound(path.to_path_buf()),
        _ => PipelineError::io(path, e),
    })
}

/// Safely read a file to string with rich error information
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    let mut file = safe_open_file(path, purpose)?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| PipelineError::io(path, e))?;
    Ok(content)
}
