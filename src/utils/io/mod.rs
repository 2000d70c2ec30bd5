//! IO utilities for file operations
//!
//! This module provides utilities for reading and writing JSON documents.

pub mod json;

// Re-export commonly used functions for convenience
pub use json::{read_json, write_json_pretty};
