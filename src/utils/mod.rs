//! Utility functions and helpers
//!
//! File IO and logging helpers shared by the pipeline and the report tools.

pub mod io;
pub mod logging;
