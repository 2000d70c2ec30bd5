//! Logging utilities for output and progress tracking
//!
//! Standardized log messages, console overviews and progress bars.

pub mod console;
pub mod log;
pub mod progress;

// Re-export commonly used functions for convenience
pub use log::{log_dataset_written, log_records_loaded, log_source_start, log_warning};
pub use progress::{create_main_progress_bar, finish_progress_bar};
pub use console::{
    dataset_overview_lines, print_dataset_overview, print_qualitative_overview,
    qualitative_overview_lines,
};
