//! Offline aggregation pipeline for the PMM-e survey registry.
//!
//! Reads the anonymized registry export, flattens and derives per-person
//! rows, and writes a public dataset of non-identifying aggregates for the
//! dashboard and maps. The `report` module prepares that dataset for display.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod registry;
pub mod report;
pub mod utils;

// Core types
pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use pipeline::{Pipeline, PipelineSummary};

// Datasets
pub use models::{
    CategoryCounts, Field, FlatRow, PublicDataset, QualitativeField, QualitativeResults, RawRecord,
};

// Record sources
pub use registry::{InMemorySource, JsonExport, RecordSource};
