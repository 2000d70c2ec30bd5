//! Domain models
//!
//! Raw registry records, flattened rows, and the public and qualitative
//! datasets derived from them.

pub mod dataset;
pub mod field;
pub mod qualitative;
pub mod raw;
pub mod row;
pub mod types;

pub use dataset::{CategoryCounts, Dashboard, Maps, MunicipalityJobs, PublicDataset, RegionFlow};
pub use field::Field;
pub use qualitative::{FieldAnalysis, QualitativeField, QualitativeResults};
pub use raw::{RawDataset, RawRecord, RecordId, Section};
pub use row::FlatRow;
pub use types::{Region, Stage};
