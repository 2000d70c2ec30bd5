//! Algorithm implementations for the aggregation pipeline
//!
//! Derivation of per-row columns and aggregation of rows into the public
//! dataset.

pub mod aggregation;
pub mod derivation;
