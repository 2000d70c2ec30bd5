//! Integration tests for the aggregation pipeline
//! Run specific tests with `cargo test <module>::<submodule>`
//! For example: `cargo test integration::pipeline_test`
// Utility modules
pub mod utils;

// Derivation properties
pub mod algorithm {
    pub mod derivation_properties_test;
}

// End-to-end runs
pub mod integration {
    pub mod pipeline_test;
    pub mod report_test;
}
