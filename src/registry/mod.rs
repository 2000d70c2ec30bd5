//! Registry export handling
//!
//! Loading raw records from the anonymized export and flattening them into
//! one row per person.

pub mod flatten;
pub mod loader;

pub use flatten::{FlattenStats, flatten_record, flatten_records};
pub use loader::{InMemorySource, JsonExport, RecordSource};
