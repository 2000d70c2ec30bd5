//! Render-time preparation of the public dataset
//!
//! Pure functions that turn the read-only aggregate and qualitative datasets
//! into chart- and map-ready values. No drawing happens here.

pub mod charts;
pub mod geo;
pub mod qualitative;

pub use charts::{
    AppropriationTopic, RankedCategory, SeriesSummary, appropriation_labels, ranked_categories,
    regional_flow_by_region, series_summary,
};
pub use geo::{GeoLookupError, MapLayer, MunicipalityListing, StateShading, municipality_jobs, state_shading};
pub use qualitative::{QualitativeView, qualitative_view};
