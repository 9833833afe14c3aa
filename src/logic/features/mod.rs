//! Features Module - Observation schema and validation
//!
//! The layout file is the single source of truth for field order; the record
//! type is the unit every other module consumes.

pub mod layout;
pub mod record;


// Re-export common types
pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};
pub use record::{FeatureRecord, FieldError, ValidationError};
