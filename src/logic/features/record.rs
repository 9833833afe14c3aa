//! Feature Record - Typed observation for a transit-detection candidate
//!
//! One record per observation, fields in the order defined by
//! `layout::FEATURE_LAYOUT`. Range validation happens here, at the input
//! boundary; the classifier assumes records it receives are already valid.

use serde::{Deserialize, Serialize};

use super::layout::FEATURE_COUNT;

/// A single candidate observation (six required numeric fields)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Days for one orbit
    pub orbital_period: f64,
    /// Hours
    pub transit_duration: f64,
    /// Earth radii
    pub planetary_radius: f64,
    /// Kelvin
    pub stellar_temp: f64,
    /// Signal-to-noise ratio, unitless
    pub snr: f64,
    /// Fractional brightness dip
    pub depth: f64,
}

impl FeatureRecord {
    /// Values in layout order
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.orbital_period,
            self.transit_duration,
            self.planetary_radius,
            self.stellar_temp,
            self.snr,
            self.depth,
        ]
    }

    /// Build from values in layout order
    pub fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        Self {
            orbital_period: values[0],
            transit_duration: values[1],
            planetary_radius: values[2],
            stellar_temp: values[3],
            snr: values[4],
            depth: values[5],
        }
    }

    /// Validate every field against its declared range.
    ///
    /// All fields are checked so the caller can report every problem at once.
    /// Non-finite values are rejected before the range comparison (NaN would
    /// slip past both bounds otherwise).
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        check_field(
            &mut errors,
            "orbital_period",
            self.orbital_period,
            |v| v > 0.0 && v <= 10000.0,
            "Must be between 0 and 10000 days",
        );
        check_field(
            &mut errors,
            "transit_duration",
            self.transit_duration,
            |v| v > 0.0 && v <= 24.0,
            "Must be between 0 and 24 hours",
        );
        check_field(
            &mut errors,
            "planetary_radius",
            self.planetary_radius,
            |v| v > 0.0 && v <= 50.0,
            "Must be between 0 and 50 Earth radii",
        );
        check_field(
            &mut errors,
            "stellar_temp",
            self.stellar_temp,
            |v| (2000.0..=10000.0).contains(&v),
            "Must be between 2000 and 10000 K",
        );
        check_field(
            &mut errors,
            "snr",
            self.snr,
            |v| v > 0.0 && v <= 100.0,
            "Must be between 0 and 100",
        );
        check_field(
            &mut errors,
            "depth",
            self.depth,
            |v| v > 0.0 && v <= 1.0,
            "Must be between 0 and 1",
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors })
        }
    }
}

fn check_field(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: f64,
    in_range: impl Fn(f64) -> bool,
    message: &str,
) {
    if !value.is_finite() {
        errors.push(FieldError {
            field,
            message: "Must be a finite number".to_string(),
        });
    } else if !in_range(value) {
        errors.push(FieldError {
            field,
            message: message.to_string(),
        });
    }
}

/// One out-of-range field
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Field-keyed validation failure; blocks scoring
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid observation: ")?;
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
