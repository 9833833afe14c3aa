//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the observation schema**
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION
//!
//! Normalization ranges and importance weights in `logic::model` are keyed to
//! this order; the layout hash lets downstream consumers detect a mismatch.

use crc32fast::Hasher;

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 1;

/// Feature names in exact order they appear in the vector
/// This is the SINGLE SOURCE OF TRUTH for feature layout
pub const FEATURE_LAYOUT: &[&str] = &[
    "orbital_period",   // 0: Days for one orbit
    "transit_duration", // 1: Hours the transit lasts
    "planetary_radius", // 2: Radius in Earth radii
    "stellar_temp",     // 3: Host star temperature (Kelvin)
    "snr",              // 4: Signal-to-noise ratio
    "depth",            // 5: Fractional brightness dip
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 6;

/// Compute CRC32 hash of the feature layout
/// Used to detect layout mismatches in exported stats
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    // Include version in hash
    hasher.update(&[FEATURE_VERSION]);

    // Hash all feature names in order
    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

/// Get layout hash
pub fn layout_hash() -> u32 {
    // Inputs are const, so this is stable for a given build
    compute_layout_hash()
}

/// Human-readable name for a layout field: underscores become spaces and the
/// first letter of each word is capitalized ("orbital_period" → "Orbital Period").
pub fn display_name(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
