//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.

/// App name
pub const APP_NAME: &str = "A World Away";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Amplitude of the uniform noise term added to every score
pub const DEFAULT_NOISE_AMPLITUDE: f64 = 0.15;

/// Get the classifier noise seed from the environment, if set.
/// Unset (the default) means entropy-seeded, non-reproducible scoring.
pub fn get_classifier_seed() -> Option<u64> {
    std::env::var("AWA_CLASSIFIER_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
}
