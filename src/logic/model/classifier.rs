//! Exoplanet Classifier
//!
//! Weighted linear heuristic over min-max normalized observation fields,
//! plus a uniform noise term, banded into three labels. Not a trained model;
//! the constants below ARE the model.
//!
//! One explicit instance per process. The noise RNG is seedable so scoring
//! can be made reproducible (`with_seed`), and the amplitude can be zeroed
//! for deterministic assertions (`with_noise_amplitude`).

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_NOISE_AMPLITUDE;
use crate::logic::features::{FeatureRecord, FEATURE_COUNT};

use super::importance::{ranked_importance, FeatureImportance, FEATURE_WEIGHTS};
use super::stats::{ModelStats, StatsState};

/// Min-max normalization ranges, aligned with FEATURE_LAYOUT order.
/// Fixed constants, NOT derived from data. Normalized values are NOT clamped,
/// so out-of-range inputs can land below 0 or above 1.
pub const NORM_RANGES: [(f64, f64); FEATURE_COUNT] = [
    (0.5, 500.0),      // orbital_period
    (0.5, 10.0),       // transit_duration
    (0.3, 20.0),       // planetary_radius
    (3000.0, 8000.0),  // stellar_temp
    (5.0, 50.0),       // snr
    (0.0001, 0.05),    // depth
];

// Band boundaries (inclusive on the upper band)
const CONFIRMED_THRESHOLD: f64 = 0.65;
const CANDIDATE_THRESHOLD: f64 = 0.35;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Classification label - exactly three mutually exclusive outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "Confirmed Exoplanet")]
    ConfirmedExoplanet,
    #[serde(rename = "Candidate")]
    Candidate,
    #[serde(rename = "False Positive")]
    FalsePositive,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::ConfirmedExoplanet => "Confirmed Exoplanet",
            Label::Candidate => "Candidate",
            Label::FalsePositive => "False Positive",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Probability mass per label; the three values sum to 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    #[serde(rename = "Confirmed Exoplanet")]
    pub confirmed: f64,
    #[serde(rename = "Candidate")]
    pub candidate: f64,
    #[serde(rename = "False Positive")]
    pub false_positive: f64,
}

impl ClassProbabilities {
    pub fn get(&self, label: Label) -> f64 {
        match label {
            Label::ConfirmedExoplanet => self.confirmed,
            Label::Candidate => self.candidate,
            Label::FalsePositive => self.false_positive,
        }
    }

    pub fn sum(&self) -> f64 {
        self.confirmed + self.candidate + self.false_positive
    }

    pub fn max(&self) -> f64 {
        self.confirmed.max(self.candidate).max(self.false_positive)
    }
}

/// Full classification of one observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub prediction: Label,
    /// Probability mass assigned to `prediction`
    pub confidence: f64,
    pub class_probabilities: ClassProbabilities,
    /// Fixed ranking, independent of the input record
    pub feature_importance: Vec<FeatureImportance>,
}

// ============================================================================
// SCORE BANDING
// ============================================================================

/// Band a clamped score into a label plus its probability triple.
///
/// The splits are asymmetric per band; within each band the selected label's
/// probability is the largest by construction of the constants.
pub fn classify_score(score: f64) -> (Label, ClassProbabilities) {
    if score >= CONFIRMED_THRESHOLD {
        let confirmed = 0.6 + (score - CONFIRMED_THRESHOLD) * 0.8;
        let candidate = (1.0 - confirmed) * 0.7;
        let false_positive = 1.0 - confirmed - candidate;
        (
            Label::ConfirmedExoplanet,
            ClassProbabilities { confirmed, candidate, false_positive },
        )
    } else if score >= CANDIDATE_THRESHOLD {
        let candidate = 0.5 + (score - CANDIDATE_THRESHOLD) * 0.5;
        let confirmed = (1.0 - candidate) * 0.4;
        let false_positive = 1.0 - confirmed - candidate;
        (
            Label::Candidate,
            ClassProbabilities { confirmed, candidate, false_positive },
        )
    } else {
        let false_positive = 0.6 + (CANDIDATE_THRESHOLD - score) * 0.8;
        let candidate = (1.0 - false_positive) * 0.6;
        let confirmed = 1.0 - false_positive - candidate;
        (
            Label::FalsePositive,
            ClassProbabilities { confirmed, candidate, false_positive },
        )
    }
}

// ============================================================================
// CLASSIFIER SERVICE
// ============================================================================

/// The classifier service object. Construct once at startup and share by
/// reference; no hidden global instance.
#[derive(Debug)]
pub struct Classifier {
    noise_amplitude: f64,
    rng: Mutex<StdRng>,
    stats: StatsState,
}

impl Classifier {
    /// Production classifier: entropy-seeded noise
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Reproducible noise draws for a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            noise_amplitude: DEFAULT_NOISE_AMPLITUDE,
            rng: Mutex::new(rng),
            stats: StatsState::new(),
        }
    }

    /// Override the noise amplitude (0.0 makes scoring fully deterministic)
    pub fn with_noise_amplitude(mut self, amplitude: f64) -> Self {
        self.noise_amplitude = amplitude;
        self
    }

    /// Weighted aggregate score in [0, 1]
    fn calculate_score(&self, record: &FeatureRecord) -> f64 {
        let values = record.as_array();
        let mut normalized = [0.0f64; FEATURE_COUNT];
        for (i, value) in values.iter().enumerate() {
            let (min, max) = NORM_RANGES[i];
            normalized[i] = (value - min) / (max - min);
        }

        // Layout order: orbital_period, transit_duration, planetary_radius,
        // stellar_temp, snr, depth
        let mut score = 0.0;
        score += normalized[4] * FEATURE_WEIGHTS[4];
        score += normalized[5] * FEATURE_WEIGHTS[5];
        score += normalized[1] * FEATURE_WEIGHTS[1];
        score += normalized[2] * FEATURE_WEIGHTS[2];
        // Periods normalized near 0.3 score best
        score += (1.0 - (normalized[0] - 0.3).abs()) * FEATURE_WEIGHTS[0];
        // Sun-like temperature window gets full credit, everything else half
        let temp_factor = if normalized[3] > 0.3 && normalized[3] < 0.8 { 1.0 } else { 0.5 };
        score += temp_factor * FEATURE_WEIGHTS[3];

        let noise = (self.rng.lock().gen::<f64>() - 0.5) * self.noise_amplitude;
        (score + noise).clamp(0.0, 1.0)
    }

    /// Classify one observation. Does NOT touch the prediction counter;
    /// callers invoke [`Classifier::increment_predictions`] once per scored
    /// record.
    pub fn predict(&self, record: &FeatureRecord) -> Classification {
        let score = self.calculate_score(record);
        let (prediction, class_probabilities) = classify_score(score);
        debug_assert!((class_probabilities.sum() - 1.0).abs() < 1e-9);
        debug_assert!(class_probabilities.get(prediction) == class_probabilities.max());

        Classification {
            prediction,
            confidence: class_probabilities.get(prediction),
            class_probabilities,
            feature_importance: ranked_importance().to_vec(),
        }
    }

    /// Record one scored prediction
    pub fn increment_predictions(&self) {
        self.stats.increment();
    }

    /// Copy of the current model statistics
    pub fn stats(&self) -> ModelStats {
        self.stats.snapshot()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
