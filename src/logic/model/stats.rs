//! Model Statistics
//!
//! Quality metrics are fixed display constants; only the prediction counter
//! moves. `last_updated` is captured once when the classifier is constructed
//! and never refreshed per prediction.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::logic::features::layout::{layout_hash, FEATURE_VERSION};

/// Fixed quality metrics
pub const MODEL_ACCURACY: f64 = 0.92;
pub const MODEL_PRECISION: f64 = 0.90;
pub const MODEL_RECALL: f64 = 0.88;
pub const MODEL_F1: f64 = 0.89;

/// Counter seed: predictions attributed to the model before this process
pub const BASELINE_PREDICTIONS: u64 = 1247;

/// Snapshot returned to callers (a copy, not a live reference)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStats {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub total_predictions: u64,
    pub last_updated: DateTime<Utc>,
    pub feature_version: u8,
    pub layout_hash: u32,
}

/// Live counter state owned by the classifier
#[derive(Debug)]
pub struct StatsState {
    total_predictions: AtomicU64,
    last_updated: DateTime<Utc>,
}

impl StatsState {
    pub fn new() -> Self {
        Self {
            total_predictions: AtomicU64::new(BASELINE_PREDICTIONS),
            last_updated: Utc::now(),
        }
    }

    /// Record one scored prediction. Atomic, so concurrent batch scoring
    /// cannot lose updates.
    pub fn increment(&self) {
        self.total_predictions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ModelStats {
        ModelStats {
            accuracy: MODEL_ACCURACY,
            precision: MODEL_PRECISION,
            recall: MODEL_RECALL,
            f1: MODEL_F1,
            total_predictions: self.total_predictions.load(Ordering::Relaxed),
            last_updated: self.last_updated,
            feature_version: FEATURE_VERSION,
            layout_hash: layout_hash(),
        }
    }
}

impl Default for StatsState {
    fn default() -> Self {
        Self::new()
    }
}
