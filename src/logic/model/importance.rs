//! Feature Importance - fixed explanatory ranking
//!
//! The weights double as the scoring coefficients in `classifier.rs`. The
//! ranking shown to the user never depends on the input record.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::logic::features::layout::{display_name, FEATURE_COUNT, FEATURE_LAYOUT};

/// Importance weights aligned with FEATURE_LAYOUT order
/// (orbital_period, transit_duration, planetary_radius, stellar_temp, snr, depth)
pub const FEATURE_WEIGHTS: [f64; FEATURE_COUNT] = [0.09, 0.19, 0.15, 0.05, 0.28, 0.24];

/// One (feature, weight) pair of the explanatory ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

static RANKED: Lazy<Vec<FeatureImportance>> = Lazy::new(|| {
    let mut ranked: Vec<FeatureImportance> = FEATURE_LAYOUT
        .iter()
        .zip(FEATURE_WEIGHTS.iter())
        .map(|(name, &importance)| FeatureImportance {
            feature: display_name(name),
            importance,
        })
        .collect();

    // Sort by importance DESC
    ranked.sort_by(|a, b| {
        b.importance
            .partial_cmp(&a.importance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
});

/// The fixed ranking, sorted descending by weight. Identical for every call.
pub fn ranked_importance() -> &'static [FeatureImportance] {
    &RANKED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_is_sorted_descending() {
        let ranked = ranked_importance();
        assert_eq!(ranked.len(), FEATURE_COUNT);
        for pair in ranked.windows(2) {
            assert!(pair[0].importance >= pair[1].importance);
        }
    }

    #[test]
    fn test_ranking_identical_across_calls() {
        assert_eq!(ranked_importance(), ranked_importance());
    }

    #[test]
    fn test_weights_sum_to_one() {
        let sum: f64 = FEATURE_WEIGHTS.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_feature_is_snr() {
        let ranked = ranked_importance();
        assert_eq!(ranked[0].feature, "Snr");
        assert_eq!(ranked[0].importance, 0.28);
        assert_eq!(ranked[1].feature, "Depth");
    }

    #[test]
    fn test_display_names() {
        let names: Vec<&str> = ranked_importance().iter().map(|i| i.feature.as_str()).collect();
        assert!(names.contains(&"Orbital Period"));
        assert!(names.contains(&"Transit Duration"));
        assert!(names.contains(&"Stellar Temp"));
    }
}
