//! Batch scoring - independent map over ingested rows

use serde::{Deserialize, Serialize};

use crate::logic::features::FeatureRecord;
use crate::logic::ingest::IngestedRow;

use super::classifier::{Classification, Classifier, Label};

/// One scored batch row: the source tag, the observation, and its result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPrediction {
    pub row_index: usize,
    pub record: FeatureRecord,
    pub result: Classification,
}

/// Per-label counts over a scored batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub confirmed: usize,
    pub candidate: usize,
    pub false_positive: usize,
}

/// Score every row, bumping the prediction counter once per record.
/// Rows are independent; input order is preserved.
pub fn score_batch(classifier: &Classifier, rows: &[IngestedRow]) -> Vec<BatchPrediction> {
    rows.iter()
        .map(|row| {
            let result = classifier.predict(&row.record);
            classifier.increment_predictions();
            BatchPrediction {
                row_index: row.row_index,
                record: row.record,
                result,
            }
        })
        .collect()
}

/// Count labels across a batch
pub fn summarize(results: &[BatchPrediction]) -> BatchSummary {
    let mut summary = BatchSummary {
        total: results.len(),
        confirmed: 0,
        candidate: 0,
        false_positive: 0,
    };
    for prediction in results {
        match prediction.result.prediction {
            Label::ConfirmedExoplanet => summary.confirmed += 1,
            Label::Candidate => summary.candidate += 1,
            Label::FalsePositive => summary.false_positive += 1,
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::ingest::parse_csv;
    use crate::logic::ingest::sample_csv;
    use crate::logic::model::stats::BASELINE_PREDICTIONS;

    #[test]
    fn test_score_batch_preserves_order_and_counts() {
        let classifier = Classifier::with_seed(11);
        let rows = parse_csv(&sample_csv()).unwrap();
        let results = score_batch(&classifier, &rows);

        assert_eq!(results.len(), 8);
        let indices: Vec<usize> = results.iter().map(|r| r.row_index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(
            classifier.stats().total_predictions,
            BASELINE_PREDICTIONS + 8
        );
    }

    #[test]
    fn test_summary_counts_add_up() {
        let classifier = Classifier::with_seed(5);
        let rows = parse_csv(&sample_csv()).unwrap();
        let results = score_batch(&classifier, &rows);
        let summary = summarize(&results);

        assert_eq!(summary.total, 8);
        assert_eq!(
            summary.confirmed + summary.candidate + summary.false_positive,
            summary.total
        );
    }
}
