//! Model Module - Scoring heuristic and its statistics

pub mod batch;
pub mod classifier;
pub mod importance;
pub mod stats;

// Re-export common types
pub use batch::{score_batch, summarize, BatchPrediction, BatchSummary};
pub use classifier::{Classification, Classifier, ClassProbabilities, Label};
pub use importance::FeatureImportance;
pub use stats::ModelStats;
