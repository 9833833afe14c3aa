//! Ingest Module - CSV batch ingestion and export

pub mod export;
pub mod parse;
pub mod sample;

#[cfg(test)]
mod tests;

// Re-export common types
pub use export::{export_results_csv, write_results_csv};
pub use parse::{parse_csv, IngestError, IngestedRow};
pub use sample::sample_csv;
