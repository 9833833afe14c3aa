//! CSV Batch Parser
//!
//! Header matching is case- and separator-insensitive and order-insensitive;
//! unrecognized extra columns are ignored. A malformed data row is skipped
//! with a warning, never fatal. A missing required column or an empty result
//! set aborts the whole ingestion.

use serde::{Deserialize, Serialize};

use crate::logic::features::{FeatureRecord, FEATURE_COUNT, FEATURE_LAYOUT};

/// A parsed record tagged with its 1-based source data-line number.
///
/// Kept distinct from the bare [`FeatureRecord`]: scoring consumes the
/// projection (`row.record`), result reporting keeps the tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestedRow {
    pub row_index: usize,
    pub record: FeatureRecord,
}

/// Fatal ingestion failure (the file is discarded, the user may retry)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// Fewer than two lines of input
    TooShort,
    /// A required column has no matching header
    MissingColumn {
        field: &'static str,
        headers: Vec<String>,
    },
    /// Every data row was blank or skipped
    NoValidRows,
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::TooShort => {
                write!(f, "CSV must contain at least a header row and one data row")
            }
            IngestError::MissingColumn { field, headers } => write!(
                f,
                "Required column '{}' not found in CSV. Found headers: {}",
                field,
                headers.join(", ")
            ),
            IngestError::NoValidRows => write!(f, "No valid data rows found in CSV"),
        }
    }
}

impl std::error::Error for IngestError {}

/// Normalized form used for header comparison: lowercase, underscores and
/// spaces stripped.
fn normalize_header(header: &str) -> String {
    header
        .to_lowercase()
        .chars()
        .filter(|c| *c != '_' && *c != ' ')
        .collect()
}

/// Parse raw CSV text into ingested rows, preserving input order.
pub fn parse_csv(text: &str) -> Result<Vec<IngestedRow>, IngestError> {
    let lines: Vec<&str> = text.trim().lines().collect();
    if lines.len() < 2 {
        return Err(IngestError::TooShort);
    }

    let headers: Vec<String> = lines[0].split(',').map(|h| h.trim().to_lowercase()).collect();

    // Resolve one column index per required field, in layout order
    let mut column_for = [0usize; FEATURE_COUNT];
    for (slot, &field) in FEATURE_LAYOUT.iter().enumerate() {
        let wanted = normalize_header(field);
        match headers.iter().position(|h| normalize_header(h) == wanted) {
            Some(index) => column_for[slot] = index,
            None => return Err(IngestError::MissingColumn { field, headers }),
        }
    }

    let mut rows = Vec::new();
    for (offset, raw_line) in lines[1..].iter().enumerate() {
        let row_index = offset + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let values: Vec<&str> = line.split(',').map(str::trim).collect();
        match extract_record(&values, &column_for) {
            Some(record) => rows.push(IngestedRow { row_index, record }),
            None => {
                log::warn!("Row {} contains invalid numeric values, skipping", row_index);
            }
        }
    }

    if rows.is_empty() {
        return Err(IngestError::NoValidRows);
    }

    Ok(rows)
}

/// Pull the six matched columns out of one data row. `None` means the row is
/// malformed (missing column, non-numeric, or non-finite value) and must be
/// skipped.
fn extract_record(values: &[&str], column_for: &[usize; FEATURE_COUNT]) -> Option<FeatureRecord> {
    let mut parsed = [0.0f64; FEATURE_COUNT];
    for (slot, &column) in column_for.iter().enumerate() {
        let value: f64 = values.get(column)?.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        parsed[slot] = value;
    }
    Some(FeatureRecord::from_array(parsed))
}
