//! Batch-result CSV export

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::logic::model::BatchPrediction;

/// Literal export header, fixed column order
const EXPORT_HEADER: &str =
    "Index,Prediction,Confidence,Orbital Period,Transit Duration,Planetary Radius,Stellar Temp,SNR,Depth";

/// Render scored results as CSV. Confidence is percent with two decimals;
/// the index is 1-based over the result list, not the source rowIndex.
pub fn export_results_csv(results: &[BatchPrediction]) -> String {
    let mut out = String::from(EXPORT_HEADER);
    for (idx, prediction) in results.iter().enumerate() {
        let record = &prediction.record;
        out.push('\n');
        out.push_str(&format!(
            "{},{},{:.2}%,{},{},{},{},{},{}",
            idx + 1,
            prediction.result.prediction,
            prediction.result.confidence * 100.0,
            record.orbital_period,
            record.transit_duration,
            record.planetary_radius,
            record.stellar_temp,
            record.snr,
            record.depth,
        ));
    }
    out
}

/// Write the export to disk
pub fn write_results_csv(path: &Path, results: &[BatchPrediction]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(export_results_csv(results).as_bytes())?;
    file.write_all(b"\n")?;
    file.flush()?;
    log::info!("Exported {} results to {}", results.len(), path.display());
    Ok(())
}
