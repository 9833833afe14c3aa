use super::export::{export_results_csv, write_results_csv};
use super::parse::{parse_csv, IngestError};
use super::sample::sample_csv;
use crate::logic::model::{score_batch, Classifier};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_sample_round_trip() {
    let rows = parse_csv(&sample_csv()).unwrap();
    assert_eq!(rows.len(), 8);

    // (orbital_period, transit_duration, planetary_radius, stellar_temp, snr, depth)
    let expected = [
        (15.234, 2.45, 1.12, 5778.0, 12.5, 0.0023),
        (3.567, 1.23, 0.89, 6200.0, 18.3, 0.0045),
        (89.123, 4.12, 2.34, 5100.0, 8.7, 0.0012),
        (1.234, 0.78, 0.65, 4500.0, 7.2, 0.0008),
        (234.567, 5.67, 3.45, 5900.0, 22.1, 0.0067),
        (45.678, 3.12, 1.78, 6100.0, 15.6, 0.0034),
        (7.890, 1.45, 0.98, 5500.0, 9.8, 0.0015),
        (123.456, 4.56, 2.12, 5800.0, 19.4, 0.0052),
    ];

    for (row, want) in rows.iter().zip(expected.iter()) {
        let record = &row.record;
        assert_eq!(record.orbital_period, want.0);
        assert_eq!(record.transit_duration, want.1);
        assert_eq!(record.planetary_radius, want.2);
        assert_eq!(record.stellar_temp, want.3);
        assert_eq!(record.snr, want.4);
        assert_eq!(record.depth, want.5);
    }
}

#[test]
fn test_row_indices_are_one_based_source_lines() {
    let csv = "orbital_period,transit_duration,planetary_radius,stellar_temp,snr,depth\n\
               15.234,2.45,1.12,5778,12.5,0.0023\n\
               \n\
               3.567,1.23,0.89,6200,18.3,0.0045";
    let rows = parse_csv(csv).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].row_index, 1);
    // Blank line still consumes a source line number
    assert_eq!(rows[1].row_index, 3);
}

#[test]
fn test_header_order_independent() {
    let canonical = parse_csv(
        "orbital_period,transit_duration,planetary_radius,stellar_temp,snr,depth\n\
         15.234,2.45,1.12,5778,12.5,0.0023",
    )
    .unwrap();
    let reordered = parse_csv(
        "snr,depth,orbital_period,stellar_temp,planetary_radius,transit_duration\n\
         12.5,0.0023,15.234,5778,1.12,2.45",
    )
    .unwrap();

    assert_eq!(canonical[0].record, reordered[0].record);
}

#[test]
fn test_header_matching_is_case_and_separator_insensitive() {
    let csv = "Orbital Period,TRANSIT_DURATION,PlanetaryRadius,Stellar Temp,SNR,Depth\n\
               15.234,2.45,1.12,5778,12.5,0.0023";
    let rows = parse_csv(csv).unwrap();
    assert_eq!(rows[0].record.orbital_period, 15.234);
    assert_eq!(rows[0].record.snr, 12.5);
}

#[test]
fn test_extra_columns_ignored() {
    let csv = "kepler_id,orbital_period,transit_duration,planetary_radius,stellar_temp,snr,depth,notes\n\
               K-452b,15.234,2.45,1.12,5778,12.5,0.0023,looks promising";
    let rows = parse_csv(csv).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].record.depth, 0.0023);
}

#[test]
fn test_missing_column_names_the_field() {
    let csv = "orbital_period,transit_duration,planetary_radius,stellar_temp,snr\n\
               15.234,2.45,1.12,5778,12.5";
    let err = parse_csv(csv).unwrap_err();
    match &err {
        IngestError::MissingColumn { field, headers } => {
            assert_eq!(*field, "depth");
            assert!(headers.contains(&"snr".to_string()));
        }
        other => panic!("expected MissingColumn, got {:?}", other),
    }
    assert!(err.to_string().contains("'depth'"));
    assert!(err.to_string().contains("snr"));
}

#[test]
fn test_bad_row_skipped_others_kept() {
    let csv = "orbital_period,transit_duration,planetary_radius,stellar_temp,snr,depth\n\
               15.234,2.45,1.12,5778,abc,0.0023\n\
               3.567,1.23,0.89,6200,18.3,0.0045";
    let rows = parse_csv(csv).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].row_index, 2);
    assert_eq!(rows[0].record.snr, 18.3);
}

#[test]
fn test_non_finite_row_skipped() {
    // "NaN" parses as a float but violates the finite-fields invariant
    let csv = "orbital_period,transit_duration,planetary_radius,stellar_temp,snr,depth\n\
               15.234,2.45,1.12,5778,NaN,0.0023\n\
               3.567,1.23,0.89,6200,18.3,0.0045";
    let rows = parse_csv(csv).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].record.snr, 18.3);
}

#[test]
fn test_short_row_skipped() {
    let csv = "orbital_period,transit_duration,planetary_radius,stellar_temp,snr,depth\n\
               15.234,2.45\n\
               3.567,1.23,0.89,6200,18.3,0.0045";
    let rows = parse_csv(csv).unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_all_rows_bad_is_fatal() {
    let csv = "orbital_period,transit_duration,planetary_radius,stellar_temp,snr,depth\n\
               x,y,z,w,u,v";
    assert_eq!(parse_csv(csv).unwrap_err(), IngestError::NoValidRows);
}

#[test]
fn test_header_only_is_fatal() {
    let csv = "orbital_period,transit_duration,planetary_radius,stellar_temp,snr,depth";
    assert_eq!(parse_csv(csv).unwrap_err(), IngestError::TooShort);
}

#[test]
fn test_export_format() {
    let classifier = Classifier::with_seed(9);
    let rows = parse_csv(&sample_csv()).unwrap();
    let results = score_batch(&classifier, &rows);
    let csv = export_results_csv(&results);

    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Index,Prediction,Confidence,Orbital Period,Transit Duration,Planetary Radius,Stellar Temp,SNR,Depth"
    );

    let first = lines.next().unwrap();
    let columns: Vec<&str> = first.split(',').collect();
    assert_eq!(columns.len(), 9);
    assert_eq!(columns[0], "1");
    assert!(["Confirmed Exoplanet", "Candidate", "False Positive"].contains(&columns[1]));
    // "NN.NN%" confidence formatting
    assert!(columns[2].ends_with('%'));
    let percent: f64 = columns[2].trim_end_matches('%').parse().unwrap();
    assert!((0.0..=100.0).contains(&percent));
    assert_eq!(columns[3], "15.234");
    assert_eq!(columns[6], "5778");

    // One line per result plus the header
    assert_eq!(csv.lines().count(), 9);
}

#[test]
fn test_write_results_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.csv");

    let classifier = Classifier::with_seed(9);
    let rows = parse_csv(&sample_csv()).unwrap();
    let results = score_batch(&classifier, &rows);
    write_results_csv(&path, &results).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Index,Prediction,Confidence"));
    assert!(content.ends_with('\n'));
    assert_eq!(content.trim_end().lines().count(), 9);
}
