//! Canonical sample CSV - download template for batch uploads

use crate::logic::features::FEATURE_LAYOUT;

/// Fixed example rows, one candidate per line
const SAMPLE_ROWS: [&str; 8] = [
    "15.234,2.45,1.12,5778,12.5,0.0023",
    "3.567,1.23,0.89,6200,18.3,0.0045",
    "89.123,4.12,2.34,5100,8.7,0.0012",
    "1.234,0.78,0.65,4500,7.2,0.0008",
    "234.567,5.67,3.45,5900,22.1,0.0067",
    "45.678,3.12,1.78,6100,15.6,0.0034",
    "7.890,1.45,0.98,5500,9.8,0.0015",
    "123.456,4.56,2.12,5800,19.4,0.0052",
];

/// Build the sample CSV: canonical header plus the fixed example rows.
pub fn sample_csv() -> String {
    let header = FEATURE_LAYOUT.join(",");
    let mut out = String::with_capacity(256);
    out.push_str(&header);
    for row in SAMPLE_ROWS {
        out.push('\n');
        out.push_str(row);
    }
    out
}
