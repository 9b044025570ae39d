//! CSV export of the combined prediction table
//!
//! One row per point: `Date,Predicted,Lower,Upper,Actual`, with `N/A` in the
//! actual column for future days.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{ForecastError, Result};
use crate::prediction::Prediction;

const HEADER: [&str; 5] = ["Date", "Predicted", "Lower", "Upper", "Actual"];
const MISSING_ACTUAL: &str = "N/A";

/// Suggested download name, e.g. `AAPL_predictions.csv`
pub fn export_file_name(ticker: &str) -> String {
    format!("{}_predictions.csv", ticker.to_uppercase())
}

/// Write the prediction table to `writer`
pub fn write_csv<W: Write>(prediction: &Prediction, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for point in &prediction.predictions {
        let actual = point
            .actual()
            .map(|a| a.to_string())
            .unwrap_or_else(|| MISSING_ACTUAL.to_string());

        wtr.write_record([
            point.date.to_string(),
            point.predicted.to_string(),
            point.lower.to_string(),
            point.upper.to_string(),
            actual,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render the prediction table as a CSV string
pub fn to_csv_string(prediction: &Prediction) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(prediction, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ForecastError::DataError(e.to_string()))
}

/// Write the prediction table to a file, replacing it if it exists
pub fn export_csv_file<P: AsRef<Path>>(prediction: &Prediction, path: P) -> Result<()> {
    let file = File::create(path)?;
    write_csv(prediction, file)
}
