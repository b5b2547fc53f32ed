//! CSV ingest and normalization.
//!
//! Input files are headerless numeric CSVs: two columns `x,y` for curve
//! fits, one column `x` for histograms. Parsing is strict — a blank or
//! non-numeric cell fails the whole load with the offending 1-based line
//! number, so the user fills in the blanks rather than silently fitting a
//! subset.

use std::fs::File;
use std::path::Path;

use crate::domain::{SampleStats, Samples};
use crate::error::{AppError, FitError};

/// Ingest output: normalized samples + summary stats.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub samples: Samples,
    pub stats: SampleStats,
    pub rows_read: usize,
}

/// Load a two-column (x, y) CSV.
pub fn load_xy_csv(path: &Path) -> Result<IngestedData, AppError> {
    let mut reader = open_reader(path)?;

    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        let line = idx + 1;
        let record = result
            .map_err(|e| AppError::new(2, format!("CSV parse error at line {line}: {e}")))?;
        if record.iter().all(|cell| cell.is_empty()) {
            continue; // trailing blank line
        }
        rows_read += 1;
        x.push(parse_cell(&record, 0, line)?);
        y.push(parse_cell(&record, 1, line)?);
    }

    let samples = Samples { x, y };
    let stats = SampleStats::from_samples(&samples);
    Ok(IngestedData {
        samples,
        stats,
        rows_read,
    })
}

/// Load a one-column CSV (histogram input).
pub fn load_x_csv(path: &Path) -> Result<Vec<f64>, AppError> {
    let mut reader = open_reader(path)?;

    let mut x = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let line = idx + 1;
        let record = result
            .map_err(|e| AppError::new(2, format!("CSV parse error at line {line}: {e}")))?;
        if record.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        x.push(parse_cell(&record, 0, line)?);
    }

    Ok(x)
}

fn open_reader(path: &Path) -> Result<csv::Reader<File>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;

    Ok(csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file))
}

fn parse_cell(record: &csv::StringRecord, col: usize, line: usize) -> Result<f64, AppError> {
    let cell = record.get(col).unwrap_or("");
    if cell.is_empty() {
        return Err(
            FitError::MalformedInput(format!("line {line}: missing value in column {}", col + 1))
                .into(),
        );
    }
    let value: f64 = cell.parse().map_err(|_| {
        FitError::MalformedInput(format!("line {line}: '{cell}' is not a number"))
    })?;
    if !value.is_finite() {
        return Err(
            FitError::MalformedInput(format!("line {line}: non-finite value '{cell}'")).into(),
        );
    }
    Ok(value)
}
