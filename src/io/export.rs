//! Result exports.
//!
//! - per-sample results CSV, easy to consume in spreadsheets or scripts
//! - curve JSON: the "portable" representation of a fitted curve
//!   (family + equation + parameters + a precomputed dense grid)

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{CurveFile, FitResult, Samples};
use crate::error::AppError;

/// Write per-sample results (`x,y_obs,y_fit,residual`) to a CSV file.
pub fn write_results_csv(path: &Path, samples: &Samples, fit: &FitResult) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;

    writeln!(file, "x,y_obs,y_fit,residual")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for ((&x, &y_obs), &y_fit) in samples.x.iter().zip(samples.y.iter()).zip(fit.y_fit.iter()) {
        writeln!(
            file,
            "{x},{y_obs},{y_fit:.10},{:.10}",
            y_obs - y_fit
        )
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Write a curve JSON file.
pub fn write_curve_json(path: &Path, fit: &FitResult) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create curve JSON '{}': {e}", path.display()))
    })?;

    let curve = CurveFile {
        tool: "cfit".to_string(),
        family: fit.family,
        equation: fit.equation.clone(),
        params: fit.params.clone(),
        stats: fit.stats.clone(),
        grid: fit.dense.clone(),
    };

    serde_json::to_writer_pretty(file, &curve)
        .map_err(|e| AppError::new(2, format!("Failed to write curve JSON: {e}")))?;

    Ok(())
}

/// Read a curve JSON file back.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open curve JSON '{}': {e}", path.display())))?;
    let curve: CurveFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid curve JSON: {e}")))?;
    Ok(curve)
}
