//! Ordinary least-squares polynomial regression.
//!
//! The degree is caller-chosen (1..=10). The Vandermonde system is solved
//! directly — no iteration, so this estimator always produces a result for
//! valid input. A degree at or above the number of distinct x-values makes
//! the system rank-deficient; that case is deliberately not guarded and
//! falls through to the SVD solver's minimum-norm solution. Callers who
//! need exactness validate `degree < n` themselves.

use nalgebra::{DMatrix, DVector};

use crate::domain::{FitResult, ModelFamily};
use crate::error::FitError;
use crate::fit::metrics::{self, MeanErrorSign};
use crate::fit::{dense_curve, equation, validate_xy};
use crate::math::ols::solve_least_squares;

pub const MIN_DEGREE: usize = 1;
pub const MAX_DEGREE: usize = 10;

/// Fit a polynomial of the given degree.
///
/// Coefficients in the result are ordered from the highest power down to
/// the constant term.
pub fn fit_polynomial(x: &[f64], y: &[f64], degree: usize) -> Result<FitResult, FitError> {
    validate_xy(x, y)?;
    if !(MIN_DEGREE..=MAX_DEGREE).contains(&degree) {
        return Err(FitError::MalformedInput(format!(
            "polynomial degree must be between {MIN_DEGREE} and {MAX_DEGREE}, got {degree}"
        )));
    }

    let n = x.len();
    let cols = degree + 1;

    // Vandermonde design matrix, highest power in the first column.
    let mut a = DMatrix::<f64>::zeros(n, cols);
    for (i, &xi) in x.iter().enumerate() {
        let mut pow = 1.0;
        for k in 0..cols {
            a[(i, degree - k)] = pow;
            pow *= xi;
        }
    }
    let b = DVector::from_column_slice(y);

    let coeffs = solve_least_squares(&a, &b).ok_or(FitError::FitNotFound {
        family: "polynomial",
    })?;
    let coeffs: Vec<f64> = coeffs.iter().copied().collect();

    let y_fit: Vec<f64> = x.iter().map(|&xi| eval_polynomial(&coeffs, xi)).collect();
    let stats = metrics::compute(y, &y_fit, MeanErrorSign::ObservedMinusFitted);
    let equation = equation::polynomial_equation(&coeffs);
    let dense = dense_curve(x, |xi| eval_polynomial(&coeffs, xi));

    Ok(FitResult {
        family: ModelFamily::Polynomial,
        equation,
        params: coeffs,
        stats,
        y_fit,
        dense,
    })
}

/// Evaluate a polynomial (coefficients highest power first) via Horner.
pub fn eval_polynomial(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}
