//! Nonlinear fit of a shifted/scaled exponential:
//!
//! ```text
//! y = a * e^[b(x - d)] + c
//! ```
//!
//! All four parameters are free and the optimizer starts from its default
//! all-ones guess. No warm start is attempted: data far from unit scale can
//! fail to converge, and that failure surfaces as `FitNotFound` rather than
//! being papered over with a smarter seed.

use nalgebra::DVector;

use crate::domain::{FitResult, ModelFamily};
use crate::error::FitError;
use crate::fit::metrics::{self, MeanErrorSign};
use crate::fit::{dense_curve, equation, validate_xy};
use crate::math::lm::{minimize_least_squares, LmOptions};

const FAMILY: &str = "exponential";

/// Evaluate `a * e^[b(x - d)] + c` with `params = [a, b, c, d]`.
pub fn eval_exponential(params: &[f64], x: f64) -> f64 {
    let (a, b, c, d) = (params[0], params[1], params[2], params[3]);
    a * (b * (x - d)).exp() + c
}

/// Fit the exponential family to the samples.
pub fn fit_exponential(x: &[f64], y: &[f64]) -> Result<FitResult, FitError> {
    validate_xy(x, y)?;

    let residuals = |p: &[f64]| {
        Some(DVector::from_iterator(
            x.len(),
            x.iter()
                .zip(y.iter())
                .map(|(&xi, &yi)| eval_exponential(p, xi) - yi),
        ))
    };

    let params = minimize_least_squares(residuals, &[1.0; 4], None, &LmOptions::default())
        .ok_or(FitError::FitNotFound { family: FAMILY })?;

    let y_fit: Vec<f64> = x.iter().map(|&xi| eval_exponential(&params, xi)).collect();
    let stats = metrics::compute(y, &y_fit, MeanErrorSign::FittedMinusObserved);
    let equation =
        equation::exponential_equation(params[0], params[1], params[2], params[3]);
    let dense = dense_curve(x, |xi| eval_exponential(&params, xi));

    Ok(FitResult {
        family: ModelFamily::Exponential,
        equation,
        params,
        stats,
        y_fit,
        dense,
    })
}
