//! Bounded/seeded nonlinear fit of a shifted/scaled natural logarithm:
//!
//! ```text
//! y = a * ln[b(x - d)] + c      with b(x - d) > 0 at every sample
//! ```
//!
//! This is the one estimator where numerical robustness is actively
//! engineered. The optimizer is boxed to `a, b >= 0` and `d <= min(x) + 1`,
//! and seeded at `[1, 1, 0, min(x) - 1]` so the logarithm argument starts
//! strictly positive (`x - d >= 1` at every sample). Trial steps that leave
//! the domain produce non-finite residuals and are rejected by the damping
//! loop, so the iterate can approach the boundary but never report from
//! outside it.

use nalgebra::DVector;

use crate::domain::{FitResult, ModelFamily};
use crate::error::FitError;
use crate::fit::metrics::{self, MeanErrorSign};
use crate::fit::{dense_curve, equation, validate_xy, x_extent};
use crate::math::lm::{minimize_least_squares, LmOptions};

const FAMILY: &str = "logarithmic";

/// Evaluate `a * ln[b(x - d)] + c` with `params = [a, b, c, d]`.
///
/// Returns NaN outside the domain (`b(x - d) <= 0`); the optimizer treats
/// that as a rejected step, and display code skips non-finite points.
pub fn eval_logarithmic(params: &[f64], x: f64) -> f64 {
    let (a, b, c, d) = (params[0], params[1], params[2], params[3]);
    let arg = b * (x - d);
    if arg <= 0.0 {
        return f64::NAN;
    }
    a * arg.ln() + c
}

/// Fit the logarithmic family to the samples.
pub fn fit_logarithmic(x: &[f64], y: &[f64]) -> Result<FitResult, FitError> {
    validate_xy(x, y)?;
    let (x_min, _) = x_extent(x);

    let residuals = |p: &[f64]| {
        let mut out = DVector::zeros(x.len());
        for (i, (&xi, &yi)) in x.iter().zip(y.iter()).enumerate() {
            let fitted = eval_logarithmic(p, xi);
            if !fitted.is_finite() {
                return None;
            }
            out[i] = fitted - yi;
        }
        Some(out)
    };

    let seed = [1.0, 1.0, 0.0, x_min - 1.0];
    let bounds = [
        (0.0, f64::INFINITY),
        (0.0, f64::INFINITY),
        (f64::NEG_INFINITY, f64::INFINITY),
        (f64::NEG_INFINITY, x_min + 1.0),
    ];

    let params = minimize_least_squares(residuals, &seed, Some(&bounds), &LmOptions::default())
        .ok_or(FitError::FitNotFound { family: FAMILY })?;

    let y_fit: Vec<f64> = x.iter().map(|&xi| eval_logarithmic(&params, xi)).collect();
    let stats = metrics::compute(y, &y_fit, MeanErrorSign::FittedMinusObserved);
    let equation =
        equation::logarithmic_equation(params[0], params[1], params[2], params[3]);
    let dense = dense_curve(x, |xi| eval_logarithmic(&params, xi));

    Ok(FitResult {
        family: ModelFamily::Logarithmic,
        equation,
        params,
        stats,
        y_fit,
        dense,
    })
}
