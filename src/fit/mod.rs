//! The curve-fitting engine.
//!
//! One estimator per model family plus shared leaf utilities:
//!
//! - `poly` — ordinary least-squares polynomial regression
//! - `exp` — nonlinear fit of `y = a·e^[b(x - d)] + c`
//! - `log` — bounded/seeded nonlinear fit of `y = a·ln[b(x - d)] + c`
//! - `metrics` — residual-error statistics shared by all estimators
//! - `equation` — equation-string rendering, one rule per family
//! - `histogram` — automatic-binning frequency tables
//!
//! No estimator depends on another. Every fit is a pure, blocking call:
//! all working state is local, nothing is cached, and repeated calls with
//! identical inputs re-fit from scratch.

pub mod equation;
pub mod exp;
pub mod histogram;
pub mod log;
pub mod metrics;
pub mod poly;

pub use equation::*;
pub use exp::*;
pub use histogram::*;
pub use log::*;
pub use metrics::*;
pub use poly::*;

use crate::domain::{DenseCurve, ModelFamily};
use crate::error::FitError;
use crate::math::grid::{linspace, DENSE_POINTS};

/// Fit the requested family to the given samples.
///
/// `degree` is only consulted for `ModelFamily::Polynomial`.
pub fn fit_samples(
    family: ModelFamily,
    x: &[f64],
    y: &[f64],
    degree: usize,
) -> Result<crate::domain::FitResult, FitError> {
    match family {
        ModelFamily::Polynomial => poly::fit_polynomial(x, y, degree),
        ModelFamily::Exponential => exp::fit_exponential(x, y),
        ModelFamily::Logarithmic => log::fit_logarithmic(x, y),
    }
}

/// Shared precondition check: equal lengths, at least two points, all finite.
pub(crate) fn validate_xy(x: &[f64], y: &[f64]) -> Result<(), FitError> {
    if x.len() != y.len() || x.len() < 2 {
        return Err(FitError::InsufficientData {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if let Some(v) = x.iter().chain(y.iter()).find(|v| !v.is_finite()) {
        return Err(FitError::MalformedInput(format!(
            "non-finite sample value {v}"
        )));
    }
    Ok(())
}

/// Inclusive x-extent of a non-empty sample.
pub(crate) fn x_extent(x: &[f64]) -> (f64, f64) {
    x.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    })
}

/// Sample the fitted model on 500 evenly spaced points across the data's
/// x-extent, for display only.
pub(crate) fn dense_curve(x: &[f64], model: impl Fn(f64) -> f64) -> DenseCurve {
    let (lo, hi) = x_extent(x);
    let grid = linspace(lo, hi, DENSE_POINTS);
    let y = grid.iter().map(|&xi| model(xi)).collect();
    DenseCurve { x: grid, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_single_point() {
        let err = validate_xy(&[1.0], &[1.0]).unwrap_err();
        assert!(matches!(err, FitError::InsufficientData { x_len: 1, y_len: 1 }));
    }

    #[test]
    fn validate_rejects_mismatched_lengths() {
        let err = validate_xy(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, FitError::InsufficientData { x_len: 3, y_len: 2 }));
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        let err = validate_xy(&[1.0, f64::NAN], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, FitError::MalformedInput(_)));
    }

    #[test]
    fn every_family_rejects_a_single_point() {
        for family in [
            ModelFamily::Polynomial,
            ModelFamily::Exponential,
            ModelFamily::Logarithmic,
        ] {
            let err = fit_samples(family, &[1.0], &[1.0], 2).unwrap_err();
            assert!(
                matches!(err, FitError::InsufficientData { .. }),
                "family {family:?} returned {err:?}"
            );
        }
    }

    #[test]
    fn dense_curve_spans_data_extent() {
        let curve = dense_curve(&[3.0, 1.0, 2.0], |x| 2.0 * x);
        assert_eq!(curve.x.len(), DENSE_POINTS);
        assert_eq!(curve.y.len(), DENSE_POINTS);
        assert!((curve.x[0] - 1.0).abs() < 1e-12);
        assert!((curve.x[DENSE_POINTS - 1] - 3.0).abs() < 1e-12);
        assert!((curve.y[0] - 2.0).abs() < 1e-12);
    }
}
