//! Damped nonlinear least squares (Levenberg–Marquardt).
//!
//! The nonlinear estimators minimize `Σ r_i(p)^2` over a small parameter
//! vector `p`, optionally constrained to a box. Each damped step solves the
//! stacked linear least-squares problem
//!
//! ```text
//! [ J            ]       [ -r ]
//! [ sqrt(λ)·D    ] · δ = [  0 ]
//! ```
//!
//! which reuses the same SVD solver as the linear fits. The Jacobian is
//! formed by finite differences; a trial step whose residuals are non-finite
//! (e.g. a logarithm argument driven non-positive) is rejected and the
//! damping increased, which keeps the search inside the valid domain without
//! any model-specific code here.
//!
//! Termination mirrors the usual library behavior: a vanishing gradient,
//! a negligible cost reduction, or an exhausted damping ladder all count as
//! convergence (a local minimum is a result, not an error); only running out
//! of iterations — or failing to evaluate the model at all — is a failure.

use nalgebra::{DMatrix, DVector};

use crate::math::ols::solve_least_squares;

/// Optimizer tuning knobs. The defaults suit the small (≤4 parameter)
/// problems in this crate.
#[derive(Debug, Clone)]
pub struct LmOptions {
    /// Maximum outer iterations before giving up.
    pub max_iters: usize,
    /// Relative cost-reduction threshold for convergence.
    pub ftol: f64,
    /// Step-norm threshold for convergence.
    pub xtol: f64,
    /// Gradient infinity-norm threshold for convergence.
    pub gtol: f64,
    /// Initial damping factor.
    pub lambda_init: f64,
    /// Damping ceiling; exceeding it means no descent step exists.
    pub lambda_max: f64,
}

impl Default for LmOptions {
    fn default() -> Self {
        Self {
            max_iters: 200,
            ftol: 1e-12,
            xtol: 1e-12,
            gtol: 1e-12,
            lambda_init: 1e-3,
            lambda_max: 1e12,
        }
    }
}

/// Minimize `Σ residuals(p)_i^2` starting from `p0`.
///
/// `residuals` returns `None` when `p` is outside the model's domain.
/// `bounds` (when present) gives one `(lo, hi)` interval per parameter;
/// use infinities for unbounded sides. The start point and every accepted
/// step are clamped into the box.
///
/// Returns `None` when no fit can be produced: the model cannot be
/// evaluated at the start point, the Jacobian cannot be formed, or the
/// iteration budget runs out without convergence.
pub fn minimize_least_squares<F>(
    residuals: F,
    p0: &[f64],
    bounds: Option<&[(f64, f64)]>,
    opts: &LmOptions,
) -> Option<Vec<f64>>
where
    F: Fn(&[f64]) -> Option<DVector<f64>>,
{
    let m = p0.len();
    let mut p = clamp_into_bounds(p0, bounds);
    let mut r = eval_finite(&residuals, &p)?;
    let mut cost = r.norm_squared();
    let mut lambda = opts.lambda_init;

    for _ in 0..opts.max_iters {
        let jac = numeric_jacobian(&residuals, &p, &r, bounds)?;
        let grad = jac.transpose() * &r;
        if grad.amax() <= opts.gtol {
            return Some(p);
        }

        // Column scaling keeps the damping meaningful when parameters have
        // very different magnitudes (and regularizes unused directions).
        let mut diag = vec![0.0; m];
        for (j, d) in diag.iter_mut().enumerate() {
            *d = jac.column(j).norm_squared().max(1e-12);
        }

        let n = r.len();
        let mut accepted = false;

        while lambda <= opts.lambda_max {
            let mut a = DMatrix::<f64>::zeros(n + m, m);
            a.view_mut((0, 0), (n, m)).copy_from(&jac);
            for j in 0..m {
                a[(n + j, j)] = (lambda * diag[j]).sqrt();
            }
            let mut b = DVector::<f64>::zeros(n + m);
            b.rows_mut(0, n).copy_from(&(-&r));

            let Some(delta) = solve_least_squares(&a, &b) else {
                lambda *= 10.0;
                continue;
            };

            let trial: Vec<f64> = p.iter().zip(delta.iter()).map(|(pi, di)| pi + di).collect();
            let trial = clamp_into_bounds(&trial, bounds);

            let Some(r_trial) = eval_finite(&residuals, &trial) else {
                lambda *= 10.0;
                continue;
            };
            let cost_trial = r_trial.norm_squared();
            if cost_trial >= cost {
                lambda *= 10.0;
                continue;
            }

            let step_norm: f64 = p
                .iter()
                .zip(trial.iter())
                .map(|(old, new)| (old - new) * (old - new))
                .sum::<f64>()
                .sqrt();
            let p_norm: f64 = trial.iter().map(|v| v * v).sum::<f64>().sqrt();
            let cost_drop = cost - cost_trial;

            p = trial;
            r = r_trial;
            let converged = cost_drop <= opts.ftol * cost.max(f64::MIN_POSITIVE)
                || step_norm <= opts.xtol * (p_norm + opts.xtol);
            cost = cost_trial;
            lambda = (lambda / 10.0).max(1e-12);
            accepted = true;

            if converged {
                return Some(p);
            }
            break;
        }

        if !accepted {
            // Damping exhausted: no descent direction remains, so the
            // current point is as good as this search gets.
            return Some(p);
        }
    }

    None
}

fn clamp_into_bounds(p: &[f64], bounds: Option<&[(f64, f64)]>) -> Vec<f64> {
    match bounds {
        Some(bs) => p
            .iter()
            .zip(bs.iter())
            .map(|(&v, &(lo, hi))| v.clamp(lo, hi))
            .collect(),
        None => p.to_vec(),
    }
}

fn eval_finite<F>(residuals: &F, p: &[f64]) -> Option<DVector<f64>>
where
    F: Fn(&[f64]) -> Option<DVector<f64>>,
{
    let r = residuals(p)?;
    if r.iter().all(|v| v.is_finite()) {
        Some(r)
    } else {
        None
    }
}

/// Forward-difference Jacobian, falling back to a backward step per column
/// when the forward probe leaves the feasible box or the model's domain.
fn numeric_jacobian<F>(
    residuals: &F,
    p: &[f64],
    r0: &DVector<f64>,
    bounds: Option<&[(f64, f64)]>,
) -> Option<DMatrix<f64>>
where
    F: Fn(&[f64]) -> Option<DVector<f64>>,
{
    let n = r0.len();
    let m = p.len();
    let mut jac = DMatrix::<f64>::zeros(n, m);

    for j in 0..m {
        let mut h = f64::EPSILON.sqrt() * p[j].abs().max(1.0);
        if let Some(bs) = bounds {
            if p[j] + h > bs[j].1 {
                h = -h;
            }
        }

        let col = probe_column(residuals, p, r0, j, h)
            .or_else(|| probe_column(residuals, p, r0, j, -h))?;
        jac.set_column(j, &col);
    }

    Some(jac)
}

fn probe_column<F>(
    residuals: &F,
    p: &[f64],
    r0: &DVector<f64>,
    j: usize,
    h: f64,
) -> Option<DVector<f64>>
where
    F: Fn(&[f64]) -> Option<DVector<f64>>,
{
    let mut probe = p.to_vec();
    probe[j] += h;
    let r = eval_finite(residuals, &probe)?;
    Some((r - r0) / h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exp_residuals(x: &[f64], y: &[f64], p: &[f64]) -> Option<DVector<f64>> {
        let (a, b) = (p[0], p[1]);
        Some(DVector::from_iterator(
            x.len(),
            x.iter().zip(y.iter()).map(|(&xi, &yi)| a * (b * xi).exp() - yi),
        ))
    }

    #[test]
    fn recovers_two_parameter_exponential() {
        let x: Vec<f64> = (0..8).map(|i| i as f64 * 0.5).collect();
        let y: Vec<f64> = x.iter().map(|&xi| 2.0 * (0.5 * xi).exp()).collect();

        let p = minimize_least_squares(
            |p| exp_residuals(&x, &y, p),
            &[1.0, 1.0],
            None,
            &LmOptions::default(),
        )
        .unwrap();

        assert!((p[0] - 2.0).abs() < 1e-6, "a = {}", p[0]);
        assert!((p[1] - 0.5).abs() < 1e-6, "b = {}", p[1]);
    }

    #[test]
    fn respects_lower_bound() {
        // Unconstrained minimum is p = -3; the box forces p = 0.
        let residuals = |p: &[f64]| Some(DVector::from_row_slice(&[p[0] + 3.0]));
        let p = minimize_least_squares(
            residuals,
            &[5.0],
            Some(&[(0.0, f64::INFINITY)]),
            &LmOptions::default(),
        )
        .unwrap();
        assert!(p[0].abs() < 1e-9, "p = {}", p[0]);
    }

    #[test]
    fn rejects_steps_outside_model_domain() {
        // Residual is only defined for p > 0; the optimizer must keep the
        // iterate positive while minimizing (ln p)^2 toward p = 1.
        let residuals = |p: &[f64]| {
            if p[0] <= 0.0 {
                None
            } else {
                Some(DVector::from_row_slice(&[p[0].ln()]))
            }
        };
        let p = minimize_least_squares(residuals, &[5.0], None, &LmOptions::default()).unwrap();
        assert!((p[0] - 1.0).abs() < 1e-6, "p = {}", p[0]);
    }

    #[test]
    fn fails_cleanly_when_start_is_invalid() {
        let residuals = |_: &[f64]| -> Option<DVector<f64>> { None };
        assert!(minimize_least_squares(residuals, &[1.0], None, &LmOptions::default()).is_none());
    }
}
