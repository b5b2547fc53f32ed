//! Linear least squares solver.
//!
//! Both the polynomial estimator and every damped step of the nonlinear
//! optimizer reduce to the same problem:
//!
//! ```text
//! minimize Σ (b_i - A_i^T β)^2
//! ```
//!
//! Implementation choices:
//! - We use SVD to solve the least-squares problem robustly even when the
//!   design matrix is tall (more rows than columns) or rank-deficient
//!   (e.g., polynomial degree at or above the number of distinct x-values).
//!   (Nalgebra's `QR::solve` is intended for square systems and will panic
//!   for non-square matrices.)
//! - Because our parameter dimension is tiny (at most 11 columns), SVD
//!   performance is a non-issue.

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(a: &DMatrix<f64>, b: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = a.clone().svd(true, true);

    // Try progressively looser tolerances if strict solve fails. High-degree
    // Vandermonde columns are nearly collinear, so we balance numerical
    // stability against solution acceptance.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(b, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let a = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let b = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let beta = solve_least_squares(&a, &b).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-10);
        assert!((beta[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn least_squares_handles_overdetermined_noise() {
        // y ≈ 1 + 2x with a small perturbation on one row.
        let a = DMatrix::from_row_slice(4, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0, 1.0, 3.0]);
        let b = DVector::from_row_slice(&[1.0, 3.1, 5.0, 7.0]);

        let beta = solve_least_squares(&a, &b).unwrap();
        assert!((beta[0] - 1.0).abs() < 0.2);
        assert!((beta[1] - 2.0).abs() < 0.2);
    }
}
