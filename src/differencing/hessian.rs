//! Finite-difference Hessian of a scalar function

use nalgebra::{DMatrix, DVector};

use super::base::{check_step, AccuracyOrder, Result};
use super::jacobian::finite_jacobian_with_dim;

/// Approximate the Hessian of `f` at `x`
///
/// Every entry uses the forward mixed difference
///
/// ```text
/// H[i, j] = (f(x + eps e_i + eps e_j) - f(x + eps e_i) - f(x + eps e_j) + f(x)) / eps^2
/// ```
///
/// independently of any accuracy order. Only the upper triangle is
/// evaluated and mirrored, four evaluations per entry, so the cost is
/// `2 * n * (n + 1)` evaluations. The truncation error is O(eps) and the
/// rounding error grows like 1/eps^2, so steps around 1e-5 work far better
/// here than the 1e-8 used for first derivatives.
pub fn finite_hessian<F>(x: &DVector<f64>, mut f: F, eps: f64) -> Result<DMatrix<f64>>
where
    F: FnMut(&DVector<f64>) -> f64,
{
    check_step(eps)?;

    let n = x.len();
    let denom = eps * eps;

    let mut hess = DMatrix::zeros(n, n);
    let mut xx = x.clone();
    for i in 0..n {
        for j in i..n {
            let f_center = f(&xx);

            xx[i] += eps;
            xx[j] += eps;
            let f_both = f(&xx);

            xx[j] -= eps;
            let f_i = f(&xx);

            xx[j] += eps;
            xx[i] -= eps;
            let f_j = f(&xx);

            xx[i] = x[i];
            xx[j] = x[j];

            let value = (f_both - f_i - f_j + f_center) / denom;
            hess[(i, j)] = value;
            hess[(j, i)] = value;
        }
    }

    Ok(hess)
}

/// Approximate the Hessian from an analytic gradient
///
/// The Hessian is the Jacobian of the gradient, so this reuses the
/// first-derivative stencils and honours `accuracy`. `grad` must return a
/// vector of length `x.len()`. The result is not symmetrized.
pub fn finite_hessian_from_gradient<G>(
    x: &DVector<f64>,
    grad: G,
    accuracy: AccuracyOrder,
    eps: f64,
) -> Result<DMatrix<f64>>
where
    G: FnMut(&DVector<f64>) -> DVector<f64>,
{
    finite_jacobian_with_dim(x, x.len(), grad, accuracy, eps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differencing::DiffError;
    use approx::assert_relative_eq;

    // f(x, y) = x^2 y + 3 y^3
    fn cubic(x: &DVector<f64>) -> f64 {
        x[0] * x[0] * x[1] + 3.0 * x[1].powi(3)
    }

    #[test]
    fn test_hessian_mixed_terms() {
        let x = DVector::from_vec(vec![1.0, 2.0]);
        let hess = finite_hessian(&x, cubic, 1e-5).unwrap();

        // [[2y, 2x], [2x, 18y]]
        assert_relative_eq!(hess[(0, 0)], 4.0, epsilon = 1e-3);
        assert_relative_eq!(hess[(0, 1)], 2.0, epsilon = 1e-3);
        assert_relative_eq!(hess[(1, 0)], 2.0, epsilon = 1e-3);
        assert_relative_eq!(hess[(1, 1)], 36.0, epsilon = 1e-3);
    }

    #[test]
    fn test_hessian_is_symmetric() {
        let x = DVector::from_vec(vec![0.4, -1.1, 2.3]);
        let hess = finite_hessian(&x, |x| (x[0] * x[1]).sin() + x[1] * x[2].exp(), 1e-5).unwrap();
        assert_eq!(hess, hess.transpose());
    }

    #[test]
    fn test_hessian_evaluation_count() {
        let x = DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        let mut calls = 0;
        finite_hessian(
            &x,
            |x| {
                calls += 1;
                x.sum()
            },
            1e-5,
        )
        .unwrap();
        assert_eq!(calls, 2 * 4 * 5);
    }

    #[test]
    fn test_hessian_from_gradient() {
        let x = DVector::from_vec(vec![1.0, 2.0]);
        let grad = |x: &DVector<f64>| {
            DVector::from_vec(vec![2.0 * x[0] * x[1], x[0] * x[0] + 9.0 * x[1] * x[1]])
        };
        let hess = finite_hessian_from_gradient(&x, grad, AccuracyOrder::Fourth, 1e-4).unwrap();

        assert_relative_eq!(hess[(0, 0)], 4.0, epsilon = 1e-8);
        assert_relative_eq!(hess[(0, 1)], 2.0, epsilon = 1e-8);
        assert_relative_eq!(hess[(1, 0)], 2.0, epsilon = 1e-8);
        assert_relative_eq!(hess[(1, 1)], 36.0, epsilon = 1e-8);
    }

    #[test]
    fn test_hessian_rejects_zero_step() {
        let x = DVector::from_vec(vec![1.0, 2.0]);
        assert_eq!(
            finite_hessian(&x, cubic, 0.0),
            Err(DiffError::InvalidStep(0.0))
        );
    }
}
