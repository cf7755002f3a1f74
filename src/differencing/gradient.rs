//! Finite-difference gradient of a scalar function

use nalgebra::DVector;

use super::base::{check_step, AccuracyOrder, Result};

/// Approximate the gradient of `f` at `x`
///
/// Each partial derivative is an independent single-axis stencil: only
/// `x[d]` is perturbed while differentiating along `d`, so the cost is
/// `x.len() * accuracy.order()` evaluations of `f`. `x` itself is never
/// modified.
///
/// # Arguments
/// * `x` - Point at which to differentiate
/// * `f` - Scalar function of `x`
/// * `accuracy` - Stencil order
/// * `eps` - Step size, must be finite and non-zero
///
/// # Example
/// ```
/// use finitediff::prelude::*;
/// use nalgebra::DVector;
///
/// let x = DVector::from_vec(vec![1.0, -2.0]);
/// let grad = finite_gradient(&x, |x| x.norm_squared(), AccuracyOrder::Fourth, 1e-6)?;
/// assert!((grad[0] - 2.0).abs() < 1e-6);
/// assert!((grad[1] + 4.0).abs() < 1e-6);
/// # Ok::<(), DiffError>(())
/// ```
pub fn finite_gradient<F>(
    x: &DVector<f64>,
    mut f: F,
    accuracy: AccuracyOrder,
    eps: f64,
) -> Result<DVector<f64>>
where
    F: FnMut(&DVector<f64>) -> f64,
{
    check_step(eps)?;

    let stencil = accuracy.stencil();
    let scale = stencil.denominator * eps;

    let mut grad = DVector::zeros(x.len());
    let mut xx = x.clone();
    for d in 0..x.len() {
        let mut sum = 0.0;
        for (&outer, &inner) in stencil.outer.iter().zip(stencil.inner) {
            xx[d] += inner * eps;
            sum += outer * f(&xx);
            xx[d] = x[d];
        }
        grad[d] = sum / scale;
    }

    Ok(grad)
}
