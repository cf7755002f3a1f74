//! Finite-difference Jacobian of a vector function

use nalgebra::{DMatrix, DVector};

use super::base::{check_step, AccuracyOrder, DiffError, Result};

/// Approximate the Jacobian of `f` at `x`
///
/// The result has one row per output of `f` and one column per input
/// dimension. The output dimension is found by evaluating `f(x)` once, so
/// the cost is `x.len() * accuracy.order() + 1` evaluations. When the
/// output dimension is already known, [`finite_jacobian_with_dim`] skips
/// that extra call.
pub fn finite_jacobian<F>(
    x: &DVector<f64>,
    mut f: F,
    accuracy: AccuracyOrder,
    eps: f64,
) -> Result<DMatrix<f64>>
where
    F: FnMut(&DVector<f64>) -> DVector<f64>,
{
    check_step(eps)?;
    let m = f(x).len();
    finite_jacobian_with_dim(x, m, f, accuracy, eps)
}

/// Approximate the Jacobian of `f` at `x`, given the output dimension `m`
///
/// Column `d` is the stencil applied componentwise to `f` while only
/// `x[d]` is perturbed. Fails with [`DiffError::OutputDimension`] if `f`
/// returns a vector of any other length than `m`.
pub fn finite_jacobian_with_dim<F>(
    x: &DVector<f64>,
    m: usize,
    mut f: F,
    accuracy: AccuracyOrder,
    eps: f64,
) -> Result<DMatrix<f64>>
where
    F: FnMut(&DVector<f64>) -> DVector<f64>,
{
    check_step(eps)?;

    let stencil = accuracy.stencil();
    let scale = stencil.denominator * eps;

    let mut jac = DMatrix::zeros(m, x.len());
    let mut xx = x.clone();
    for d in 0..x.len() {
        let mut column = DVector::zeros(m);
        for (&outer, &inner) in stencil.outer.iter().zip(stencil.inner) {
            xx[d] += inner * eps;
            let fx = f(&xx);
            xx[d] = x[d];

            if fx.len() != m {
                return Err(DiffError::OutputDimension {
                    expected: m,
                    found: fx.len(),
                });
            }
            column.axpy(outer, &fx, 1.0);
        }
        jac.set_column(d, &(column / scale));
    }

    Ok(jac)
}
