//! Differencing configuration

use nalgebra::{DMatrix, DVector};

use crate::differencing::{
    finite_gradient, finite_hessian, finite_jacobian, finite_jacobian_with_dim, AccuracyOrder,
    Result,
};
use crate::utils::constants::{DEFAULT_EPS, DEFAULT_HESSIAN_EPS};

/// Accuracy order and step sizes bundled for repeated use
///
/// # Example
/// ```
/// use finitediff::prelude::*;
/// use nalgebra::DVector;
///
/// let fd = FiniteDiff::new().with_accuracy(AccuracyOrder::Sixth).with_eps(1e-4);
/// let x = DVector::from_vec(vec![0.5, 1.5]);
/// let grad = fd.gradient(&x, |x| x[0] * x[1])?;
/// assert!((grad[0] - 1.5).abs() < 1e-9);
/// # Ok::<(), DiffError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiniteDiff {
    pub accuracy: AccuracyOrder,
    pub eps: f64,
    pub hessian_eps: f64,
}

impl Default for FiniteDiff {
    fn default() -> Self {
        Self {
            accuracy: AccuracyOrder::default(),
            eps: DEFAULT_EPS,
            hessian_eps: DEFAULT_HESSIAN_EPS,
        }
    }
}

impl FiniteDiff {
    /// Second-order stencils with the default steps
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accuracy(mut self, accuracy: AccuracyOrder) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Step for gradients and Jacobians
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Step for [`FiniteDiff::hessian`]
    pub fn with_hessian_eps(mut self, eps: f64) -> Self {
        self.hessian_eps = eps;
        self
    }

    pub fn gradient<F>(&self, x: &DVector<f64>, f: F) -> Result<DVector<f64>>
    where
        F: FnMut(&DVector<f64>) -> f64,
    {
        finite_gradient(x, f, self.accuracy, self.eps)
    }

    pub fn jacobian<F>(&self, x: &DVector<f64>, f: F) -> Result<DMatrix<f64>>
    where
        F: FnMut(&DVector<f64>) -> DVector<f64>,
    {
        finite_jacobian(x, f, self.accuracy, self.eps)
    }

    pub fn jacobian_with_dim<F>(&self, x: &DVector<f64>, m: usize, f: F) -> Result<DMatrix<f64>>
    where
        F: FnMut(&DVector<f64>) -> DVector<f64>,
    {
        finite_jacobian_with_dim(x, m, f, self.accuracy, self.eps)
    }

    pub fn hessian<F>(&self, x: &DVector<f64>, f: F) -> Result<DMatrix<f64>>
    where
        F: FnMut(&DVector<f64>) -> f64,
    {
        finite_hessian(x, f, self.hessian_eps)
    }
}
