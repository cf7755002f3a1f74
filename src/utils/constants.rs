//! Differencing constants and defaults

/// Default step for first-derivative stencils
pub const DEFAULT_EPS: f64 = 1e-8;

/// Default step for the mixed-difference Hessian
///
/// The Hessian divides by eps^2, so a step near the square root of the
/// first-derivative default keeps rounding error in check.
pub const DEFAULT_HESSIAN_EPS: f64 = 1e-5;

/// Default tolerance when comparing analytic and numerical derivatives
pub const DEFAULT_TOLERANCE: f64 = 1e-4;
