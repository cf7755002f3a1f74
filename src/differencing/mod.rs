//! Finite-difference derivatives
//!
//! Provides:
//! - Central-difference stencils of order 2, 4, 6 and 8
//! - Gradients of scalar functions
//! - Jacobians of vector functions (sized by evaluation or by the caller)
//! - Hessians via a forward mixed difference, or from an analytic gradient

mod base;
mod gradient;
mod hessian;
mod jacobian;

pub use base::*;
pub use gradient::finite_gradient;
pub use hessian::{finite_hessian, finite_hessian_from_gradient};
pub use jacobian::{finite_jacobian, finite_jacobian_with_dim};
