//! finitediff - Finite-difference derivatives and derivative checks
//!
//! Approximates gradients, Jacobians and Hessians of user-supplied functions
//! with central-difference stencils, and compares analytic derivatives
//! against those approximations.
//!
//! # Architecture
//!
//! - `differencing`: static stencil tables for orders 2, 4, 6 and 8 and the
//!   gradient / Jacobian / Hessian entry points
//! - `compare`: elementwise closeness checks that report each mismatch to a
//!   pluggable diagnostic sink (debug-level logging by default)
//! - `config`: [`FiniteDiff`], bundling accuracy and step sizes
//!
//! Every call is synchronous and stateless. The stencils are read-only
//! statics, so the functions can be used from several threads at once as
//! long as the differentiated function allows it.
//!
//! # Example
//!
//! ```rust
//! use finitediff::prelude::*;
//! use nalgebra::DVector;
//!
//! // f(x) = sum(x_i^2), analytic gradient 2x
//! let f = |x: &DVector<f64>| x.norm_squared();
//! let x = DVector::from_vec(vec![1.0, -0.5, 3.0]);
//!
//! let numeric = finite_gradient(&x, f, AccuracyOrder::Fourth, 1e-6)?;
//! let analytic = 2.0 * &x;
//! assert!(compare_gradient(&analytic, &numeric, 1e-6, "sum of squares")?);
//! # Ok::<(), DiffError>(())
//! ```

pub mod compare;
pub mod config;
pub mod differencing;
pub mod utils;

pub use compare::{
    compare_gradient, compare_gradient_with, compare_hessian, compare_hessian_with,
    compare_jacobian, compare_jacobian_with, is_close, DiagnosticSink, LogSink, Mismatch,
    Position, SilentSink,
};
pub use config::FiniteDiff;
pub use differencing::{
    finite_gradient, finite_hessian, finite_hessian_from_gradient, finite_jacobian,
    finite_jacobian_with_dim, AccuracyOrder, DiffError, Result, Stencil,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::compare::{
        compare_gradient, compare_gradient_with, compare_hessian, compare_hessian_with,
        compare_jacobian, compare_jacobian_with, is_close, DiagnosticSink, LogSink, Mismatch,
        Position, SilentSink,
    };
    pub use crate::config::FiniteDiff;
    pub use crate::differencing::{
        finite_gradient, finite_hessian, finite_hessian_from_gradient, finite_jacobian,
        finite_jacobian_with_dim, AccuracyOrder, DiffError, Stencil,
    };
    pub use crate::utils::constants::*;
}
