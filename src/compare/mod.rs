//! Comparison of derivatives
//!
//! Checks an analytic gradient, Jacobian or Hessian against a numerical one
//! element by element. Failing elements are reported to a
//! [`DiagnosticSink`]; the default sink logs them at debug level.

mod closeness;
mod sink;

pub use closeness::*;
pub use sink::*;
