//! Elementwise closeness checks for vectors and matrices

use nalgebra::{DMatrix, DVector};

use super::sink::{DiagnosticSink, LogSink, Mismatch, Position};
use crate::differencing::{DiffError, Result};

/// Mixed absolute/relative closeness of two scalars
///
/// True iff `|x - y| <= tolerance * max(|x|, |y|, 1)`, so the tolerance is
/// absolute for small values and relative for large ones. Equal values,
/// infinities included, are always close. An infinity is close only to
/// itself, and NaN is never close to anything.
pub fn is_close(x: f64, y: f64, tolerance: f64) -> bool {
    if x == y {
        return true;
    }
    if x.is_infinite() || y.is_infinite() {
        return false;
    }
    let scale = x.abs().max(y.abs()).max(1.0);
    (x - y).abs() <= tolerance * scale
}

fn check_tolerance(tolerance: f64) -> Result<()> {
    if tolerance.is_nan() || tolerance < 0.0 {
        return Err(DiffError::InvalidTolerance(tolerance));
    }
    Ok(())
}

fn check_shape(left: (usize, usize), right: (usize, usize)) -> Result<()> {
    if left != right {
        return Err(DiffError::ShapeMismatch { left, right });
    }
    Ok(())
}

/// Visit every element pair, reporting each one that is not close
fn compare_elements<I, S>(elements: I, tolerance: f64, label: &str, sink: &mut S) -> bool
where
    I: Iterator<Item = (Position, f64, f64)>,
    S: DiagnosticSink + ?Sized,
{
    let mut same = true;
    for (position, x, y) in elements {
        if is_close(x, y, tolerance) {
            continue;
        }
        sink.record(&Mismatch {
            label: label.to_string(),
            tolerance,
            position,
            x,
            y,
            abs_diff: (x - y).abs(),
        });
        same = false;
    }
    same
}

/// Compare two gradients, logging each mismatch at debug level
///
/// Returns `Ok(false)` when some element pair is not close; a mismatch is
/// not an error. Vectors of different length are rejected.
pub fn compare_gradient(
    x: &DVector<f64>,
    y: &DVector<f64>,
    tolerance: f64,
    label: &str,
) -> Result<bool> {
    compare_gradient_with(x, y, tolerance, label, LogSink)
}

/// Compare two gradients, reporting mismatches to `sink`
pub fn compare_gradient_with<S: DiagnosticSink>(
    x: &DVector<f64>,
    y: &DVector<f64>,
    tolerance: f64,
    label: &str,
    mut sink: S,
) -> Result<bool> {
    check_shape(x.shape(), y.shape())?;
    check_tolerance(tolerance)?;

    let elements = x
        .iter()
        .zip(y.iter())
        .enumerate()
        .map(|(i, (&xi, &yi))| (Position::Index(i), xi, yi));
    Ok(compare_elements(elements, tolerance, label, &mut sink))
}

/// Compare two Jacobians, logging each mismatch at debug level
pub fn compare_jacobian(
    x: &DMatrix<f64>,
    y: &DMatrix<f64>,
    tolerance: f64,
    label: &str,
) -> Result<bool> {
    compare_jacobian_with(x, y, tolerance, label, LogSink)
}

/// Compare two Jacobians, reporting mismatches to `sink` in row-major order
pub fn compare_jacobian_with<S: DiagnosticSink>(
    x: &DMatrix<f64>,
    y: &DMatrix<f64>,
    tolerance: f64,
    label: &str,
    mut sink: S,
) -> Result<bool> {
    check_shape(x.shape(), y.shape())?;
    check_tolerance(tolerance)?;

    let (rows, cols) = x.shape();
    let elements = (0..rows).flat_map(move |row| {
        (0..cols).map(move |col| (Position::Entry { row, col }, x[(row, col)], y[(row, col)]))
    });
    Ok(compare_elements(elements, tolerance, label, &mut sink))
}

/// Compare two Hessians, logging each mismatch at debug level
pub fn compare_hessian(
    x: &DMatrix<f64>,
    y: &DMatrix<f64>,
    tolerance: f64,
    label: &str,
) -> Result<bool> {
    compare_jacobian(x, y, tolerance, label)
}

/// Compare two Hessians, reporting mismatches to `sink`
pub fn compare_hessian_with<S: DiagnosticSink>(
    x: &DMatrix<f64>,
    y: &DMatrix<f64>,
    tolerance: f64,
    label: &str,
    sink: S,
) -> Result<bool> {
    compare_jacobian_with(x, y, tolerance, label, sink)
}
