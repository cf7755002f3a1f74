//! Hessian accuracy tests

use approx::assert_relative_eq;
use finitediff::prelude::*;
use nalgebra::{DMatrix, DVector};

fn sum_of_squares(x: &DVector<f64>) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

#[test]
fn test_sum_of_squares_is_twice_identity() {
    for n in 1..=10 {
        let x = DVector::from_fn(n, |i, _| 0.37 * (i + 1) as f64 - 1.6);
        let hess = finite_hessian(&x, sum_of_squares, DEFAULT_HESSIAN_EPS).unwrap();

        let expected = DMatrix::identity(n, n) * 2.0;
        assert!(compare_hessian(&expected, &hess, 1e-3, &format!("n={n}")).unwrap());
    }
}

#[test]
fn test_rosenbrock() {
    // f(x, y) = (1 - x)^2 + 100 (y - x^2)^2
    let f = |v: &DVector<f64>| (1.0 - v[0]).powi(2) + 100.0 * (v[1] - v[0] * v[0]).powi(2);
    let v = DVector::from_vec(vec![0.5, 0.8]);
    let (x, y) = (v[0], v[1]);
    let exact = DMatrix::from_row_slice(
        2,
        2,
        &[
            2.0 - 400.0 * (y - 3.0 * x * x),
            -400.0 * x,
            -400.0 * x,
            200.0,
        ],
    );

    // Forward differences carry an O(eps) bias from the third derivatives
    let hess = FiniteDiff::new().with_hessian_eps(1e-5).hessian(&v, f).unwrap();
    assert!(compare_hessian(&exact, &hess, 1e-2, "rosenbrock").unwrap());

    // Analytic gradient differentiated with a high-order stencil
    let grad = |v: &DVector<f64>| {
        DVector::from_vec(vec![
            -2.0 * (1.0 - v[0]) - 400.0 * v[0] * (v[1] - v[0] * v[0]),
            200.0 * (v[1] - v[0] * v[0]),
        ])
    };
    let from_grad = finite_hessian_from_gradient(&v, grad, AccuracyOrder::Eighth, 1e-3).unwrap();
    for i in 0..2 {
        for j in 0..2 {
            assert_relative_eq!(from_grad[(i, j)], exact[(i, j)], epsilon = 1e-8);
        }
    }
}

#[test]
fn test_empty_point() {
    let x = DVector::<f64>::zeros(0);
    let hess = finite_hessian(&x, |_| 1.0, 1e-5).unwrap();
    assert_eq!(hess.shape(), (0, 0));
}
