//! Stencil tables, accuracy orders and the crate error type

use thiserror::Error;

/// Differencing and comparison errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiffError {
    #[error("Invalid accuracy order index {0}, expected 0..=3")]
    InvalidAccuracyOrder(usize),

    #[error("Invalid step size {0}, expected a finite non-zero value")]
    InvalidStep(f64),

    #[error("Invalid tolerance {0}, expected a non-negative value")]
    InvalidTolerance(f64),

    #[error("Shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Function returned {found} outputs, expected {expected}")]
    OutputDimension { expected: usize, found: usize },
}

/// Convenience result alias
pub type Result<T> = std::result::Result<T, DiffError>;

/// Finite-difference stencil for a first derivative
///
/// The derivative along one axis is approximated as
/// `sum(outer[s] * f(x + inner[s] * eps)) / (denominator * eps)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stencil {
    /// Weights applied to the function values
    pub outer: &'static [f64],
    /// Offsets in multiples of the step size
    pub inner: &'static [f64],
    /// Scale of the weighted sum
    pub denominator: f64,
}

impl Stencil {
    /// Number of function evaluations per dimension
    pub fn points(&self) -> usize {
        self.outer.len()
    }
}

// Central difference coefficients, see
// https://en.wikipedia.org/wiki/Finite_difference_coefficient
static STENCILS: [Stencil; 4] = [
    Stencil {
        outer: &[1.0, -1.0],
        inner: &[1.0, -1.0],
        denominator: 2.0,
    },
    Stencil {
        outer: &[1.0, -8.0, 8.0, -1.0],
        inner: &[-2.0, -1.0, 1.0, 2.0],
        denominator: 12.0,
    },
    Stencil {
        outer: &[-1.0, 9.0, -45.0, 45.0, -9.0, 1.0],
        inner: &[-3.0, -2.0, -1.0, 1.0, 2.0, 3.0],
        denominator: 60.0,
    },
    Stencil {
        outer: &[3.0, -32.0, 168.0, -672.0, 672.0, -168.0, 32.0, -3.0],
        inner: &[-4.0, -3.0, -2.0, -1.0, 1.0, 2.0, 3.0, 4.0],
        denominator: 840.0,
    },
];

/// Truncation-error order of a first-derivative stencil
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum AccuracyOrder {
    #[default]
    Second,
    Fourth,
    Sixth,
    Eighth,
}

impl AccuracyOrder {
    /// All supported orders, lowest first
    pub const ALL: [AccuracyOrder; 4] = [
        AccuracyOrder::Second,
        AccuracyOrder::Fourth,
        AccuracyOrder::Sixth,
        AccuracyOrder::Eighth,
    ];

    /// Table index (0..=3)
    pub fn index(self) -> usize {
        match self {
            AccuracyOrder::Second => 0,
            AccuracyOrder::Fourth => 1,
            AccuracyOrder::Sixth => 2,
            AccuracyOrder::Eighth => 3,
        }
    }

    /// Truncation-error order (2, 4, 6 or 8)
    pub fn order(self) -> usize {
        2 * (self.index() + 1)
    }

    /// Stencil used for this order
    pub fn stencil(self) -> &'static Stencil {
        &STENCILS[self.index()]
    }
}

impl TryFrom<usize> for AccuracyOrder {
    type Error = DiffError;

    fn try_from(index: usize) -> Result<Self> {
        AccuracyOrder::ALL
            .get(index)
            .copied()
            .ok_or(DiffError::InvalidAccuracyOrder(index))
    }
}

/// Reject steps that can only produce non-finite derivatives
pub(crate) fn check_step(eps: f64) -> Result<()> {
    if eps == 0.0 || !eps.is_finite() {
        return Err(DiffError::InvalidStep(eps));
    }
    Ok(())
}
