//! Diagnostic records and sinks for derivative mismatches

use std::fmt;

/// Location of a compared element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Element of a vector
    Index(usize),
    /// Entry of a matrix
    Entry { row: usize, col: usize },
}

/// One element pair that failed the closeness test
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    pub label: String,
    pub tolerance: f64,
    pub position: Position,
    pub x: f64,
    pub y: f64,
    /// |x - y|
    pub abs_diff: f64,
}

impl Mismatch {
    /// |x - y| / |x|, infinite or NaN when `x` is zero
    pub fn rel_diff_x(&self) -> f64 {
        self.abs_diff / self.x.abs()
    }

    /// |x - y| / |y|, infinite or NaN when `y` is zero
    pub fn rel_diff_y(&self) -> f64 {
        self.abs_diff / self.y.abs()
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} eps={:.3e}", self.label, self.tolerance)?;
        match self.position {
            Position::Index(r) => write!(f, " r={r}")?,
            Position::Entry { row, col } => write!(f, " r={row} c={col}")?,
        }
        write!(
            f,
            " x={:.3e} y={:.3e} |x-y|={:.3e} |x-y|/|x|={:.3e} |x-y|/|y|={:.3e}",
            self.x,
            self.y,
            self.abs_diff,
            self.rel_diff_x(),
            self.rel_diff_y()
        )
    }
}

/// Receiver for mismatch diagnostics
pub trait DiagnosticSink {
    fn record(&mut self, mismatch: &Mismatch);
}

/// Forwards every mismatch to `log::debug!`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&mut self, mismatch: &Mismatch) {
        log::debug!("{mismatch}");
    }
}

/// Discards all diagnostics
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn record(&mut self, _mismatch: &Mismatch) {}
}

/// Collects mismatches for later inspection
impl DiagnosticSink for Vec<Mismatch> {
    fn record(&mut self, mismatch: &Mismatch) {
        self.push(mismatch.clone());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn record(&mut self, mismatch: &Mismatch) {
        (**self).record(mismatch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mismatch(position: Position, x: f64, y: f64) -> Mismatch {
        Mismatch {
            label: "grad".to_string(),
            tolerance: 1e-6,
            position,
            x,
            y,
            abs_diff: (x - y).abs(),
        }
    }

    #[test]
    fn test_display_vector_entry() {
        let m = mismatch(Position::Index(2), 1.0, 2.0);
        assert_eq!(
            m.to_string(),
            "grad eps=1.000e-6 r=2 x=1.000e0 y=2.000e0 |x-y|=1.000e0 \
             |x-y|/|x|=1.000e0 |x-y|/|y|=5.000e-1"
        );
    }

    #[test]
    fn test_display_matrix_entry() {
        let m = mismatch(Position::Entry { row: 1, col: 3 }, 0.5, 0.25);
        assert!(m.to_string().starts_with("grad eps=1.000e-6 r=1 c=3 "));
    }

    #[test]
    fn test_relative_diff_of_zero() {
        let m = mismatch(Position::Index(0), 0.0, 1.0);
        assert!(m.rel_diff_x().is_infinite());
        assert_eq!(m.rel_diff_y(), 1.0);

        let same = mismatch(Position::Index(0), 0.0, 0.0);
        assert!(same.rel_diff_x().is_nan());
    }

    #[test]
    fn test_sinks() {
        let m = mismatch(Position::Index(0), 1.0, 3.0);

        fn feed<S: DiagnosticSink>(mut sink: S, m: &Mismatch) {
            sink.record(m);
        }

        let mut collected: Vec<Mismatch> = Vec::new();
        feed(&mut collected, &m);
        feed(&mut collected, &m);
        assert_eq!(collected, vec![m.clone(), m.clone()]);

        SilentSink.record(&m);
        LogSink.record(&m);
    }
}
