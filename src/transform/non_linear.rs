//! Logarithmic run-time axis.

/// `y_log2` pixels per doubling of run time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogScale {
    y_log2: f64,
}

impl LogScale {
    /// Scale with `y_log2` pixels per doubling.
    pub fn new(y_log2: f64) -> Self {
        Self { y_log2 }
    }

    /// Pixels per doubling.
    pub fn pixels_per_doubling(self) -> f64 {
        self.y_log2
    }

    #[inline]
    /// Distance in pixels for run time `run`, without clamping (`run` must be positive).
    pub fn offset(self, run: f64) -> f64 {
        self.y_log2 * run.log2()
    }

    #[inline]
    /// Whole-pixel distance for `run`, floored at one second so skewed run times land on zero.
    pub fn offset_floored(self, run: f64) -> i64 {
        self.offset(run.max(1.0)).floor() as i64
    }

    #[inline]
    /// Row for `run` on a canvas whose bottom edge is `baseline`.
    pub fn row(self, baseline: i64, run: f64) -> i64 {
        baseline - self.offset_floored(run)
    }
}
