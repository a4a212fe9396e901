//! Linear time axis.

use crate::foundation::core::TimeRange;

/// Maps absolute time onto pixel columns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeAxis {
    t_min: f64,
    span: f64,
    width: f64,
}

impl TimeAxis {
    /// Axis spreading `range` over `width` columns.
    pub fn new(range: TimeRange, width: u32) -> Self {
        Self {
            t_min: range.start as f64,
            span: range.span() as f64,
            width: f64::from(width),
        }
    }

    #[inline]
    /// Fractional column for time `t`.
    pub fn x(&self, t: f64) -> f64 {
        self.width * (t - self.t_min) / self.span
    }

    #[inline]
    /// Pixel column for time `t` (floored). May fall outside `[0, width)`.
    pub fn column(&self, t: f64) -> i64 {
        self.x(t).floor() as i64
    }

    #[inline]
    /// Pixel column for time `t`, or `None` outside the canvas.
    pub fn column_in_bounds(&self, t: f64) -> Option<usize> {
        let x = self.column(t);
        (x >= 0 && (x as f64) < self.width).then_some(x as usize)
    }
}
