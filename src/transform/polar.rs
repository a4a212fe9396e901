//! Periodic phase / log-radius projection.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::foundation::core::TimeRange;
use crate::transform::non_linear::LogScale;

/// Maps start time to an angle (one revolution per period, clockwise from 12 o'clock) and run
/// time to a log2 radius around the canvas center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarProjection {
    center_x: i64,
    center_y: i64,
    phase0: f64,
    period: f64,
    d_phi: f64,
    scale: LogScale,
}

impl PolarProjection {
    /// Projection for a `width`×`height` canvas.
    ///
    /// `period` defaults to the whole time range when absent or non-positive. `phase_point` is any
    /// instant that should sit at the top of the dial.
    pub fn new(
        width: u32,
        height: u32,
        range: TimeRange,
        phase_point: i64,
        period: Option<i64>,
        scale: LogScale,
    ) -> Self {
        let period = period.filter(|p| *p > 0).unwrap_or(range.span());
        // Same-angle instant just before the start of a period; never after any real event.
        let phase0 = phase_point.rem_euclid(period) - period;
        Self {
            center_x: i64::from(width / 2),
            center_y: i64::from(height / 2),
            phase0: phase0 as f64,
            period: period as f64,
            d_phi: TAU / period as f64,
            scale,
        }
    }

    /// Period length in seconds.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Canvas center, in pixels.
    pub fn center(&self) -> (i64, i64) {
        (self.center_x, self.center_y)
    }

    #[inline]
    /// Angle, in radians, for start time `t`.
    pub fn angle(&self, t: f64) -> f64 {
        FRAC_PI_2 - self.d_phi * (t - self.phase0).rem_euclid(self.period)
    }

    #[inline]
    /// Radius, in pixels, for run time `run` (positive).
    pub fn radius(&self, run: f64) -> f64 {
        self.scale.offset(run)
    }

    /// Pixel for start time `t` at radius `r`, nudged by `(dx, dy)` before truncation.
    ///
    /// Image rows grow downward, so the vertical component is subtracted from the center.
    pub fn point(&self, t: f64, r: f64, (dx, dy): (f64, f64)) -> (i64, i64) {
        let phi = self.angle(t);
        let x = (r * phi.cos() + dx) as i64 + self.center_x;
        let y = self.center_y - (r * phi.sin() + dy) as i64;
        (x, y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/polar.rs"]
mod tests;
