//! Arcs tracing each event's elapsed time, second by second, from start to finish.

use image::RgbaImage;

use crate::foundation::core::{Event, Outcome};
use crate::raster::canvas::Canvas;
use crate::raster::color::{self, Blend};
use crate::transform::linear::TimeAxis;
use crate::transform::non_linear::LogScale;
use crate::vis::Geometry;

/// Successes sweep upward from the center line, failures downward; in-progress events sweep both
/// ways in capped gray.
///
/// Cost per event is proportional to its run time (clipped at the end of the time range).
#[derive(Clone, Debug)]
pub struct Sweep {
    canvas: Canvas,
    axis: TimeAxis,
    scale: LogScale,
    t_end: i64,
    height: i64,
    step: f64,
}

impl Sweep {
    /// Sweep with `x_grid` vertical divisions.
    pub fn new(geometry: Geometry, scale: LogScale, color_steps: f64, x_grid: u32) -> Self {
        let mut canvas = geometry.canvas();
        let (w, h) = (geometry.w(), geometry.h());
        if x_grid > 0 {
            let spacing = (w / i64::from(x_grid)).max(1) as usize;
            for x in (0..w).step_by(spacing) {
                canvas.grid_column(x);
            }
        }
        let y_log2 = scale.pixels_per_doubling();
        if y_log2.is_finite() && y_log2 > 0.0 {
            let mut y = (h / 2) as f64;
            while y < h as f64 {
                canvas.grid_row(y as i64);
                canvas.grid_row(h - y as i64);
                y += y_log2;
            }
        }
        canvas.grid_row(0);

        Self {
            canvas,
            axis: geometry.axis(),
            scale,
            t_end: geometry.range.end,
            height: h,
            step: color::color_step(color_steps),
        }
    }

    /// Trace one event's arc.
    pub fn record(&mut self, e: &Event) {
        let center = self.height / 2;
        let start = i64::from(e.start);
        let outcome = e.outcome();
        let mut y_prev = center;
        for t in start..=e.end() {
            if t >= self.t_end {
                break;
            }
            let x = self.axis.column(t as f64);
            let y_min = center - self.scale.offset_floored((t - start) as f64);
            for y in (y_min + 1..=y_prev).rev() {
                self.paint(outcome, x, y);
            }
            y_prev = y_prev.min(y_min + 1);
        }
    }

    fn paint(&mut self, outcome: Outcome, x: i64, y: i64) {
        let step = self.step;
        let mirrored = self.height - y;
        match outcome {
            Outcome::Success => self.canvas.update(x, y, |px| Blend::Success.apply(px, step)),
            Outcome::Failure(_) => {
                self.canvas
                    .update(x, mirrored, |px| Blend::Failure.apply(px, step));
            }
            Outcome::Active => {
                self.canvas
                    .update(x, y, |px| Blend::ActiveGray.apply(px, step));
                self.canvas
                    .update(x, mirrored, |px| Blend::ActiveGray.apply(px, step));
            }
        }
    }

    /// The canvas as drawn so far.
    pub fn render(&self) -> RgbaImage {
        self.canvas.image().clone()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/vis/sweep.rs"]
mod tests;
