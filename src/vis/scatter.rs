//! One hard pixel per event, on linear or polar axes.

use image::RgbaImage;

use crate::foundation::core::Event;
use crate::raster::canvas::Canvas;
use crate::raster::color::{self, Blend};
use crate::transform::jitter::Jitter;
use crate::transform::linear::TimeAxis;
use crate::transform::non_linear::LogScale;
use crate::transform::polar::PolarProjection;
use crate::vis::Geometry;

/// Half-width, in pixels, of the uniform noise applied to polar scatter points.
const POLAR_JITTER_PX: f64 = 2.0;

/// Start time against log2 run time, drawn straight into the canvas.
#[derive(Clone, Debug)]
pub struct Scatter {
    canvas: Canvas,
    axis: TimeAxis,
    scale: LogScale,
    baseline: i64,
    step: f64,
}

impl Scatter {
    /// Scatter plot with `x_grid` vertical divisions and `color_steps` hits to saturation.
    pub fn new(geometry: Geometry, scale: LogScale, color_steps: f64, x_grid: u32) -> Self {
        let mut canvas = geometry.canvas();
        let (w, h) = (geometry.w(), geometry.h());
        if x_grid > 0 {
            let spacing = (w / i64::from(x_grid)).max(1) as usize;
            for x in (0..w).step_by(spacing) {
                canvas.grid_column(x);
            }
        }
        canvas.grid_doublings(scale.pixels_per_doubling());
        canvas.grid_row(0);
        canvas.grid_row(h - 1);

        Self {
            canvas,
            axis: geometry.axis(),
            scale,
            baseline: h,
            step: color::color_step(color_steps),
        }
    }

    /// Plot one event.
    pub fn record(&mut self, e: &Event) {
        let x = self.axis.column(f64::from(e.start));
        let y = self.scale.row(self.baseline, f64::from(e.run));
        let blend = Blend::for_outcome(e.outcome(), Blend::ActiveGray);
        let step = self.step;
        self.canvas.update(x, y, |px| blend.apply(px, step));
    }

    /// The canvas as drawn so far.
    pub fn render(&self) -> RgbaImage {
        self.canvas.image().clone()
    }
}

/// Start-time phase against log2 run-time radius, drawn straight into the canvas.
#[derive(Clone, Debug)]
pub struct PolarScatter {
    canvas: Canvas,
    projection: PolarProjection,
    jitter: Jitter,
    step: f64,
}

impl PolarScatter {
    /// Polar scatter plot over `projection`; crosshairs mark the center.
    pub fn new(
        geometry: Geometry,
        projection: PolarProjection,
        color_steps: f64,
        jitter: Jitter,
    ) -> Self {
        let mut canvas = geometry.canvas();
        let (cx, cy) = projection.center();
        canvas.grid_column(cx);
        canvas.grid_row(cy);
        Self {
            canvas,
            projection,
            jitter,
            step: color::color_step(color_steps),
        }
    }

    /// Plot one event, nudged by up to two pixels on each axis.
    pub fn record(&mut self, e: &Event) {
        let r = self.projection.radius(e.run_floored());
        let nudge = (
            self.jitter.uniform(POLAR_JITTER_PX),
            self.jitter.uniform(POLAR_JITTER_PX),
        );
        let (x, y) = self.projection.point(f64::from(e.start), r, nudge);
        let blend = Blend::for_outcome(e.outcome(), Blend::ActiveGreen);
        let step = self.step;
        self.canvas.update(x, y, |px| blend.apply(px, step));
    }

    /// The canvas as drawn so far.
    pub fn render(&self) -> RgbaImage {
        self.canvas.image().clone()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/vis/scatter.rs"]
mod tests;
