//! Bloom-rendered scatter plots: every event deposits a soft 5×5 blob per status layer.

use image::RgbaImage;

use crate::foundation::core::Event;
use crate::raster::bloom::BloomLayers;
use crate::raster::color;
use crate::transform::jitter::Jitter;
use crate::transform::linear::TimeAxis;
use crate::transform::non_linear::LogScale;
use crate::transform::polar::PolarProjection;
use crate::vis::Geometry;

/// Standard deviation, in seconds, of the noise added to run times before the polar projection.
const RUN_JITTER_SIGMA: f64 = 0.5;

/// Linear-time / log2-run scatter with bloom.
#[derive(Clone, Debug)]
pub struct Starfield {
    geometry: Geometry,
    axis: TimeAxis,
    scale: LogScale,
    layers: BloomLayers,
    step: f64,
    x_grid: u32,
}

impl Starfield {
    /// Starfield with `x_grid` vertical divisions.
    pub fn new(geometry: Geometry, scale: LogScale, color_steps: f64, x_grid: u32) -> Self {
        Self {
            geometry,
            axis: geometry.axis(),
            scale,
            layers: BloomLayers::new(geometry.width, geometry.height),
            step: color::color_step(color_steps),
            x_grid,
        }
    }

    /// Deposit one event into its status layer.
    pub fn record(&mut self, e: &Event) {
        let x = self.axis.column(f64::from(e.start));
        let y = self.scale.row(self.geometry.h(), f64::from(e.run));
        self.layers.deposit(e.outcome(), x, y);
    }

    /// Grid plus composited layers.
    pub fn render(&self) -> RgbaImage {
        let mut canvas = self.geometry.canvas();
        canvas.grid_divisions(self.x_grid);
        canvas.grid_doublings(self.scale.pixels_per_doubling());
        self.layers.composite_onto(&mut canvas, self.step);
        canvas.into_image()
    }
}

/// Periodic-phase / log2-radius scatter with bloom.
#[derive(Clone, Debug)]
pub struct PolarStarfield {
    geometry: Geometry,
    projection: PolarProjection,
    layers: BloomLayers,
    jitter: Jitter,
    step: f64,
}

impl PolarStarfield {
    /// Polar starfield over `projection`.
    pub fn new(
        geometry: Geometry,
        projection: PolarProjection,
        color_steps: f64,
        jitter: Jitter,
    ) -> Self {
        Self {
            geometry,
            projection,
            layers: BloomLayers::new(geometry.width, geometry.height),
            jitter,
            step: color::color_step(color_steps),
        }
    }

    /// Deposit one event; run time is blurred by a half-second Gaussian before projecting.
    pub fn record(&mut self, e: &Event) {
        let run = e.run_floored() + self.jitter.gaussian(RUN_JITTER_SIGMA);
        if run <= 0.0 {
            return;
        }
        let r = self.projection.radius(run);
        let (x, y) = self.projection.point(f64::from(e.start), r, (0.0, 0.0));
        self.layers.deposit(e.outcome(), x, y);
    }

    /// Crosshairs plus composited layers.
    pub fn render(&self) -> RgbaImage {
        let mut canvas = self.geometry.canvas();
        let (cx, cy) = self.projection.center();
        canvas.grid_column(cx);
        canvas.grid_row(cy);
        self.layers.composite_onto(&mut canvas, self.step);
        canvas.into_image()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/vis/starfield.rs"]
mod tests;
