//! Per-column status mix as a vertical color gradient.

use image::RgbaImage;

use crate::foundation::core::{Event, Outcome};
use crate::raster::color::{self, SATURATED};
use crate::transform::linear::TimeAxis;
use crate::vis::Geometry;

/// Failures tint the bottom of each column red, successes tint the top blue, and in-progress
/// events lift the gray base. Each class is normalized by its own busiest column.
#[derive(Clone, Debug)]
pub struct Ribbon {
    geometry: Geometry,
    axis: TimeAxis,
    successes: Vec<u64>,
    failures: Vec<u64>,
    active: Vec<u64>,
    // Per-class column maxima start at one so an absent class renders as zero.
    success_max: u64,
    failure_max: u64,
    active_max: u64,
}

impl Ribbon {
    /// Empty ribbon.
    pub fn new(geometry: Geometry) -> Self {
        let w = geometry.width as usize;
        Self {
            geometry,
            axis: geometry.axis(),
            successes: vec![0; w],
            failures: vec![0; w],
            active: vec![0; w],
            success_max: 1,
            failure_max: 1,
            active_max: 1,
        }
    }

    /// Count one event in its column; events past the right edge land in the last column.
    pub fn record(&mut self, e: &Event) {
        let x = self.axis.column(f64::from(e.start)).min(self.geometry.w() - 1);
        if x < 0 {
            return;
        }
        let x = x as usize;
        let (counts, max) = match e.outcome() {
            Outcome::Success => (&mut self.successes, &mut self.success_max),
            Outcome::Failure(_) => (&mut self.failures, &mut self.failure_max),
            Outcome::Active => (&mut self.active, &mut self.active_max),
        };
        counts[x] += 1;
        *max = (*max).max(counts[x]);
    }

    /// Gradient columns.
    pub fn render(&self) -> RgbaImage {
        let mut canvas = self.geometry.canvas();
        let h = self.geometry.h() as f64;
        let bg = f64::from(self.geometry.bg);
        for x in 0..self.geometry.width as usize {
            let r = SATURATED * self.failures[x] as f64 / self.failure_max as f64;
            let b = SATURATED * self.successes[x] as f64 / self.success_max as f64;
            let base = bg + (SATURATED - bg) * self.active[x] as f64 / self.active_max as f64;
            for y in 0..self.geometry.h() {
                let depth = y as f64 / h;
                let px = color::rgb(
                    (base + r * depth).min(SATURATED) as u8,
                    base as u8,
                    (base + b * (1.0 - depth)).min(SATURATED) as u8,
                );
                canvas.set(x as i64, y, px);
            }
        }
        canvas.into_image()
    }
}
