//! Run-time distribution: log2 run time across, event count up.

use image::RgbaImage;

use crate::foundation::core::{Event, Outcome};
use crate::raster::canvas::Canvas;
use crate::raster::color;
use crate::transform::non_linear::LogScale;
use crate::vis::Geometry;

/// Stacked bars (failures under successes) of completed events per log2 run-time bucket.
#[derive(Clone, Debug)]
pub struct Histogram {
    geometry: Geometry,
    scale: LogScale,
    successes: Vec<u64>,
    failures: Vec<u64>,
}

impl Histogram {
    /// Histogram with `scale` pixels per doubling of run time.
    pub fn new(geometry: Geometry, scale: LogScale) -> Self {
        let w = geometry.width as usize;
        Self {
            geometry,
            scale,
            successes: vec![0; w],
            failures: vec![0; w],
        }
    }

    /// Count one completed event. Runs too long for the canvas are dropped.
    pub fn record(&mut self, e: &Event) {
        let x = self.scale.offset_floored(f64::from(e.run));
        if x < 0 || x >= self.geometry.w() {
            return;
        }
        let x = x as usize;
        match e.outcome() {
            Outcome::Success => self.successes[x] += 1,
            Outcome::Failure(_) => self.failures[x] += 1,
            Outcome::Active => {}
        }
    }

    fn draw_grid(&self, canvas: &mut Canvas) {
        let (w, h) = (self.geometry.w(), self.geometry.h());
        let y_log2 = self.scale.pixels_per_doubling();
        if y_log2.is_finite() && y_log2 > 0.0 {
            let mut x = 0.0;
            while x < w as f64 {
                canvas.grid_column(x as i64);
                x += y_log2;
            }
        }
        canvas.grid_column(w - 1);
        canvas.grid_row(0);
        canvas.grid_row(h - 1);
    }

    /// Bars scaled so the fullest bucket spans the canvas height.
    pub fn render(&self) -> RgbaImage {
        let mut canvas = self.geometry.canvas();
        self.draw_grid(&mut canvas);

        let peak = self
            .successes
            .iter()
            .zip(&self.failures)
            .map(|(s, f)| s + f)
            .max()
            .unwrap_or(0);
        if peak == 0 {
            return canvas.into_image();
        }

        let h = self.geometry.h();
        let scale = h as f64 / peak as f64;
        for (x, (&s, &f)) in self.successes.iter().zip(&self.failures).enumerate() {
            let fail = ((f as f64 * scale).ceil() as i64).min(h);
            let pass = ((s as f64 * scale).ceil() as i64).min(h - fail);
            for y in 0..fail {
                canvas.set(x as i64, h - 1 - y, color::FAILURE_BAR);
            }
            for y in fail..fail + pass {
                canvas.set(x as i64, h - 1 - y, color::SUCCESS_BAR);
            }
        }
        canvas.into_image()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/vis/histogram.rs"]
mod tests;
