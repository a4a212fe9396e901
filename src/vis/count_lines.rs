//! Smoothed event counts over time, one line per completion status.

use image::RgbaImage;

use crate::foundation::core::{Event, Outcome};
use crate::raster::canvas::Canvas;
use crate::raster::color;
use crate::transform::linear::TimeAxis;
use crate::vis::Geometry;
use crate::vis::smoothing::DecayWindow;

const SUCCESS_LINE: [u8; 3] = [24, 24, 128];
const FAILURE_LINE: [u8; 3] = [128, 24, 24];
const HATCH: [u8; 3] = [18, 18, 18];

/// Success and failure counts per column, each event smeared over a [`DecayWindow`].
///
/// Columns closer to an edge than the window length lack full support and are hatched.
#[derive(Clone, Debug)]
pub struct CountLines {
    geometry: Geometry,
    axis: TimeAxis,
    window: DecayWindow,
    successes: Vec<f64>,
    failures: Vec<f64>,
    x_grid: u32,
}

impl CountLines {
    /// Count lines smoothed with per-column decay `resonance`.
    pub fn new(geometry: Geometry, resonance: f64, x_grid: u32) -> Self {
        let w = geometry.width as usize;
        Self {
            geometry,
            axis: geometry.axis(),
            window: DecayWindow::new(resonance, w),
            successes: vec![0.0; w],
            failures: vec![0.0; w],
            x_grid,
        }
    }

    /// Smear one completed event into its status line.
    pub fn record(&mut self, e: &Event) {
        let Some(x) = self.axis.column_in_bounds(f64::from(e.start)) else {
            return;
        };
        match e.outcome() {
            Outcome::Success => self.window.spread(&mut self.successes, x),
            Outcome::Failure(_) => self.window.spread(&mut self.failures, x),
            Outcome::Active => {}
        }
    }

    fn hatch_edges(&self, canvas: &mut Canvas) {
        let w = self.geometry.w();
        let reach = (self.window.len() as i64).min(w);
        let edges = (0..reach).chain((w - reach).max(reach)..w);
        for x in edges {
            for y in 0..self.geometry.h() {
                if (x + y) % 8 < 3 || (x - y).rem_euclid(8) == 0 {
                    canvas.update(x, y, |px| color::add_rgb(px, HATCH));
                }
            }
        }
    }

    fn draw_line(canvas: &mut Canvas, frame: &[f64], scale: f64, stroke: i64, rgb: [u8; 3]) {
        let h = i64::from(canvas.height());
        let height = |v: f64| (v * scale).ceil() as i64;
        for x in 1..frame.len().saturating_sub(1) {
            let (prev, cur, next) = (height(frame[x - 1]), height(frame[x]), height(frame[x + 1]));
            let lo = (cur - stroke).min(prev).min(next);
            for y in lo..cur {
                canvas.update(x as i64, h - y, |px| color::add_rgb(px, rgb));
            }
        }
    }

    /// Hatched edges, grid, then both lines scaled to the tallest count.
    pub fn render(&self) -> RgbaImage {
        let mut canvas = self.geometry.canvas();
        self.hatch_edges(&mut canvas);
        canvas.grid_divisions(self.x_grid);

        let peak = self
            .successes
            .iter()
            .chain(&self.failures)
            .copied()
            .fold(0.0, f64::max);
        if peak <= 0.0 {
            return canvas.into_image();
        }
        let scale = self.geometry.h() as f64 / peak;
        let stroke = self.geometry.h() / 32;
        Self::draw_line(&mut canvas, &self.successes, scale, stroke, SUCCESS_LINE);
        Self::draw_line(&mut canvas, &self.failures, scale, stroke, FAILURE_LINE);
        canvas.into_image()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/vis/count_lines.rs"]
mod tests;
