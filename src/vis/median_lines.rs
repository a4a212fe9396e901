//! Smoothed run-time percentile bands of successful events.

use image::RgbaImage;

use crate::foundation::core::{Event, Outcome};
use crate::raster::canvas::Canvas;
use crate::raster::color;
use crate::transform::jitter::Jitter;
use crate::transform::linear::TimeAxis;
use crate::transform::non_linear::LogScale;
use crate::vis::Geometry;
use crate::vis::smoothing::DecayWindow;

/// Percentiles tracked per column, as fractions.
pub const PERCENTILES: [f64; 5] = [0.05, 0.25, 0.50, 0.75, 0.95];

const OUTER_BAND: [f64; 3] = [32.0, 32.0, 64.0];
const INNER_BAND: [f64; 3] = [64.0, 64.0, 128.0];
const MEDIAN_LINE: [f64; 3] = [96.0, 96.0, 192.0];

/// 5th-95th and 25th-75th percentile bands plus a median line, per column.
///
/// Each column's percentiles are averaged with its neighbours', weighted by decay and by the
/// neighbour's own event count; band brightness fades with local density so sparse columns
/// don't read as confidently as busy ones.
#[derive(Clone, Debug)]
pub struct MedianLines {
    geometry: Geometry,
    axis: TimeAxis,
    scale: LogScale,
    resonance: f64,
    window: DecayWindow,
    jitter: Jitter,
    /// Row-major success density, `width * height`.
    density: Vec<f64>,
    /// Successes per column.
    counts: Vec<f64>,
    x_grid: u32,
}

impl MedianLines {
    /// Percentile bands smoothed with per-column decay `resonance`.
    pub fn new(
        geometry: Geometry,
        scale: LogScale,
        resonance: f64,
        x_grid: u32,
        jitter: Jitter,
    ) -> Self {
        let (w, h) = (geometry.width as usize, geometry.height as usize);
        Self {
            geometry,
            axis: geometry.axis(),
            scale,
            resonance,
            window: DecayWindow::new(resonance, w),
            jitter,
            density: vec![0.0; w * h],
            counts: vec![0.0; w],
            x_grid,
        }
    }

    /// Bin one success; the column is jittered in proportion to the resonance.
    pub fn record(&mut self, e: &Event) {
        if e.outcome() != Outcome::Success {
            return;
        }
        let (w, h) = (self.geometry.w(), self.geometry.h());
        let spread = self.resonance * w as f64 / 128.0;
        let x = self.axis.column(f64::from(e.start)) + self.jitter.gaussian(spread) as i64;
        let y = self.scale.row(h, f64::from(e.run));
        if (0..w).contains(&x) && (0..h).contains(&y) {
            self.density[(y * w + x) as usize] += 1.0;
            self.counts[x as usize] += 1.0;
        }
    }

    /// Rows, scanning top-down, at which each of [`PERCENTILES`] of column `x`'s density is
    /// reached.
    pub(crate) fn percentile_rows(&self, x: usize) -> [f64; 5] {
        let (w, h) = (self.geometry.width as usize, self.geometry.height as usize);
        let n = self.counts[x];
        PERCENTILES.map(|p| {
            let target = p * n;
            let mut acc = 0.0;
            let mut y = 0;
            while y < h {
                acc += self.density[y * w + x];
                if acc >= target {
                    break;
                }
                y += 1;
            }
            y as f64
        })
    }

    /// Smoothed percentile rows and brightness multiplier for populated column `x`.
    fn smoothed(&self, x: usize, rows: &[[f64; 5]], peak: f64) -> ([f64; 5], f64) {
        let w = self.counts.len();
        let (left, right) = self.window.reach(x, w);
        let neighbours = std::iter::once((x, 0))
            .chain((1..left).map(|i| (x - i, i)))
            .chain((1..right).map(|i| (x + i, i)));

        let mut sum = [0.0; 5];
        let (mut weight, mut divisor) = (0.0, 0.0);
        for (c, i) in neighbours {
            let n = self.counts[c];
            if n <= 0.0 {
                continue;
            }
            let tap = self.window.tap(i);
            for (acc, row) in sum.iter_mut().zip(rows[c]) {
                *acc += tap * n * row;
            }
            weight += tap * n;
            divisor += tap;
        }
        (sum.map(|s| s / weight), weight / peak / divisor)
    }

    fn band(canvas: &mut Canvas, x: i64, lo: f64, hi: f64, rgb: [f64; 3], m: f64) {
        for y in lo as i64..=hi as i64 {
            canvas.update(x, y, |px| {
                for (c, base) in px.0.iter_mut().zip(rgb) {
                    *c = color::add_sat(*c, base * m);
                }
            });
        }
    }

    /// Grid, then three nested bands per populated column.
    pub fn render(&self) -> RgbaImage {
        let mut canvas = self.geometry.canvas();
        canvas.grid_divisions(self.x_grid);
        canvas.grid_doublings(self.scale.pixels_per_doubling());

        let peak = self.counts.iter().copied().fold(0.0, f64::max);
        if peak <= 0.0 {
            return canvas.into_image();
        }

        let rows: Vec<[f64; 5]> = (0..self.counts.len())
            .map(|x| {
                if self.counts[x] > 0.0 {
                    self.percentile_rows(x)
                } else {
                    [0.0; 5]
                }
            })
            .collect();

        for x in 0..self.counts.len() {
            if self.counts[x] <= 0.0 {
                continue;
            }
            let ([p05, p25, p50, p75, p95], m) = self.smoothed(x, &rows, peak);
            let xi = x as i64;
            Self::band(&mut canvas, xi, p05, p95, OUTER_BAND, m);
            Self::band(&mut canvas, xi, p25, p75, INNER_BAND, m);
            Self::band(&mut canvas, xi, p50 - 1.0, p50 + 1.0, MEDIAN_LINE, m);
        }
        canvas.into_image()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/vis/median_lines.rs"]
mod tests;
