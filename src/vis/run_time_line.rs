//! Mean run time per column as a connected line on the log2 axis.

use image::RgbaImage;

use crate::foundation::core::{Event, Outcome};
use crate::raster::canvas::Canvas;
use crate::raster::color;
use crate::transform::linear::TimeAxis;
use crate::transform::non_linear::LogScale;
use crate::vis::Geometry;

/// Horizontal spacing of the dotted lead-in and tail.
const DOT_SPACING: usize = 4;

#[derive(Clone, Copy, Debug, Default)]
struct Column {
    successes: u64,
    failures: u64,
    active: u64,
    run_sum: i64,
}

impl Column {
    fn count(&self) -> u64 {
        self.successes + self.failures + self.active
    }

    /// Stroke color mixing red (failures), green (in-progress) and blue (successes).
    fn color(&self) -> [u8; 3] {
        let n = self.count().max(1);
        let share = |k: u64| (32 + 128 * k / n) as u8;
        [share(self.failures), share(self.active), share(self.successes)]
    }
}

/// Connected stroke through each populated column's mean run time.
#[derive(Clone, Debug)]
pub struct RunTimeLine {
    geometry: Geometry,
    axis: TimeAxis,
    scale: LogScale,
    columns: Vec<Column>,
    x_grid: u32,
}

impl RunTimeLine {
    /// Line plot with `x_grid` vertical divisions.
    pub fn new(geometry: Geometry, scale: LogScale, x_grid: u32) -> Self {
        Self {
            geometry,
            axis: geometry.axis(),
            scale,
            columns: vec![Column::default(); geometry.width as usize],
            x_grid,
        }
    }

    /// Add one event to its column's tally.
    pub fn record(&mut self, e: &Event) {
        let Some(x) = self.axis.column_in_bounds(f64::from(e.start)) else {
            return;
        };
        let col = &mut self.columns[x];
        match e.outcome() {
            Outcome::Success => col.successes += 1,
            Outcome::Failure(_) => col.failures += 1,
            Outcome::Active => col.active += 1,
        }
        col.run_sum += i64::from(e.run);
    }

    /// Height, in pixels above the bottom edge, of a column's mean run time.
    fn level(&self, col: &Column) -> i64 {
        let mean = col.run_sum as f64 / col.count().max(1) as f64;
        if mean > 1.0 {
            self.scale.offset(mean).floor() as i64
        } else {
            0
        }
    }

    fn stroke(canvas: &mut Canvas, x: i64, y_lo: i64, y_hi: i64, rgb: [u8; 3]) {
        let h = i64::from(canvas.height());
        for y in y_lo..=y_hi {
            canvas.update(x, h - y, |px| color::add_rgb(px, rgb));
        }
    }

    /// Grid plus the line; a feed with no data renders the grid alone.
    pub fn render(&self) -> RgbaImage {
        let mut canvas = self.geometry.canvas();
        canvas.grid_divisions(self.x_grid);
        canvas.grid_doublings(self.scale.pixels_per_doubling());

        let thickness = self.geometry.h() / 48;
        let mut last: Option<(i64, i64)> = None;
        for (x, col) in self.columns.iter().enumerate() {
            if col.count() == 0 {
                continue;
            }
            let (x, y) = (x as i64, self.level(col));
            let ((x0, y0), spacing) = match last {
                Some(prev) => (prev, 1),
                None => ((0, y), DOT_SPACING),
            };
            let rgb = col.color();
            for xp in (x0..x).step_by(spacing) {
                let ya = y0 + (y - y0) * (xp - x0) / (x - x0);
                let yb = y0 + (y - y0) * (xp + 1 - x0) / (x - x0);
                let (lo, hi) = if y0 < y { (ya, yb) } else { (yb, ya) };
                Self::stroke(&mut canvas, xp, lo, hi + thickness, rgb);
            }
            last = Some((x, y));
        }

        if let Some((x_last, y_last)) = last {
            let rgb = self.columns[x_last as usize].color();
            for x in (x_last..self.geometry.w()).step_by(DOT_SPACING) {
                Self::stroke(&mut canvas, x, y_last, y_last + thickness, rgb);
            }
        }
        canvas.into_image()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/vis/run_time_line.rs"]
mod tests;
