//! Recency-window strips of still-open events.
//!
//! Input must arrive in non-decreasing start order. Out-of-order events are tolerated but blur
//! the picture: columns are only ever drawn once, when the stream first moves past them.

use image::RgbaImage;

use crate::foundation::core::{Event, Outcome};
use crate::raster::canvas::Canvas;
use crate::raster::color::{self, SATURATED};
use crate::transform::linear::TimeAxis;
use crate::vis::Geometry;

/// Each time the stream advances to a new column, one strip is drawn per skipped column. Every
/// tracked event gets one pixel whose brightness grows as it ages toward its own completion;
/// successes stack upward from just above the center line, failures downward from it.
#[derive(Clone, Debug)]
pub struct Wave {
    canvas: Canvas,
    axis: TimeAxis,
    width: i64,
    center: i64,
    bg: u8,
    column: i64,
    successes: Vec<Event>,
    failures: Vec<Event>,
    sorted: bool,
}

impl Wave {
    /// Wave in arrival order, or with each strip's intensities sorted ascending when `sorted`.
    pub fn new(geometry: Geometry, sorted: bool) -> Self {
        Self {
            canvas: geometry.canvas(),
            axis: geometry.axis(),
            width: geometry.w(),
            center: geometry.h() / 2,
            bg: geometry.bg,
            column: -1,
            successes: Vec::new(),
            failures: Vec::new(),
            sorted,
        }
    }

    /// Number of tracked (success, failure) events.
    #[cfg(test)]
    pub(crate) fn open_counts(&self) -> (usize, usize) {
        (self.successes.len(), self.failures.len())
    }

    /// Prune finished events, track `e`, and draw any columns the stream has moved past.
    pub fn record(&mut self, e: &Event) {
        let now = i64::from(e.start);
        self.successes.retain(|p| p.end() > now);
        self.failures.retain(|f| f.end() > now);
        match e.outcome() {
            Outcome::Success => self.successes.push(*e),
            Outcome::Failure(_) => self.failures.push(*e),
            Outcome::Active => {}
        }

        let target = self.axis.column(f64::from(e.start)).min(self.width);
        while self.column < target {
            self.column += 1;
            self.draw_strip(self.column, now);
        }
    }

    fn draw_strip(&mut self, x: i64, now: i64) {
        let bg = self.bg;
        for (i, fade) in self.fades(&self.successes, now).into_iter().enumerate() {
            let c = color::rgb(
                color::add_sat(bg, fade / 4.0),
                color::add_sat(bg, fade / 4.0),
                color::add_sat(bg, fade),
            );
            self.canvas.set(x, self.center - 1 - i as i64, c);
        }
        for (i, fade) in self.fades(&self.failures, now).into_iter().enumerate() {
            let c = color::rgb(
                color::add_sat(bg, fade),
                color::add_sat(bg, fade / 4.0),
                color::add_sat(bg, fade / 4.0),
            );
            self.canvas.set(x, self.center + i as i64, c);
        }
    }

    /// Per-event intensities, most recent first (or ascending when sorted).
    fn fades(&self, open: &[Event], now: i64) -> Vec<f64> {
        let mut fades: Vec<f64> = open
            .iter()
            .rev()
            .map(|p| {
                let age = (now - i64::from(p.start)) as f64;
                let lifetime = (i64::from(p.run) + 1).max(1) as f64;
                SATURATED * age / lifetime
            })
            .collect();
        if self.sorted {
            fades.sort_by(f64::total_cmp);
        }
        fades
    }

    /// The canvas as drawn so far.
    pub fn render(&self) -> RgbaImage {
        self.canvas.image().clone()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/vis/wave.rs"]
mod tests;
