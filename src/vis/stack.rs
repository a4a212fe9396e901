//! Proportional status stacks, globally or per column.

use image::{Rgba, RgbaImage};

use crate::foundation::core::{Event, Outcome};
use crate::raster::canvas::Canvas;
use crate::raster::color;
use crate::transform::linear::TimeAxis;
use crate::vis::Geometry;

/// Heights of consecutive segments of a `height`-pixel column, one per entry of `counts`,
/// proportional to `count / total`.
///
/// Segment ends are rounded up cumulatively and clamped to `height`, so the segments fill the
/// column exactly whenever `total > 0`. A zero total yields all-zero segments.
pub fn stack_segments(counts: &[u64], total: u64, height: u32) -> Vec<u32> {
    if total == 0 {
        return vec![0; counts.len()];
    }
    let h = u64::from(height);
    let mut top = 0u64;
    counts
        .iter()
        .map(|&n| {
            let next = (top + (n * h).div_ceil(total)).min(h);
            let len = next - top;
            top = next;
            len as u32
        })
        .collect()
}

/// Stacking order for status codes `0..classes`: failure classes in code order, then successes.
fn status_layers(classes: usize) -> Vec<(usize, Rgba<u8>)> {
    let failures = (1..classes).map(|code| (code, color::failure_class_color(code, classes)));
    failures
        .chain((classes > 0).then_some((0, color::SUCCESS_BAR)))
        .collect()
}

/// Fill column `x` bottom-up with `segments`, colored by `layers`.
fn draw_stack(canvas: &mut Canvas, x: i64, layers: &[(usize, Rgba<u8>)], segments: &[u32]) {
    let h = i64::from(canvas.height());
    let mut y = 0i64;
    for ((_, c), len) in layers.iter().zip(segments) {
        for _ in 0..*len {
            canvas.set(x, h - 1 - y, *c);
            y += 1;
        }
    }
}

fn bump(counts: &mut Vec<u64>, code: usize) {
    if counts.len() <= code {
        counts.resize(code + 1, 0);
    }
    counts[code] += 1;
}

/// Share of each completed status code across the whole feed, as full-width bands.
#[derive(Clone, Debug)]
pub struct StatusStack {
    geometry: Geometry,
    counts: Vec<u64>,
    total: u64,
}

impl StatusStack {
    /// Empty stack.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            counts: Vec::new(),
            total: 0,
        }
    }

    /// Count one completed event; in-progress events are ignored.
    pub fn record(&mut self, e: &Event) {
        if e.status < 0 {
            return;
        }
        bump(&mut self.counts, e.status as usize);
        self.total += 1;
    }

    /// Failure classes bottom-up, successes on top.
    pub fn render(&self) -> RgbaImage {
        let mut canvas = self.geometry.canvas();
        let layers = status_layers(self.counts.len());
        let ordered: Vec<u64> = layers.iter().map(|(code, _)| self.counts[*code]).collect();
        let segments = stack_segments(&ordered, self.total, self.geometry.height);
        for x in 0..self.geometry.w() {
            draw_stack(&mut canvas, x, &layers, &segments);
        }
        canvas.into_image()
    }
}

/// Share of each failure class among failures.
#[derive(Clone, Debug)]
pub struct ErrorStack {
    geometry: Geometry,
    counts: Vec<u64>,
    total: u64,
}

impl ErrorStack {
    /// Empty stack.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            counts: Vec::new(),
            total: 0,
        }
    }

    /// Count one failure; anything else is ignored.
    pub fn record(&mut self, e: &Event) {
        if let Outcome::Failure(code) = e.outcome() {
            bump(&mut self.counts, usize::from(code));
            self.total += 1;
        }
    }

    /// Failure classes bottom-up in code order.
    pub fn render(&self) -> RgbaImage {
        let mut canvas = self.geometry.canvas();
        let classes = self.counts.len();
        let layers: Vec<(usize, Rgba<u8>)> = (1..classes)
            .map(|code| (code, color::failure_class_color(code, classes)))
            .collect();
        let ordered: Vec<u64> = layers.iter().map(|(code, _)| self.counts[*code]).collect();
        let segments = stack_segments(&ordered, self.total, self.geometry.height);
        for x in 0..self.geometry.w() {
            draw_stack(&mut canvas, x, &layers, &segments);
        }
        canvas.into_image()
    }
}

/// Status stack recomputed for every column of the time axis.
#[derive(Clone, Debug)]
pub struct RollingStack {
    geometry: Geometry,
    axis: TimeAxis,
    /// Counts per status code, each indexed by column.
    counts: Vec<Vec<u64>>,
    totals: Vec<u64>,
}

impl RollingStack {
    /// Empty per-column stack.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            axis: geometry.axis(),
            counts: Vec::new(),
            totals: vec![0; geometry.width as usize],
        }
    }

    /// Count one completed event in its column. Events past the right edge land in the last
    /// column; events before the left edge are dropped.
    pub fn record(&mut self, e: &Event) {
        if e.status < 0 {
            return;
        }
        let x = self.axis.column(f64::from(e.start)).min(self.geometry.w() - 1);
        if x < 0 {
            return;
        }
        let (code, x) = (e.status as usize, x as usize);
        let width = self.totals.len();
        if self.counts.len() <= code {
            self.counts.resize_with(code + 1, || vec![0; width]);
        }
        self.counts[code][x] += 1;
        self.totals[x] += 1;
    }

    /// One stack per column; empty columns stay background.
    pub fn render(&self) -> RgbaImage {
        let mut canvas = self.geometry.canvas();
        let layers = status_layers(self.counts.len());
        for (x, &total) in self.totals.iter().enumerate() {
            if total == 0 {
                continue;
            }
            let ordered: Vec<u64> = layers.iter().map(|(code, _)| self.counts[*code][x]).collect();
            let segments = stack_segments(&ordered, total, self.geometry.height);
            draw_stack(&mut canvas, x as i64, &layers, &segments);
        }
        canvas.into_image()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/vis/stack.rs"]
mod tests;
