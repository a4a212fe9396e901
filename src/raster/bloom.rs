//! Soft point rendering through a fixed 5×5 Gaussian footprint.

use crate::foundation::core::Outcome;
use crate::raster::{canvas::Canvas, color};

/// Border, in pixels, kept around each float layer so a deposit never needs clipping.
pub const BLEED: i64 = 2;

const SIZE: i64 = 5;

/// Pixel-integrated Gaussian (σ = 0.5), scaled so the center weight is exactly 1.
pub const BLOOM_KERNEL: [[f64; 5]; 5] = [
    [0.000004, 0.000455, 0.001978, 0.000455, 0.000004],
    [0.000455, 0.053093, 0.230420, 0.053093, 0.000455],
    [0.001978, 0.230420, 1.000000, 0.230420, 0.001978],
    [0.000455, 0.053093, 0.230420, 0.053093, 0.000455],
    [0.000004, 0.000455, 0.001978, 0.000455, 0.000004],
];

/// Floating-point intensity buffer with a [`BLEED`]-pixel margin on every edge.
#[derive(Clone, Debug)]
pub struct BloomLayer {
    stride: i64,
    rows: i64,
    data: Vec<f64>,
}

impl BloomLayer {
    /// Layer backing a `width`×`height` canvas.
    pub fn new(width: u32, height: u32) -> Self {
        let stride = i64::from(width) + 2 * BLEED;
        let rows = i64::from(height) + 2 * BLEED;
        Self {
            stride,
            rows,
            data: vec![0.0; (stride * rows) as usize],
        }
    }

    /// Deposit one kernel centered on canvas pixel `(x, y)`.
    ///
    /// The whole footprint must fit inside the margined buffer; otherwise nothing is written and
    /// `false` is returned.
    pub fn deposit(&mut self, x: i64, y: i64) -> bool {
        let (x0, y0) = (x + BLEED - SIZE / 2, y + BLEED - SIZE / 2);
        if x0 < 0 || y0 < 0 || x0 + SIZE > self.stride || y0 + SIZE > self.rows {
            return false;
        }
        for (ky, row) in BLOOM_KERNEL.iter().enumerate() {
            let base = ((y0 + ky as i64) * self.stride + x0) as usize;
            for (kx, w) in row.iter().enumerate() {
                self.data[base + kx] += w;
            }
        }
        true
    }

    /// Intensity at canvas pixel `(x, y)`; the bleed margin is addressable with negative or
    /// past-the-edge coordinates. Zero outside the buffer.
    pub fn at(&self, x: i64, y: i64) -> f64 {
        let (bx, by) = (x + BLEED, y + BLEED);
        if bx < 0 || by < 0 || bx >= self.stride || by >= self.rows {
            return 0.0;
        }
        self.data[(by * self.stride + bx) as usize]
    }

    /// Number of buffer cells (margin included) holding a non-zero intensity.
    #[cfg(test)]
    pub(crate) fn lit_cells(&self) -> usize {
        self.data.iter().filter(|v| **v != 0.0).count()
    }
}

/// One [`BloomLayer`] per completion status.
#[derive(Clone, Debug)]
pub struct BloomLayers {
    success: BloomLayer,
    failure: BloomLayer,
    active: BloomLayer,
}

impl BloomLayers {
    /// Layers backing a `width`×`height` canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            success: BloomLayer::new(width, height),
            failure: BloomLayer::new(width, height),
            active: BloomLayer::new(width, height),
        }
    }

    /// The layer events with `outcome` accumulate into.
    pub fn layer(&self, outcome: Outcome) -> &BloomLayer {
        match outcome {
            Outcome::Success => &self.success,
            Outcome::Failure(_) => &self.failure,
            Outcome::Active => &self.active,
        }
    }

    /// Deposit a point into the layer selected by `outcome`.
    pub fn deposit(&mut self, outcome: Outcome, x: i64, y: i64) -> bool {
        match outcome {
            Outcome::Success => self.success.deposit(x, y),
            Outcome::Failure(_) => self.failure.deposit(x, y),
            Outcome::Active => self.active.deposit(x, y),
        }
    }

    /// Composite the visible (non-margin) region onto `canvas`, `step` per unit of intensity.
    pub fn composite_onto(&self, canvas: &mut Canvas, step: f64) {
        for y in 0..i64::from(canvas.height()) {
            for x in 0..i64::from(canvas.width()) {
                let s = self.success.at(x, y);
                let f = self.failure.at(x, y);
                let a = self.active.at(x, y);
                if s > 0.0 || f > 0.0 || a > 0.0 {
                    canvas.update(x, y, |px| color::composite_layers(px, s, f, a, step));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/bloom.rs"]
mod tests;
