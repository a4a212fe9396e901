use image::{Rgba, RgbaImage};

use crate::raster::color;

/// Gray level used for grid lines.
pub const GRID_LEVEL: u8 = 45;

/// An opaque RGBA8 pixel buffer with a uniform background.
///
/// Coordinates are signed so projections can hand over whatever they computed; reads and writes
/// outside the canvas are ignored.
#[derive(Clone, Debug)]
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    /// Create a canvas filled with the gray level `bg`.
    pub fn new(width: u32, height: u32, bg: u8) -> Self {
        Self {
            img: RgbaImage::from_pixel(width, height, color::gray(bg)),
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.img.width()
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.img.height()
    }

    fn index(&self, x: i64, y: i64) -> Option<(u32, u32)> {
        if x < 0 || y < 0 || x >= i64::from(self.width()) || y >= i64::from(self.height()) {
            return None;
        }
        Some((x as u32, y as u32))
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgba<u8>> {
        self.index(x, y).map(|(x, y)| *self.img.get_pixel(x, y))
    }

    /// Mutable pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel_mut(&mut self, x: i64, y: i64) -> Option<&mut Rgba<u8>> {
        let (x, y) = self.index(x, y)?;
        Some(self.img.get_pixel_mut(x, y))
    }

    /// Overwrite the pixel at `(x, y)`; no-op out of bounds.
    pub fn set(&mut self, x: i64, y: i64, px: Rgba<u8>) {
        if let Some(dst) = self.pixel_mut(x, y) {
            *dst = px;
        }
    }

    /// Apply `f` to the pixel at `(x, y)`; no-op out of bounds.
    pub fn update(&mut self, x: i64, y: i64, f: impl FnOnce(&mut Rgba<u8>)) {
        if let Some(px) = self.pixel_mut(x, y) {
            f(px);
        }
    }

    /// Draw a full-height grid line at column `x`.
    pub fn grid_column(&mut self, x: i64) {
        for y in 0..i64::from(self.height()) {
            self.set(x, y, color::gray(GRID_LEVEL));
        }
    }

    /// Draw a full-width grid line at row `y`.
    pub fn grid_row(&mut self, y: i64) {
        for x in 0..i64::from(self.width()) {
            self.set(x, y, color::gray(GRID_LEVEL));
        }
    }

    /// Grid columns splitting the width into `divisions` equal parts (interior lines only).
    pub fn grid_divisions(&mut self, divisions: u32) {
        let w = i64::from(self.width());
        for i in 1..i64::from(divisions) {
            self.grid_column(i * w / i64::from(divisions));
        }
    }

    /// Grid rows on each doubling of run time, walking up from the bottom edge.
    pub fn grid_doublings(&mut self, y_log2: f64) {
        if !y_log2.is_finite() || y_log2 <= 0.0 {
            return;
        }
        let mut y = f64::from(self.height());
        while y > 0.0 {
            self.grid_row(y as i64);
            y -= y_log2;
        }
    }

    /// Borrow the underlying image.
    pub fn image(&self) -> &RgbaImage {
        &self.img
    }

    /// Consume the canvas, returning the underlying image.
    pub fn into_image(self) -> RgbaImage {
        self.img
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/canvas.rs"]
mod tests;
