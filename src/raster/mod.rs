//! Pixel buffers and per-pixel composition.

/// Bloom (soft point) accumulation.
pub mod bloom;
/// Canvas and grid drawing.
pub mod canvas;
/// Color rules.
pub mod color;
