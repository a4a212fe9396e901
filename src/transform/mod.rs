//! Coordinate transforms from event time to canvas pixels.

/// Seedable sub-pixel noise.
pub mod jitter;
/// Linear time axis.
pub mod linear;
/// Logarithmic run-time axis.
pub mod non_linear;
/// Periodic polar projection.
pub mod polar;
