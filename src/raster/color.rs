//! Per-pixel color composition rules shared by the visualizations.
//!
//! Every channel update saturates at 255. Successes brighten blue and desaturate toward white
//! (a quarter of the increment also lands on red and green); failures brighten red only and stay
//! saturated; in-progress events brighten green, or a capped gray for renderers that already use
//! green for something else.

use image::Rgba;

use crate::foundation::core::Outcome;

/// Alpha of every pixel the renderers produce.
pub const OPAQUE: u8 = 255;

/// Saturated 8-bit channel value.
pub const SATURATED: f64 = 255.0;

/// Ceiling for the capped-gray in-progress blend.
pub const ACTIVE_CEILING: u8 = 196;

/// Bar color for successes in the histogram and stack renderers.
pub const SUCCESS_BAR: Rgba<u8> = Rgba([83, 83, 191, OPAQUE]);

/// Bar color for failures in the histogram renderer.
pub const FAILURE_BAR: Rgba<u8> = Rgba([191, 33, 33, OPAQUE]);

/// Opaque gray at `level`.
pub fn gray(level: u8) -> Rgba<u8> {
    Rgba([level, level, level, OPAQUE])
}

/// Opaque color from components.
pub fn rgb(r: u8, g: u8, b: u8) -> Rgba<u8> {
    Rgba([r, g, b, OPAQUE])
}

/// Channel increment such that `color_steps` identical hits saturate a channel.
pub fn color_step(color_steps: f64) -> f64 {
    SATURATED / color_steps
}

/// `min(255, c + delta)`, with the increment rounded up.
///
/// Non-positive and NaN increments leave the channel untouched.
pub fn add_sat(c: u8, delta: f64) -> u8 {
    if delta.is_nan() || delta <= 0.0 {
        return c;
    }
    (f64::from(c) + delta).ceil().min(SATURATED) as u8
}

/// `max(c, min(cap, c + delta))`: brightens toward `cap` but never darkens a brighter pixel.
pub fn add_capped(c: u8, delta: f64, cap: u8) -> u8 {
    let raised = add_sat(c, delta).min(cap);
    c.max(raised)
}

/// Saturating integer add on the color channels, leaving alpha alone.
pub fn add_rgb(px: &mut Rgba<u8>, [r, g, b]: [u8; 3]) {
    px[0] = px[0].saturating_add(r);
    px[1] = px[1].saturating_add(g);
    px[2] = px[2].saturating_add(b);
}

/// How a single hit brightens a pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    /// Blue, desaturating through red/green at a quarter rate.
    Success,
    /// Red only.
    Failure,
    /// Green only.
    ActiveGreen,
    /// All channels toward [`ACTIVE_CEILING`].
    ActiveGray,
}

impl Blend {
    /// Blend for a hit with `outcome`; in-progress hits use `active`.
    pub fn for_outcome(outcome: Outcome, active: Blend) -> Self {
        match outcome {
            Outcome::Success => Self::Success,
            Outcome::Failure(_) => Self::Failure,
            Outcome::Active => active,
        }
    }

    /// Apply one hit of intensity `step` to `px`.
    pub fn apply(self, px: &mut Rgba<u8>, step: f64) {
        match self {
            Self::Success => {
                px[0] = add_sat(px[0], step / 4.0);
                px[1] = add_sat(px[1], step / 4.0);
                px[2] = add_sat(px[2], step);
            }
            Self::Failure => px[0] = add_sat(px[0], step),
            Self::ActiveGreen => px[1] = add_sat(px[1], step),
            Self::ActiveGray => {
                for c in px.0.iter_mut().take(3) {
                    *c = add_capped(*c, step, ACTIVE_CEILING);
                }
            }
        }
    }
}

/// Composite accumulated per-status intensities onto `px`.
///
/// Success lands in blue (quartered into red/green), failure in red, active in green.
pub fn composite_layers(px: &mut Rgba<u8>, success: f64, failure: f64, active: f64, step: f64) {
    px[0] = add_sat(px[0], (success / 4.0 + failure) * step);
    px[1] = add_sat(px[1], (success / 4.0 + active) * step);
    px[2] = add_sat(px[2], success * step);
}

/// Shade of red for failure class `layer` out of `layers` classes.
pub fn failure_class_color(layer: usize, layers: usize) -> Rgba<u8> {
    let v = if layers == 0 {
        0.0
    } else {
        layer as f64 * SATURATED / layers as f64
    };
    rgb(
        (127.0 + v / 2.0).min(SATURATED) as u8,
        (11.0 + v * 2.0 / 3.0).min(SATURATED) as u8,
        (11.0 + v * 2.0 / 3.0).min(SATURATED) as u8,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/raster/color.rs"]
mod tests;
