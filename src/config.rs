//! Visualization parameters.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context as _;

use crate::foundation::core::TimeRange;
use crate::foundation::error::{PerspectiveError, PerspectiveResult};
use crate::transform::non_linear::LogScale;
use crate::vis::{Geometry, VisKind};

/// Everything needed to construct any [`crate::Visualization`].
///
/// Missing fields take the command-line defaults: a 256×128 canvas on gray 32, the time range
/// from the epoch to now, 16 pixels per run-time doubling, one hit to saturation, resonance 0.85,
/// and a polar period covering the whole time range.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisParams {
    /// Canvas width, in pixels.
    pub width: u32,
    /// Canvas height, in pixels.
    pub height: u32,
    /// Background gray level.
    pub background: u8,
    /// Lower limit of the time range, in seconds since the epoch.
    pub min_time: i64,
    /// Upper limit of the time range, in seconds since the epoch.
    pub max_time: i64,
    /// Number of vertical grid divisions (0 for none).
    pub x_grid: u32,
    /// Pixels per doubling of run time.
    pub run_time_scale: f64,
    /// Identical hits needed to saturate a channel.
    pub color_steps: f64,
    /// Per-column decay of the smoothing window, in `(0, 1)`.
    pub resonance: f64,
    /// Any instant that should sit at twelve o'clock on polar plots.
    pub period_start: i64,
    /// Polar period, in seconds; the whole time range when absent.
    pub period_length: Option<i64>,
    /// Jitter seed; fresh entropy when absent.
    pub seed: Option<u64>,
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

impl Default for VisParams {
    fn default() -> Self {
        let now = unix_now();
        Self {
            width: 256,
            height: 128,
            background: 32,
            min_time: 0,
            max_time: now,
            x_grid: 0,
            run_time_scale: 16.0,
            color_steps: 1.0,
            resonance: 0.85,
            period_start: now,
            period_length: None,
            seed: None,
        }
    }
}

impl VisParams {
    /// Parse parameters from JSON text.
    pub fn from_json_str(s: &str) -> PerspectiveResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| PerspectiveError::serde(format!("parse parameters JSON: {e}")))
    }

    /// Parse parameters from a JSON file on disk.
    pub fn from_json_path(path: impl AsRef<Path>) -> PerspectiveResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read parameters '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// The configured time range.
    pub fn time_range(&self) -> PerspectiveResult<TimeRange> {
        TimeRange::new(self.min_time, self.max_time)
    }

    /// Canvas geometry.
    pub fn geometry(&self) -> PerspectiveResult<Geometry> {
        Geometry::new(self.width, self.height, self.background, self.time_range()?)
    }

    /// Run-time axis scale.
    pub fn log_scale(&self) -> LogScale {
        LogScale::new(self.run_time_scale)
    }

    /// Check everything `kind` depends on.
    pub fn validate_for(&self, kind: VisKind) -> PerspectiveResult<()> {
        self.geometry()?;
        if !self.color_steps.is_finite() || self.color_steps <= 0.0 {
            return Err(PerspectiveError::validation(format!(
                "color_steps must be positive, got {}",
                self.color_steps
            )));
        }
        if !self.run_time_scale.is_finite() || self.run_time_scale <= 0.0 {
            return Err(PerspectiveError::validation(format!(
                "run_time_scale must be positive, got {}",
                self.run_time_scale
            )));
        }
        if kind.uses_resonance() && !(self.resonance > 0.0 && self.resonance < 1.0) {
            return Err(PerspectiveError::validation(format!(
                "resonance must lie in (0, 1), got {}",
                self.resonance
            )));
        }
        if kind.is_polar()
            && let Some(p) = self.period_length
            && p <= 0
        {
            return Err(PerspectiveError::validation(format!(
                "period_length must be positive, got {p}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
