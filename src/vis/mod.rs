//! Event accumulators ("visualizations").
//!
//! Every accumulator follows the same two-phase contract: `record` folds one event into private
//! state and never fails (points that project off the canvas are dropped), and `render` produces
//! an image of the configured size without mutating that state. [`Visualization`] is the closed
//! set of accumulators behind a single `record`/`render` pair.

use image::RgbaImage;

use crate::config::VisParams;
use crate::foundation::core::{Event, TimeRange};
use crate::foundation::error::{PerspectiveError, PerspectiveResult};
use crate::raster::canvas::Canvas;
use crate::transform::jitter::Jitter;
use crate::transform::linear::TimeAxis;
use crate::transform::polar::PolarProjection;

/// Smoothed count lines.
pub mod count_lines;
/// Run-time histogram.
pub mod histogram;
/// Weighted percentile bands.
pub mod median_lines;
/// Status-mix gradient.
pub mod ribbon;
/// Mean run-time line.
pub mod run_time_line;
/// Hard-pixel scatter plots.
pub mod scatter;
/// Decay windows.
pub mod smoothing;
/// Status and error stacks.
pub mod stack;
/// Bloom scatter plots.
pub mod starfield;
/// Elapsed-time arcs.
pub mod sweep;
/// Recency-window strips.
pub mod wave;

pub use count_lines::CountLines;
pub use histogram::Histogram;
pub use median_lines::MedianLines;
pub use ribbon::Ribbon;
pub use run_time_line::RunTimeLine;
pub use scatter::{PolarScatter, Scatter};
pub use stack::{ErrorStack, RollingStack, StatusStack};
pub use starfield::{PolarStarfield, Starfield};
pub use sweep::Sweep;
pub use wave::Wave;

/// Canvas size, background and time range shared by every accumulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    /// Canvas width, in pixels (> 0).
    pub width: u32,
    /// Canvas height, in pixels (> 0).
    pub height: u32,
    /// Background gray level.
    pub bg: u8,
    /// Time range mapped onto the horizontal axis.
    pub range: TimeRange,
}

impl Geometry {
    /// Validate and build a geometry.
    pub fn new(width: u32, height: u32, bg: u8, range: TimeRange) -> PerspectiveResult<Self> {
        if width == 0 || height == 0 {
            return Err(PerspectiveError::validation(format!(
                "canvas must be at least 1x1, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            bg,
            range,
        })
    }

    /// Fresh background-filled canvas.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height, self.bg)
    }

    /// Linear time axis over the canvas width.
    pub fn axis(&self) -> TimeAxis {
        TimeAxis::new(self.range, self.width)
    }

    pub(crate) fn w(&self) -> i64 {
        i64::from(self.width)
    }

    pub(crate) fn h(&self) -> i64 {
        i64::from(self.height)
    }
}

/// Visualization kind tag, as named on the command line and in parameter files.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum VisKind {
    /// Start time against log2 run time, one pixel per event.
    Scatter,
    /// [`VisKind::Scatter`] with bloom.
    Starfield,
    /// Periodic phase against log2 run-time radius.
    PolarScatter,
    /// [`VisKind::PolarScatter`] with bloom.
    PolarStarfield,
    /// Elapsed-time arcs.
    #[value(alias = "arc")]
    #[serde(alias = "arc")]
    Sweep,
    /// Recency-window strips in arrival order.
    Wave,
    /// Recency-window strips sorted by intensity.
    WaveSorted,
    /// Share of each completed status.
    StatusStack,
    /// Share of each failure class.
    ErrorStack,
    /// Status stack per column.
    RollingStack,
    /// Run-time distribution.
    Histogram,
    /// Status-mix gradient per column.
    Ribbon,
    /// Mean run time per column.
    RunTimeLine,
    /// Smoothed success and failure counts.
    CountLines,
    /// Smoothed run-time percentile bands.
    MedianLines,
}

impl VisKind {
    /// Every kind, in declaration order.
    pub const ALL: [VisKind; 15] = [
        Self::Scatter,
        Self::Starfield,
        Self::PolarScatter,
        Self::PolarStarfield,
        Self::Sweep,
        Self::Wave,
        Self::WaveSorted,
        Self::StatusStack,
        Self::ErrorStack,
        Self::RollingStack,
        Self::Histogram,
        Self::Ribbon,
        Self::RunTimeLine,
        Self::CountLines,
        Self::MedianLines,
    ];

    /// Whether the kind smooths over a resonance-driven decay window.
    pub fn uses_resonance(self) -> bool {
        matches!(self, Self::CountLines | Self::MedianLines)
    }

    /// Whether the kind draws on a polar projection.
    pub fn is_polar(self) -> bool {
        matches!(self, Self::PolarScatter | Self::PolarStarfield)
    }

    /// Whether input must be sorted by start time for a faithful picture.
    pub fn needs_ordered_input(self) -> bool {
        matches!(self, Self::Wave | Self::WaveSorted)
    }
}

/// One accumulator of any kind.
#[derive(Clone, Debug)]
pub enum Visualization {
    /// See [`Scatter`].
    Scatter(Scatter),
    /// See [`Starfield`].
    Starfield(Starfield),
    /// See [`PolarScatter`].
    PolarScatter(PolarScatter),
    /// See [`PolarStarfield`].
    PolarStarfield(PolarStarfield),
    /// See [`Sweep`].
    Sweep(Sweep),
    /// See [`Wave`].
    Wave(Wave),
    /// See [`StatusStack`].
    StatusStack(StatusStack),
    /// See [`ErrorStack`].
    ErrorStack(ErrorStack),
    /// See [`RollingStack`].
    RollingStack(RollingStack),
    /// See [`Histogram`].
    Histogram(Histogram),
    /// See [`Ribbon`].
    Ribbon(Ribbon),
    /// See [`RunTimeLine`].
    RunTimeLine(RunTimeLine),
    /// See [`CountLines`].
    CountLines(CountLines),
    /// See [`MedianLines`].
    MedianLines(MedianLines),
}

impl Visualization {
    /// Build an accumulator of `kind`, rejecting parameters it cannot work with.
    #[tracing::instrument(skip(params), fields(width = params.width, height = params.height))]
    pub fn new(kind: VisKind, params: &VisParams) -> PerspectiveResult<Self> {
        params.validate_for(kind)?;
        let geometry = params.geometry()?;
        let scale = params.log_scale();
        let (steps, x_grid) = (params.color_steps, params.x_grid);
        let jitter = || Jitter::new(params.seed);
        let polar = || {
            PolarProjection::new(
                geometry.width,
                geometry.height,
                geometry.range,
                params.period_start,
                params.period_length,
                scale,
            )
        };

        let vis = match kind {
            VisKind::Scatter => Self::Scatter(Scatter::new(geometry, scale, steps, x_grid)),
            VisKind::Starfield => Self::Starfield(Starfield::new(geometry, scale, steps, x_grid)),
            VisKind::PolarScatter => {
                Self::PolarScatter(PolarScatter::new(geometry, polar(), steps, jitter()))
            }
            VisKind::PolarStarfield => {
                Self::PolarStarfield(PolarStarfield::new(geometry, polar(), steps, jitter()))
            }
            VisKind::Sweep => Self::Sweep(Sweep::new(geometry, scale, steps, x_grid)),
            VisKind::Wave => Self::Wave(Wave::new(geometry, false)),
            VisKind::WaveSorted => Self::Wave(Wave::new(geometry, true)),
            VisKind::StatusStack => Self::StatusStack(StatusStack::new(geometry)),
            VisKind::ErrorStack => Self::ErrorStack(ErrorStack::new(geometry)),
            VisKind::RollingStack => Self::RollingStack(RollingStack::new(geometry)),
            VisKind::Histogram => Self::Histogram(Histogram::new(geometry, scale)),
            VisKind::Ribbon => Self::Ribbon(Ribbon::new(geometry)),
            VisKind::RunTimeLine => Self::RunTimeLine(RunTimeLine::new(geometry, scale, x_grid)),
            VisKind::CountLines => {
                Self::CountLines(CountLines::new(geometry, params.resonance, x_grid))
            }
            VisKind::MedianLines => Self::MedianLines(MedianLines::new(
                geometry,
                scale,
                params.resonance,
                x_grid,
                jitter(),
            )),
        };
        tracing::debug!(?kind, "visualization ready");
        Ok(vis)
    }

    /// Fold one event into the accumulator.
    pub fn record(&mut self, e: &Event) {
        match self {
            Self::Scatter(v) => v.record(e),
            Self::Starfield(v) => v.record(e),
            Self::PolarScatter(v) => v.record(e),
            Self::PolarStarfield(v) => v.record(e),
            Self::Sweep(v) => v.record(e),
            Self::Wave(v) => v.record(e),
            Self::StatusStack(v) => v.record(e),
            Self::ErrorStack(v) => v.record(e),
            Self::RollingStack(v) => v.record(e),
            Self::Histogram(v) => v.record(e),
            Self::Ribbon(v) => v.record(e),
            Self::RunTimeLine(v) => v.record(e),
            Self::CountLines(v) => v.record(e),
            Self::MedianLines(v) => v.record(e),
        }
    }

    /// Produce the image from everything recorded so far. Repeatable.
    pub fn render(&self) -> RgbaImage {
        match self {
            Self::Scatter(v) => v.render(),
            Self::Starfield(v) => v.render(),
            Self::PolarScatter(v) => v.render(),
            Self::PolarStarfield(v) => v.render(),
            Self::Sweep(v) => v.render(),
            Self::Wave(v) => v.render(),
            Self::StatusStack(v) => v.render(),
            Self::ErrorStack(v) => v.render(),
            Self::RollingStack(v) => v.render(),
            Self::Histogram(v) => v.render(),
            Self::Ribbon(v) => v.render(),
            Self::RunTimeLine(v) => v.render(),
            Self::CountLines(v) => v.render(),
            Self::MedianLines(v) => v.render(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/vis/mod.rs"]
mod tests;
