//! Perspective renders raster visualizations of large streams of timestamped events, for
//! auditing the health and latency of event-driven systems.
//!
//! Each event carries a start time, a run time and a completion status. A [`Visualization`]
//! accumulates events one at a time and renders a fixed-size image:
//!
//! - Load events from a binary log ([`BinLog`]) or convert them from CSV ([`feed::csv`])
//! - Select them with an [`EventFilter`]
//! - Record them into a [`Visualization`] built from [`VisParams`], then render
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Config surface for building accumulators.
pub mod config;
/// Event ingestion collaborators.
pub mod feed;
mod foundation;
/// Feed-to-image driver.
pub mod pipeline;
/// Pixel buffers and color rules.
pub mod raster;
/// Coordinate projections.
pub mod transform;
/// Accumulators.
pub mod vis;

pub use crate::config::VisParams;
pub use crate::feed::{BinLog, EventFilter};
pub use crate::foundation::core::{Event, Outcome, TimeRange};
pub use crate::foundation::error::{PerspectiveError, PerspectiveResult};
pub use crate::pipeline::{RenderStats, render_binlog_to_png, render_events, write_png};
pub use crate::vis::{Geometry, VisKind, Visualization};
