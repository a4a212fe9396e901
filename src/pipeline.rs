use std::path::Path;

use anyhow::Context as _;
use image::RgbaImage;

use crate::{
    config::VisParams,
    feed::{binlog::BinLog, filter::EventFilter},
    foundation::{core::Event, error::PerspectiveResult},
    vis::{VisKind, Visualization},
};

/// Counts reported by [`feed_events`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Events passed to the accumulator.
    pub recorded: u64,
    /// Events rejected by the filter.
    pub skipped: u64,
    /// Accepted events that started before their predecessor.
    pub out_of_order: u64,
}

/// Fold every event accepted by `filter` into `vis`, in order.
///
/// Start times that go backwards are counted; when `kind` depends on ordered input a warning is
/// logged, since the picture degrades with the amount of disorder.
pub fn feed_events<'a>(
    vis: &mut Visualization,
    kind: VisKind,
    events: impl IntoIterator<Item = &'a Event>,
    filter: &EventFilter,
) -> RenderStats {
    let mut stats = RenderStats::default();
    let mut last_start = i32::MIN;
    for e in events {
        if !filter.accepts(e) {
            stats.skipped += 1;
            continue;
        }
        if e.start < last_start {
            stats.out_of_order += 1;
        }
        last_start = last_start.max(e.start);
        vis.record(e);
        stats.recorded += 1;
    }
    if stats.out_of_order > 0 && kind.needs_ordered_input() {
        tracing::warn!(
            ?kind,
            out_of_order = stats.out_of_order,
            "input is not sorted by start time; output will be degraded"
        );
    }
    stats
}

/// Build a `kind` accumulator from `params`, feed it `events` and render it.
///
/// The filter's time window is narrowed to the parameters' time range, so nothing off the
/// horizontal axis reaches the accumulator.
#[tracing::instrument(skip(events, params, filter))]
pub fn render_events<'a>(
    kind: VisKind,
    params: &VisParams,
    events: impl IntoIterator<Item = &'a Event>,
    filter: &EventFilter,
) -> PerspectiveResult<(RgbaImage, RenderStats)> {
    let mut vis = Visualization::new(kind, params)?;
    let filter = EventFilter {
        min_time: filter.min_time.max(params.min_time),
        max_time: filter.max_time.min(params.max_time),
        ..*filter
    };
    let stats = feed_events(&mut vis, kind, events, &filter);
    tracing::debug!(
        recorded = stats.recorded,
        skipped = stats.skipped,
        "events recorded"
    );
    Ok((vis.render(), stats))
}

/// Encode `img` as PNG at `path`, creating parent directories.
pub fn write_png(img: &RgbaImage, path: impl AsRef<Path>) -> PerspectiveResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Load a binary event log, render it and write the PNG.
///
/// `lookback` limits the scan to the last that many records (0 for all).
#[tracing::instrument(skip(params, filter, in_path, out_path))]
pub fn render_binlog_to_png(
    kind: VisKind,
    params: &VisParams,
    filter: &EventFilter,
    in_path: impl AsRef<Path>,
    lookback: u64,
    out_path: impl AsRef<Path>,
) -> PerspectiveResult<RenderStats> {
    let log = BinLog::open(in_path, lookback)?;
    let (img, stats) = render_events(kind, params, log.events(), filter)?;
    write_png(&img, out_path)?;
    Ok(stats)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
