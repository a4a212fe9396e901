//! Event selection applied by the ingestion layer before events reach an accumulator.

use crate::foundation::core::{Event, Outcome};

/// Status mask bit selecting completed events.
pub const STATUS_DONE: i32 = 4;
/// Status mask bit selecting failed events.
pub const STATUS_FAILED: i32 = 2;
/// Status mask bit selecting in-progress events.
pub const STATUS_RUNNING: i32 = 1;

/// Time window, annotation and status selection for a feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventFilter {
    /// Exclusive lower bound on start time.
    pub min_time: i64,
    /// Exclusive upper bound on start time.
    pub max_time: i64,
    /// Only this event type, when set.
    pub event_type: Option<u8>,
    /// Only this region, when set.
    pub region: Option<u8>,
    /// Bitwise OR of `STATUS_*` values. Negative values select everything.
    pub status_mask: i32,
}

impl Default for EventFilter {
    fn default() -> Self {
        Self {
            min_time: i64::MIN,
            max_time: i64::MAX,
            event_type: None,
            region: None,
            status_mask: -1,
        }
    }
}

impl EventFilter {
    /// Filter admitting every status started strictly inside `(min_time, max_time)`.
    pub fn window(min_time: i64, max_time: i64) -> Self {
        Self {
            min_time,
            max_time,
            ..Self::default()
        }
    }

    /// Same filter with a different status mask.
    pub fn with_status_mask(self, status_mask: i32) -> Self {
        Self {
            status_mask,
            ..self
        }
    }

    #[inline]
    /// Whether `e` passes every criterion.
    pub fn accepts(&self, e: &Event) -> bool {
        let start = i64::from(e.start);
        if start <= self.min_time || start >= self.max_time {
            return false;
        }
        if self.event_type.is_some_and(|t| t != e.event_type) {
            return false;
        }
        if self.region.is_some_and(|r| r != e.region) {
            return false;
        }
        let bit = match e.outcome() {
            Outcome::Success => STATUS_DONE,
            Outcome::Failure(_) => STATUS_FAILED,
            Outcome::Active => STATUS_RUNNING,
        };
        self.status_mask & bit != 0
    }
}

/// Percentage of successes among completed events accepted by `filter`, ignoring its status
/// mask. `None` when no completed event qualifies.
pub fn success_rate<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    filter: &EventFilter,
) -> Option<f64> {
    let done = filter.with_status_mask(STATUS_DONE);
    let completed = filter.with_status_mask(STATUS_DONE | STATUS_FAILED);
    let (mut pass, mut total) = (0u64, 0u64);
    for e in events {
        if done.accepts(e) {
            pass += 1;
        }
        if completed.accepts(e) {
            total += 1;
        }
    }
    (total > 0).then(|| 100.0 * pass as f64 / total as f64)
}

#[cfg(test)]
#[path = "../../tests/unit/feed/filter.rs"]
mod tests;
