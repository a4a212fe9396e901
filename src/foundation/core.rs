use crate::foundation::error::{PerspectiveError, PerspectiveResult};

/// A single timestamped event, as read from an event feed.
///
/// Times are whole seconds. `run` may be zero or negative on feeds with clock skew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    /// Opaque event identifier.
    pub id: i32,
    /// Start time, in seconds since the Unix epoch.
    pub start: i32,
    /// Run time, in seconds.
    pub run: i32,
    /// Event type annotation (filtering only).
    pub event_type: u8,
    /// `0` for success, `>0` for a failure class, `<0` for in-progress.
    pub status: i8,
    /// Region annotation (filtering only), `0` if undefined.
    pub region: u8,
    /// Progress percentage annotation (filtering only).
    pub progress: u8,
}

/// Completion status of an [`Event`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Completed successfully.
    Success,
    /// Failed, carrying the failure class code (always `>= 1`).
    Failure(u8),
    /// Still running.
    Active,
}

impl Event {
    /// Build an event carrying only the fields the renderers look at.
    pub fn new(start: i32, run: i32, status: i8) -> Self {
        Self {
            start,
            run,
            status,
            ..Self::default()
        }
    }

    /// Classify the status code.
    pub fn outcome(&self) -> Outcome {
        match self.status {
            0 => Outcome::Success,
            s if s > 0 => Outcome::Failure(s as u8),
            _ => Outcome::Active,
        }
    }

    /// Time at which the event finished (or will finish).
    pub fn end(&self) -> i64 {
        i64::from(self.start) + i64::from(self.run)
    }

    /// Run time floored at one second, for logarithmic projections.
    pub fn run_floored(&self) -> f64 {
        f64::from(self.run.max(1))
    }
}

/// Half-open span of absolute time `[start, end)` mapped onto the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimeRange {
    /// Lower limit, in seconds since the Unix epoch.
    pub start: i64,
    /// Upper limit (exclusive), in seconds since the Unix epoch.
    pub end: i64,
}

impl TimeRange {
    /// Build a time range, rejecting empty or inverted spans.
    pub fn new(start: i64, end: i64) -> PerspectiveResult<Self> {
        if end <= start {
            return Err(PerspectiveError::validation(format!(
                "time range end ({end}) must be greater than start ({start})"
            )));
        }
        Ok(Self { start, end })
    }

    /// Length of the range in seconds (always > 0 for a validated range).
    pub fn span(self) -> i64 {
        self.end - self.start
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
