//! CSV export conversion into the binary event log.
//!
//! Input rows are `event_id,event_type,start,run,exit_status,error_reason`. A non-zero exit status
//! is turned into a failure class by matching the error reason against an ordered list of
//! patterns.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context as _;
use csv::{ReaderBuilder, StringRecord, Trim};
use regex::Regex;

use crate::feed::binlog::write_events;
use crate::feed::filter::EventFilter;
use crate::foundation::core::Event;
use crate::foundation::error::{PerspectiveError, PerspectiveResult};

/// Pattern for class 1: an empty error reason.
pub const BLANK_REASON: &str = r"^\s*$";

/// Ordered error-reason patterns; the first match wins.
#[derive(Clone, Debug)]
pub struct ErrorClassifier {
    patterns: Vec<Regex>,
}

impl ErrorClassifier {
    /// Classifier with the blank-reason class followed by `patterns`.
    pub fn new<S: AsRef<str>>(patterns: impl IntoIterator<Item = S>) -> PerspectiveResult<Self> {
        let mut compiled = Vec::new();
        for p in patterns {
            let p = p.as_ref().trim();
            compiled.push(
                Regex::new(p).map_err(|e| {
                    PerspectiveError::feed(format!("invalid error pattern '{p}': {e}"))
                })?,
            );
        }
        Self::from_patterns(compiled)
    }

    /// Classifier that only distinguishes blank reasons from everything else.
    pub fn blank_only() -> PerspectiveResult<Self> {
        Self::from_patterns(Vec::new())
    }

    fn from_patterns(extra: Vec<Regex>) -> PerspectiveResult<Self> {
        let blank = Regex::new(BLANK_REASON).context("compile blank reason pattern")?;
        let patterns: Vec<Regex> = std::iter::once(blank).chain(extra).collect();
        // The "other" class must still fit in a status byte.
        if patterns.len() >= i8::MAX as usize {
            return Err(PerspectiveError::feed(format!(
                "too many error classes ({}), at most {} patterns are representable",
                patterns.len() + 1,
                i8::MAX - 1
            )));
        }
        Ok(Self { patterns })
    }

    /// Parse a classifier config: `|`-delimited records whose first field is a pattern. Later
    /// fields are free-form descriptions. Blank lines are skipped.
    pub fn from_config(text: &str) -> PerspectiveResult<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'|')
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(text.as_bytes());
        let mut patterns = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| feed_error("error class config", &e))?;
            if let Some(p) = record.get(0) {
                patterns.push(p.to_owned());
            }
        }
        Self::new(patterns)
    }

    /// Load a classifier config from `path`.
    pub fn from_config_path(path: impl AsRef<Path>) -> PerspectiveResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read error class config '{}'", path.display()))?;
        Self::from_config(&text)
    }

    /// Number of classes, including the implicit "other" class.
    pub fn classes(&self) -> usize {
        self.patterns.len() + 1
    }

    /// Failure class for `reason`: the 1-based index of the first matching pattern, or one past
    /// the last pattern when none match.
    pub fn classify(&self, reason: &str) -> i8 {
        let idx = self
            .patterns
            .iter()
            .position(|re| re.is_match(reason))
            .unwrap_or(self.patterns.len());
        i8::try_from(idx + 1).unwrap_or(i8::MAX)
    }
}

/// Counts reported by [`convert_csv`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// Rows written to the log.
    pub written: u64,
    /// Rows rejected by the filter.
    pub skipped: u64,
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

fn feed_error(what: &str, e: &csv::Error) -> PerspectiveError {
    match e.position() {
        Some(p) => PerspectiveError::feed(format!("line {}: {what}: {e}", p.line())),
        None => PerspectiveError::feed(format!("{what}: {e}")),
    }
}

/// Turn one CSV record into an event. Errors name the line the record starts on.
pub fn parse_record(
    record: &StringRecord,
    classifier: &ErrorClassifier,
) -> PerspectiveResult<Event> {
    let line = line_of(record);
    if record.len() != 6 {
        return Err(PerspectiveError::feed(format!(
            "line {line}: expected 6 fields, found {}",
            record.len()
        )));
    }

    let int = |i: usize, name: &str| -> PerspectiveResult<i64> {
        let raw = &record[i];
        raw.trim()
            .parse()
            .map_err(|_| PerspectiveError::feed(format!("line {line}: bad {name} '{raw}'")))
    };
    let narrow = |v: i64, name: &str| {
        PerspectiveError::feed(format!("line {line}: {name} {v} out of range"))
    };

    let id = int(0, "event id")?;
    let event_type = int(1, "event type")?;
    let start = int(2, "start time")?;
    let run = int(3, "run time")?;
    let status = if int(4, "exit status")? == 0 {
        0
    } else {
        classifier.classify(&record[5])
    };
    Ok(Event {
        id: i32::try_from(id).map_err(|_| narrow(id, "event id"))?,
        event_type: u8::try_from(event_type).map_err(|_| narrow(event_type, "event type"))?,
        start: i32::try_from(start).map_err(|_| narrow(start, "start time"))?,
        run: i32::try_from(run).map_err(|_| narrow(run, "run time"))?,
        status,
        region: 0,
        progress: 0,
    })
}

/// Convert CSV rows from `input` into binary log records on `output`, keeping rows accepted by
/// `filter`. Quoted fields may span lines; blank lines are ignored.
#[tracing::instrument(skip_all)]
pub fn convert_csv<R: Read, W: Write>(
    input: R,
    output: W,
    filter: &EventFilter,
    classifier: &ErrorClassifier,
) -> PerspectiveResult<ConvertStats> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut events = Vec::new();
    let mut stats = ConvertStats::default();
    let mut record = StringRecord::new();
    loop {
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => return Err(feed_error("read csv", &e)),
        }
        let e = parse_record(&record, classifier)?;
        if filter.accepts(&e) {
            events.push(e);
        } else {
            stats.skipped += 1;
        }
    }
    stats.written = write_events(output, &events)?;
    tracing::debug!(written = stats.written, skipped = stats.skipped, "csv converted");
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/feed/csv.rs"]
mod tests;
