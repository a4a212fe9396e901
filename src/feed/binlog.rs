//! Fixed-width binary event log.
//!
//! Each record is 16 little-endian bytes: `id: i32`, `start: i32`, `run: i32`, `type: u8`,
//! `status: i8`, `region: u8`, `progress: u8`. Files are plain concatenations of records.

use std::fs::File;
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::Event;
use crate::foundation::error::PerspectiveResult;

/// Size of one encoded [`Event`], in bytes.
pub const RECORD_SIZE: usize = 16;

/// Decode one record.
pub fn decode_record(b: &[u8; RECORD_SIZE]) -> Event {
    let word = |i: usize| i32::from_le_bytes([b[i], b[i + 1], b[i + 2], b[i + 3]]);
    Event {
        id: word(0),
        start: word(4),
        run: word(8),
        event_type: b[12],
        status: b[13] as i8,
        region: b[14],
        progress: b[15],
    }
}

/// Encode one record.
pub fn encode_record(e: &Event) -> [u8; RECORD_SIZE] {
    let mut out = [0u8; RECORD_SIZE];
    out[0..4].copy_from_slice(&e.id.to_le_bytes());
    out[4..8].copy_from_slice(&e.start.to_le_bytes());
    out[8..12].copy_from_slice(&e.run.to_le_bytes());
    out[12] = e.event_type;
    out[13] = e.status as u8;
    out[14] = e.region;
    out[15] = e.progress;
    out
}

/// Decode every whole record in `bytes`. Returns the events and the number of trailing bytes
/// that did not form a whole record.
pub fn decode_records(bytes: &[u8]) -> (Vec<Event>, usize) {
    let chunks = bytes.chunks_exact(RECORD_SIZE);
    let trailing = chunks.remainder().len();
    let events = chunks
        .map(|c| {
            let mut rec = [0u8; RECORD_SIZE];
            rec.copy_from_slice(c);
            decode_record(&rec)
        })
        .collect();
    (events, trailing)
}

/// Write `events` in log format; returns the number of records written.
pub fn write_events<'a, W: Write>(
    out: W,
    events: impl IntoIterator<Item = &'a Event>,
) -> PerspectiveResult<u64> {
    let mut out = BufWriter::new(out);
    let mut n = 0u64;
    for e in events {
        out.write_all(&encode_record(e))
            .context("write event record")?;
        n += 1;
    }
    out.flush().context("flush event log")?;
    Ok(n)
}

/// An event log loaded into memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BinLog {
    events: Vec<Event>,
}

impl BinLog {
    /// Decode an in-memory log. A trailing partial record is dropped.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let (events, trailing) = decode_records(bytes);
        if trailing > 0 {
            tracing::warn!(trailing, "ignoring partial record at end of event log");
        }
        Self { events }
    }

    /// Load the log at `path`. With `lookback > 0` only the last `lookback` whole records are
    /// read.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>, lookback: u64) -> PerspectiveResult<Self> {
        let path = path.as_ref();
        let mut f =
            File::open(path).with_context(|| format!("open event log '{}'", path.display()))?;
        let len = f
            .metadata()
            .with_context(|| format!("stat event log '{}'", path.display()))?
            .len();

        let records = len / RECORD_SIZE as u64;
        let first = if lookback > 0 && lookback < records {
            records - lookback
        } else {
            0
        };
        f.seek(SeekFrom::Start(first * RECORD_SIZE as u64))
            .with_context(|| format!("seek in event log '{}'", path.display()))?;

        let mut bytes = Vec::with_capacity((len - first * RECORD_SIZE as u64) as usize);
        f.read_to_end(&mut bytes)
            .with_context(|| format!("read event log '{}'", path.display()))?;

        let log = Self::from_bytes(&bytes);
        tracing::debug!(events = log.len(), first_record = first, "event log loaded");
        Ok(log)
    }

    /// Loaded events, in file order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of loaded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events were loaded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl From<Vec<Event>> for BinLog {
    fn from(events: Vec<Event>) -> Self {
        Self { events }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/feed/binlog.rs"]
mod tests;
