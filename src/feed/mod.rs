//! Event ingestion: binary logs, CSV conversion and filtering.

pub mod binlog;
pub mod csv;
pub mod filter;

pub use binlog::BinLog;
pub use self::csv::{ConvertStats, ErrorClassifier, convert_csv};
pub use filter::{EventFilter, success_rate};
