/// Convenience result type used across Perspective.
pub type PerspectiveResult<T> = Result<T, PerspectiveError>;

/// Top-level error taxonomy used by construction, ingestion and output APIs.
///
/// Recording events never fails; out-of-range data points are dropped where they land.
#[derive(thiserror::Error, Debug)]
pub enum PerspectiveError {
    /// Invalid caller-provided geometry or parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed event feed data (binary log, CSV rows, classifier config).
    #[error("feed error: {0}")]
    Feed(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PerspectiveError {
    /// Build a [`PerspectiveError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PerspectiveError::Feed`] value.
    pub fn feed(msg: impl Into<String>) -> Self {
        Self::Feed(msg.into())
    }

    /// Build a [`PerspectiveError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
