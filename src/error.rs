//! Error types for roster operations.

use thiserror::Error;

/// Errors that can occur while fetching, decoding or presenting profile data.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The fetch did not produce a JSON value.
    ///
    /// Transport failures, unreadable bodies and non-JSON bodies are all
    /// flattened into this one kind; the message carries the underlying
    /// description.
    #[error("fetch failed: {message}")]
    FetchFailed { message: String },

    /// A fetched payload did not have the shape the caller asked for.
    #[error("payload does not match {shape}: {source}")]
    ShapeMismatch {
        shape: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration from the environment is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No route matches the requested path.
    #[error("no route matches '{0}'")]
    UnknownRoute(String),

    /// A record index past the end of the envelope.
    #[error("record {index} out of range ({len} records)")]
    RecordOutOfRange { index: usize, len: usize },

    /// Output serialization failed.
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// Result type alias for roster operations.
pub type Result<T> = core::result::Result<T, RosterError>;
