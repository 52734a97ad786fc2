//! Error types for the kanban-md-protocol crate.
//!
//! Encoding a well-typed document never fails in practice; the variants
//! here surface the underlying `serde_json` error should it ever happen, and
//! reject unknown tags when an enumeration is built from text.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Failed to serialize a protocol type to JSON.
    #[error("failed to serialize to JSON: {0}")]
    SerializationFailed(#[source] serde_json::Error),

    /// A tag did not name any variant of a closed enumeration.
    #[error("unknown {kind} {value:?}, expected one of: {expected}")]
    UnknownVariant {
        /// The enumeration being parsed (e.g. "column state").
        kind: &'static str,
        /// The rejected input.
        value: String,
        /// Comma separated list of accepted tags.
        expected: String,
    },
}

impl ProtocolError {
    /// Builds an [`ProtocolError::UnknownVariant`] listing the accepted tags.
    pub(crate) fn unknown_variant(kind: &'static str, value: &str, expected: &[&str]) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
