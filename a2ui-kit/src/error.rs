//! Error types
//!
//! Almost every bad input is absorbed locally (dangling references,
//! unresolvable bindings, unknown component types, unknown surface ids).
//! Only gross structural invalidity of a message batch propagates: the
//! producer is an imperfect generator, but "an array of recognizable
//! messages" is the minimum bar.

use thiserror::Error;

/// Result type alias for interpreter operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Errors surfaced by batch ingestion.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The batch was not parseable as an array of protocol messages, even
    /// after repair.
    #[error("unprocessable message batch: {0}")]
    Malformed(#[source] serde_json::Error),

    /// A batch element carried none of the recognized operations. The whole
    /// batch is rejected before anything is applied.
    #[error("message {index} carries no recognized operation")]
    UnknownMessageKind { index: usize },
}

/// Errors surfaced by a [`crate::host::UiHost`] turn.
#[derive(Debug, Error)]
pub enum HostError {
    /// The message source failed to produce a batch.
    #[error("message source failed: {0}")]
    Source(String),

    /// The fetched batch was unprocessable.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}
