//! Protocol error types.

use thiserror::Error;

/// Errors from wire encoding and decoding.
#[derive(Debug, Error)]
pub enum ProtoError {
    /// Outbound message could not be serialized.
    #[error("encode failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// Inbound line was not valid JSON.
    #[error("decode failed: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Result alias for protocol operations.
pub type Result<T> = std::result::Result<T, ProtoError>;
