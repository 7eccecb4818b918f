//! Error types for the Brokode codec.
//!
//! `encode` and `decode` never fail; these errors surface only from the
//! strict parsing API and from I/O around the codec.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the Brokode crates.
#[derive(Error, Debug)]
pub enum CodecError {
    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Token whose numeric part names no base letter
    #[error("Unknown token: {0}")]
    UnknownToken(String),

    /// Modifier tag outside `kw, km, s, hh, hr, dx, nn`
    #[error("Unknown modifier tag: {0}")]
    UnknownTag(String),

    /// Line without a `C(...)` envelope
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
