//! Error types for mapscope.

use thiserror::Error;

/// The main error type for mapscope operations.
#[derive(Error, Debug)]
pub enum MapscopeError {
    /// A plot object carried a type string outside the closed set.
    #[error("plot object type '{0}' not recognised")]
    UnrecognizedType(String),

    /// The length of a plot object's ID list does not match its leaf count.
    #[error("ID count mismatch: expected {expected}, got {actual}")]
    IdCountMismatch { expected: usize, actual: usize },

    /// A group reference points outside the element list.
    #[error("group index {index} out of range for {len} elements")]
    GroupIndexOutOfRange { index: usize, len: usize },

    /// A face or corner placement code could not be decoded.
    #[error("decoration code '{0}' not recognised")]
    DecorationCode(String),

    /// A named clipping plane was referenced but never registered.
    #[error("clipping plane '{0}' not found")]
    ClipPlaneNotFound(String),

    /// Bootstrap data does not line up with the map's points.
    #[error("bootstrap data size mismatch: expected {expected}, got {actual}")]
    BootstrapSizeMismatch { expected: usize, actual: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for mapscope operations.
pub type Result<T> = std::result::Result<T, MapscopeError>;
