//! Error types for slashart core

use thiserror::Error;

/// Result type for slashart core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types
///
/// Rendering and validation are infallible; these cover exporting.
#[derive(Error, Debug)]
pub enum CoreError {
    /// I/O error while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
