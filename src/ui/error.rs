//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error while writing to the surface
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The surface cannot display the requested content
    #[error("Cannot display: {0}")]
    DisplayError(String),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
