//! Browse session errors

use thiserror::Error;

/// Errors that can occur while setting up or driving a browse session
#[derive(Debug, Error)]
pub enum BrowseError {
    /// The surface failed to display something
    #[error("UI error: {0}")]
    Ui(#[from] crate::ui::UiError),

    /// Settings that cannot drive a session
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Browse session result type
pub type Result<T> = std::result::Result<T, BrowseError>;
