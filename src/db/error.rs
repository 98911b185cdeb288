//! Database-specific error types
//!
//! This module defines all error types that can occur during document store
//! operations and collection imports.
//!
//! # Error Types
//!
//! - **`SledError`**: Errors from the underlying sled embedded database
//! - **`DecodeError`**: Failures when deserializing documents from the database
//! - **`EncodeError`**: Failures when serializing documents to the database
//! - **`JsonError`**: Malformed collection files
//! - **`InvalidCollection`**: Collection entries that cannot be imported

use thiserror::Error;

/// Database-specific errors
#[derive(Debug, Error)]
pub enum DbError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// Represents a bincode decoding error
    #[error("Error while decoding data: {0}")]
    DecodeError(#[from] bincode::error::DecodeError),

    /// Represents a bincode encoding error
    #[error("Error while encoding data: {0}")]
    EncodeError(#[from] bincode::error::EncodeError),

    /// Collection file could not be parsed
    #[error("Error while parsing collection: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Collection file could not be read
    #[error("Error while reading collection: {0}")]
    IoError(#[from] std::io::Error),

    /// Collection content is not importable
    #[error("Invalid collection: {0}")]
    InvalidCollection(String),

    /// Invalid input provided (e.g., a key that is not valid UTF-8)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
