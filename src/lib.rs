//! Nautilus - browse an offline document collection
//!
//! This library lists documents from an embedded collection (randomly sampled
//! or sequentially paginated), runs free-text search over titles and authors,
//! resolves attachments into playable media or downloadable files, and keeps
//! the whole browsing position in a short token suitable for a URL fragment.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod browse;
pub mod classify;
pub mod cli;
pub mod commands;
pub mod completions;
pub mod config;
pub mod db;
pub mod ident;
pub mod retrieval;
pub mod rows;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum NautilusError {
    /// Database error
    #[error("Database error: {0}")]
    DbError(#[from] db::DbError),
    /// Browse session error
    #[error("Browse error: {0}")]
    BrowseError(#[from] browse::BrowseError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A document of the collection: metadata plus its ordered attachments
///
/// The order of `files` is the track order used by the media player.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub files: Vec<String>,
}

impl Document {
    /// Create a new Document
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, files: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            files,
            ..Self::default()
        }
    }

    /// Set the author
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether the document has more than one attachment
    #[must_use]
    pub fn is_multiple(&self) -> bool {
        self.files.len() > 1
    }
}
