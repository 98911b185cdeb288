//! Type wrappers for document keys and field projections
//!
//! # Types
//!
//! - **`DocumentKey`**: Wrapper for a document id used as a sled key
//! - **`DocumentField`**: Field selector for projected queries
//!
//! Keys are the raw UTF-8 bytes of the id, so sled's lexicographic key order
//! is the natural order of the collection. Imported ids are zero-padded to
//! [`ID_WIDTH`] digits, which makes that order match the import order.
//!
//! # Examples
//!
//! ```
//! use nautilus::db::types::{document_id, DocumentKey};
//!
//! let key = DocumentKey::new(document_id(42));
//! assert_eq!(key.as_str(), "00042");
//! assert_eq!(key.as_bytes(), b"00042");
//! ```

use super::error::DbError;
use crate::Document;

/// Number of digits of a generated document id
pub const ID_WIDTH: usize = 5;

/// Format a numeric index the way stored document ids are formatted
#[must_use]
pub fn document_id(index: usize) -> String {
    format!("{index:0width$}", width = ID_WIDTH)
}

/// Wrapper for a document id that can be used as a database key
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DocumentKey(String);

impl DocumentKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// # Errors
    ///
    /// Returns `DbError` if the bytes are not valid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DbError> {
        std::str::from_utf8(bytes)
            .map(|s| Self(s.to_string()))
            .map_err(|_| DbError::InvalidInput("Invalid UTF-8 in document key".into()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<[u8]> for DocumentKey {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<&Document> for DocumentKey {
    fn from(document: &Document) -> Self {
        Self(document.id.clone())
    }
}

/// Document field selector for projected queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentField {
    Id,
    Title,
    Author,
    Description,
    Files,
}

impl DocumentField {
    /// Every field, i.e. no projection
    pub const ALL: [Self; 5] = [
        Self::Id,
        Self::Title,
        Self::Author,
        Self::Description,
        Self::Files,
    ];

    /// Keep only the selected fields of a document, leaving the others empty
    #[must_use]
    pub fn project(document: Document, fields: &[Self]) -> Document {
        let keep = |field: Self| fields.contains(&field);
        Document {
            id: if keep(Self::Id) { document.id } else { String::new() },
            title: if keep(Self::Title) { document.title } else { String::new() },
            author: if keep(Self::Author) { document.author } else { String::new() },
            description: if keep(Self::Description) {
                document.description
            } else {
                String::new()
            },
            files: if keep(Self::Files) { document.files } else { Vec::new() },
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
