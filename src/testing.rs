//! Testing utilities for nautilus
//!
//! This module provides helper types and functions for writing tests,
//! including a `TestDb` wrapper for temporary database management and a
//! store that always fails.
//!
//! Only available when compiled with `cfg(test)`.

use crate::Document;
use crate::db::types::document_id;
use crate::db::{Database, DbError, DocumentField, DocumentFilter, DocumentStore};
use std::path::Path;
use tempfile::TempDir;

/// Wrapper for a temporary test database that cleans up on drop
///
/// The database lives in its own temporary directory, which is removed when
/// the wrapper goes out of scope.
pub struct TestDb {
    // Declared before `dir` so sled is closed before the directory is removed
    db: Database,
    dir: TempDir,
}

impl TestDb {
    /// Create an empty test database
    ///
    /// # Panics
    /// Panics if the temporary directory or the database cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temporary directory");
        let db = Database::open(dir.path().join("db")).expect("Failed to open test database");
        Self { db, dir }
    }

    /// Create a test database pre-loaded with documents
    ///
    /// # Panics
    /// Panics if the documents cannot be loaded.
    #[must_use]
    pub fn with_documents(documents: &[Document]) -> Self {
        let test_db = Self::new();
        test_db
            .db
            .bulk_load(documents)
            .expect("Failed to load test documents");
        test_db
    }

    /// Get a reference to the underlying database
    #[must_use]
    pub const fn db(&self) -> &Database {
        &self.db
    }

    /// Get the path to the temporary directory
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestDb {
    fn default() -> Self {
        Self::new()
    }
}

/// Build `count` documents with zero-padded ids
///
/// Attachments cycle through a single audio file, a single PDF and a pair of
/// audio tracks. Authors alternate between "Ann" (even index) and "Bob".
#[must_use]
pub fn sample_documents(count: usize) -> Vec<Document> {
    (0..count)
        .map(|i| {
            let files = match i % 3 {
                0 => vec![format!("track{i}.mp3")],
                1 => vec![format!("doc{i}.pdf")],
                _ => vec![format!("part{i}a.ogg"), format!("part{i}b.ogg")],
            };
            Document::new(document_id(i), format!("Document {i}"), files)
                .with_author(if i % 2 == 0 { "Ann" } else { "Bob" })
                .with_description(format!("Description of document {i}"))
        })
        .collect()
}

/// Store whose every operation fails
#[derive(Debug, Default)]
pub struct FailingStore;

impl FailingStore {
    fn error() -> DbError {
        DbError::InvalidInput("store unavailable".into())
    }
}

impl DocumentStore for FailingStore {
    fn get(&self, _id: &str) -> Result<Option<Document>, DbError> {
        Err(Self::error())
    }

    fn query(
        &self,
        _filter: &DocumentFilter,
        _fields: &[DocumentField],
        _skip: usize,
        _limit: usize,
    ) -> Result<Vec<Document>, DbError> {
        Err(Self::error())
    }

    fn count_all(&self) -> Result<usize, DbError> {
        Err(Self::error())
    }

    fn bulk_load(&self, _documents: &[Document]) -> Result<(), DbError> {
        Err(Self::error())
    }
}
