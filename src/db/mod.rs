//! Document store for nautilus
//!
//! Provides the [`DocumentStore`] abstraction and its sled-backed
//! implementation, [`Database`].
//!
//! Documents live in a single `documents` tree keyed by id. sled keeps keys
//! sorted, so iterating the tree yields the collection's stable natural order.

use crate::Document;
use sled::{Batch, Db, Tree};
use std::path::Path;

pub mod collection;
pub mod error;
pub mod query;
pub mod traits;
pub mod types;

pub use error::DbError;
pub use query::DocumentFilter;
pub use traits::DocumentStore;
pub use types::{DocumentField, DocumentKey};

/// Database wrapper that encapsulates all sled operations
pub struct Database {
    db: Db,
    documents: Tree,
}

impl Database {
    /// Opens or creates a database at the specified path
    ///
    /// # Examples
    /// ```no_run
    /// use nautilus::db::Database;
    /// let db = Database::open("my_db").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the database or its tree cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DbError> {
        let db = sled::open(path)?;
        let documents = db.open_tree("documents")?;
        Ok(Self { db, documents })
    }

    /// Insert or replace a single document
    ///
    /// # Errors
    ///
    /// Returns `DbError` if encoding or writing fails.
    pub fn insert(&self, document: &Document) -> Result<(), DbError> {
        let key = DocumentKey::from(document);
        let value = bincode::encode_to_vec(document, bincode::config::standard())?;
        self.documents.insert(key, value)?;
        Ok(())
    }

    /// Remove a document by id
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the removal fails.
    pub fn remove(&self, id: &str) -> Result<bool, DbError> {
        Ok(self.documents.remove(id.as_bytes())?.is_some())
    }

    /// List all documents in natural order
    ///
    /// # Errors
    ///
    /// Returns `DbError` if iteration or decoding fails.
    pub fn list_all(&self) -> Result<Vec<Document>, DbError> {
        self.documents
            .iter()
            .values()
            .map(|value| Self::decode(&value?))
            .collect()
    }

    /// Number of documents stored
    #[must_use]
    pub fn count(&self) -> usize {
        self.documents.len()
    }

    /// Remove every document
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the tree cannot be cleared.
    pub fn clear(&self) -> Result<(), DbError> {
        self.documents.clear()?;
        Ok(())
    }

    /// Flush pending writes to disk
    ///
    /// # Errors
    ///
    /// Returns `DbError` if flushing fails.
    pub fn flush(&self) -> Result<(), DbError> {
        self.db.flush()?;
        Ok(())
    }

    fn decode(bytes: &[u8]) -> Result<Document, DbError> {
        let (document, _): (Document, usize) =
            bincode::decode_from_slice(bytes, bincode::config::standard())?;
        Ok(document)
    }
}

impl DocumentStore for Database {
    fn get(&self, id: &str) -> Result<Option<Document>, DbError> {
        match self.documents.get(id.as_bytes())? {
            Some(value) => Ok(Some(Self::decode(&value)?)),
            None => Ok(None),
        }
    }

    fn query(
        &self,
        filter: &DocumentFilter,
        fields: &[DocumentField],
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Document>, DbError> {
        let mut documents = Vec::with_capacity(limit);
        let mut skipped = 0;

        for value in self.documents.iter().values() {
            if documents.len() >= limit {
                break;
            }
            let document = Self::decode(&value?)?;
            if !filter.matches(&document) {
                continue;
            }
            if skipped < skip {
                skipped += 1;
                continue;
            }
            documents.push(DocumentField::project(document, fields));
        }

        Ok(documents)
    }

    fn count_all(&self) -> Result<usize, DbError> {
        Ok(self.count())
    }

    fn bulk_load(&self, documents: &[Document]) -> Result<(), DbError> {
        let mut batch = Batch::default();
        for document in documents {
            let value = bincode::encode_to_vec(document, bincode::config::standard())?;
            batch.insert(DocumentKey::from(document).as_bytes(), value);
        }
        self.documents.apply_batch(batch)?;
        self.flush()
    }
}
