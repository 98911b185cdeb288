//! Document store abstraction
//!
//! The browsing core never talks to sled directly; it goes through
//! [`DocumentStore`], so alternative backends (or failing stores in tests)
//! can be plugged in.

use super::error::DbError;
use super::query::DocumentFilter;
use super::types::DocumentField;
use crate::Document;

/// Key-value and paged access to the document collection
pub trait DocumentStore {
    /// Fetch a single document by id
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the lookup fails.
    fn get(&self, id: &str) -> Result<Option<Document>, DbError>;

    /// Fetch several documents, preserving the order of `ids`
    ///
    /// Every requested id yields one entry; ids without a document pair with
    /// `None`. Duplicated ids are looked up once per occurrence.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if any lookup fails.
    fn get_many(&self, ids: &[String]) -> Result<Vec<(String, Option<Document>)>, DbError> {
        ids.iter()
            .map(|id| Ok((id.clone(), self.get(id)?)))
            .collect()
    }

    /// Walk documents in natural order, keeping those accepted by `filter`
    ///
    /// Skips the first `skip` matches and returns at most `limit` documents,
    /// projected onto `fields`.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if iteration or decoding fails.
    fn query(
        &self,
        filter: &DocumentFilter,
        fields: &[DocumentField],
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Document>, DbError>;

    /// Total number of documents
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the count cannot be read.
    fn count_all(&self) -> Result<usize, DbError>;

    /// Insert many documents at once
    ///
    /// # Errors
    ///
    /// Returns `DbError` if encoding or writing fails.
    fn bulk_load(&self, documents: &[Document]) -> Result<(), DbError>;
}
