//! Collection import
//!
//! A collection is a JSON array of entries:
//!
//! ```json
//! [
//!   {"title": "Song", "authors": "Band", "description": "…",
//!    "files": ["song.ogg", {"archive-member": "raw/b.pdf", "filename": "b.pdf"},
//!              {"url": "https://example.org/c.mp3"}]}
//! ]
//! ```
//!
//! Entries without files are skipped. The remaining entries receive
//! zero-padded ids in file order, so the store's natural order is the
//! collection order. The store is populated once, only while it is empty.

use super::error::DbError;
use super::traits::DocumentStore;
use super::types::document_id;
use crate::Document;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Title given to entries that have none
pub const UNKNOWN_TITLE: &str = "Unknown?";

/// One entry of a collection file
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

/// A file reference: a bare path, or an archive member / URL with an
/// optional explicit filename
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FileEntry {
    Path(String),
    Detailed {
        #[serde(rename = "archive-member", default)]
        archive_member: Option<String>,
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        filename: Option<String>,
    },
}

impl FileEntry {
    /// Name the file is stored under in the collection
    ///
    /// # Errors
    ///
    /// Returns `DbError::InvalidCollection` if neither an archive member nor
    /// a URL is given.
    pub fn filename(&self) -> Result<String, DbError> {
        match self {
            Self::Path(path) => Ok(path.clone()),
            Self::Detailed {
                archive_member,
                url,
                filename,
            } => {
                let derived = match (url, archive_member) {
                    (Some(url), _) => url
                        .rsplit('/')
                        .next()
                        .unwrap_or(url.as_str())
                        .to_string(),
                    (None, Some(member)) => member.clone(),
                    (None, None) => {
                        return Err(DbError::InvalidCollection(
                            "archive-member and url are both missing".into(),
                        ));
                    }
                };
                Ok(filename.clone().unwrap_or(derived))
            }
        }
    }
}

impl CollectionEntry {
    fn into_document(self, index: usize) -> Result<Document, DbError> {
        let files = self
            .files
            .iter()
            .map(FileEntry::filename)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Document {
            id: document_id(index),
            title: self
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            author: self.authors.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            files,
        })
    }
}

/// Parse collection JSON into documents
///
/// # Errors
///
/// Returns `DbError` if the JSON is malformed, a file entry has no source,
/// two entries share a file name, or no entry has any file.
pub fn parse_collection(json: &str) -> Result<Vec<Document>, DbError> {
    let entries: Vec<CollectionEntry> = serde_json::from_str(json)?;

    let documents = entries
        .into_iter()
        .filter(|entry| !entry.files.is_empty())
        .enumerate()
        .map(|(index, entry)| entry.into_document(index))
        .collect::<Result<Vec<_>, _>>()?;

    if documents.is_empty() {
        return Err(DbError::InvalidCollection("collection is empty".into()));
    }

    let mut seen = HashSet::new();
    let mut duplicates: Vec<&str> = documents
        .iter()
        .flat_map(|d| d.files.iter())
        .filter(|name| !seen.insert(name.as_str()))
        .map(String::as_str)
        .collect();
    if !duplicates.is_empty() {
        duplicates.sort_unstable();
        duplicates.dedup();
        return Err(DbError::InvalidCollection(format!(
            "files in collection are duplicate: {}",
            duplicates.join(", ")
        )));
    }

    let nb_files: usize = documents.iter().map(|d| d.files.len()).sum();
    tracing::info!(
        "Collection loaded. {} items, {} files",
        documents.len(),
        nb_files
    );

    Ok(documents)
}

/// Read and parse a collection file
///
/// # Errors
///
/// Returns `DbError` if the file cannot be read or parsed.
pub fn load_collection<P: AsRef<Path>>(path: P) -> Result<Vec<Document>, DbError> {
    let json = fs::read_to_string(path)?;
    parse_collection(&json)
}

/// Populate the store, but only when it holds no document yet
///
/// Returns whether documents were loaded.
///
/// # Errors
///
/// Returns `DbError` if counting or loading fails.
pub fn populate_if_empty<S: DocumentStore + ?Sized>(
    store: &S,
    documents: &[Document],
) -> Result<bool, DbError> {
    if store.count_all()? > 0 {
        tracing::debug!("database exists, skipping import");
        return Ok(false);
    }
    store.bulk_load(documents)?;
    tracing::debug!("{} documents imported", documents.len());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestDb;

    #[test]
    fn test_parse_plain_paths() {
        let json = r#"[
            {"title": "Song", "authors": "Band", "description": "A song", "files": ["song.ogg"]},
            {"title": "Album", "files": ["one.mp3", "two.mp3"]}
        ]"#;

        let docs = parse_collection(json).unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, "00000");
        assert_eq!(docs[0].author, "Band");
        assert_eq!(docs[1].id, "00001");
        assert_eq!(docs[1].files, vec!["one.mp3", "two.mp3"]);
        assert!(docs[1].author.is_empty());
    }

    #[test]
    fn test_entries_without_files_are_skipped_before_numbering() {
        let json = r#"[
            {"title": "Empty", "files": []},
            {"title": "NoFiles"},
            {"title": "Kept", "files": ["a.pdf"]}
        ]"#;

        let docs = parse_collection(json).unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, "00000");
        assert_eq!(docs[0].title, "Kept");
    }

    #[test]
    fn test_missing_title_defaults() {
        let docs = parse_collection(r#"[{"files": ["a.pdf"]}, {"title": "", "files": ["b.pdf"]}]"#)
            .unwrap();
        assert_eq!(docs[0].title, UNKNOWN_TITLE);
        assert_eq!(docs[1].title, UNKNOWN_TITLE);
    }

    #[test]
    fn test_detailed_file_entries() {
        let json = r#"[{"title": "T", "files": [
            {"archive-member": "raw/b.pdf"},
            {"archive-member": "raw/c.pdf", "filename": "renamed.pdf"},
            {"url": "https://example.org/media/d.mp3"}
        ]}]"#;

        let docs = parse_collection(json).unwrap();

        assert_eq!(docs[0].files, vec!["raw/b.pdf", "renamed.pdf", "d.mp3"]);
    }

    #[test]
    fn test_file_entry_without_source_is_rejected() {
        let json = r#"[{"title": "T", "files": [{"filename": "x.pdf"}]}]"#;
        let result = parse_collection(json);
        assert!(matches!(result, Err(DbError::InvalidCollection(_))));
    }

    #[test]
    fn test_duplicate_files_are_rejected() {
        let json = r#"[
            {"title": "A", "files": ["same.pdf"]},
            {"title": "B", "files": ["same.pdf"]}
        ]"#;
        let err = parse_collection(json).unwrap_err();
        assert!(err.to_string().contains("same.pdf"));
    }

    #[test]
    fn test_empty_collection_is_rejected() {
        assert!(matches!(
            parse_collection("[]"),
            Err(DbError::InvalidCollection(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse_collection("{not json"),
            Err(DbError::JsonError(_))
        ));
    }

    #[test]
    fn test_populate_only_when_empty() {
        let test_db = TestDb::new();
        let db = test_db.db();
        let docs = parse_collection(r#"[{"title": "A", "files": ["a.pdf"]}]"#).unwrap();

        assert!(populate_if_empty(db, &docs).unwrap());
        assert!(!populate_if_empty(db, &docs).unwrap());
        assert_eq!(db.count(), 1);
    }

    #[test]
    fn test_load_collection_from_file() {
        let test_db = TestDb::new();
        let path = test_db.path().join("collection.json");
        std::fs::write(&path, r#"[{"title": "A", "files": ["a.pdf"]}]"#).unwrap();

        let docs = load_collection(&path).unwrap();
        assert_eq!(docs.len(), 1);
    }
}
