//! Import command - load a collection file into the database

use crate::{
    NautilusError,
    db::{
        Database, DocumentStore,
        collection::{load_collection, populate_if_empty},
    },
};
use std::path::Path;

type Result<T> = std::result::Result<T, NautilusError>;

/// Execute the import command
///
/// A populated database is left untouched unless `replace` is set.
/// Returns the number of documents imported.
///
/// # Errors
/// Returns an error if the collection cannot be read or the database write fails
pub fn execute(db: &Database, path: &Path, replace: bool, quiet: bool) -> Result<usize> {
    let documents = load_collection(path)?;

    if replace {
        db.clear()?;
        db.bulk_load(&documents)?;
    } else if !populate_if_empty(db, &documents)? {
        if !quiet {
            println!(
                "Database already holds {} documents. Use --replace to overwrite.",
                db.count()
            );
        }
        return Ok(0);
    }

    if !quiet {
        println!("Imported {} documents from {}", documents.len(), path.display());
    }
    Ok(documents.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestDb;
    use std::fs;

    const COLLECTION: &str = r#"[
        {"title": "Song", "authors": "Band", "files": ["song.ogg"]},
        {"title": "Empty", "files": []},
        {"title": "Book", "files": [{"archive-member": "b.pdf", "filename": "book.pdf"}]}
    ]"#;

    #[test]
    fn test_import_into_empty_database() {
        let test_db = TestDb::new();
        let path = test_db.path().join("collection.json");
        fs::write(&path, COLLECTION).unwrap();

        let imported = execute(test_db.db(), &path, false, true).unwrap();

        assert_eq!(imported, 2);
        let book = test_db.db().get("00001").unwrap().unwrap();
        assert_eq!(book.title, "Book");
        assert_eq!(book.files, vec!["book.pdf"]);
    }

    #[test]
    fn test_populated_database_is_kept() {
        let test_db = TestDb::new();
        let path = test_db.path().join("collection.json");
        fs::write(&path, COLLECTION).unwrap();
        execute(test_db.db(), &path, false, true).unwrap();

        fs::write(&path, r#"[{"title": "Other", "files": ["x.pdf"]}]"#).unwrap();
        assert_eq!(execute(test_db.db(), &path, false, true).unwrap(), 0);
        assert_eq!(test_db.db().count(), 2);

        assert_eq!(execute(test_db.db(), &path, true, true).unwrap(), 1);
        assert_eq!(test_db.db().count(), 1);
        assert_eq!(test_db.db().get("00000").unwrap().unwrap().title, "Other");
    }

    #[test]
    fn test_missing_file() {
        let test_db = TestDb::new();
        let result = execute(test_db.db(), &test_db.path().join("nope.json"), false, true);
        assert!(matches!(result, Err(NautilusError::DbError(_))));
    }
}
