use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{BookRecord, normalize_value};
use crate::storage::repositories::{BookRepository, InMemoryBookRepository, Repository};

/// Load a JSON array of books. A missing file is an empty store; entries
/// that are not objects are skipped with a warning, and objects with
/// missing or oddly typed fields are normalized.
pub fn load_books(path: &Path) -> Result<Vec<BookRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(path)?;
    let values: Vec<serde_json::Value> = serde_json::from_str(&contents)?;

    let mut books = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match normalize_value(value) {
            Ok(book) => books.push(book),
            Err(e) => warn!(path = %path.display(), index, "skipping invalid book entry: {e}"),
        }
    }
    debug!(path = %path.display(), count = books.len(), "loaded books");
    Ok(books)
}

/// Write `books` as a pretty-printed JSON array.
pub fn save_books(path: &Path, books: &[BookRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(books)?;
    fs::write(path, json)?;
    Ok(())
}

/// Book repository persisted as one JSON array file. The whole file is
/// rewritten after every mutation.
pub struct JsonBookStore {
    path: PathBuf,
    inner: InMemoryBookRepository,
}

impl JsonBookStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let books = load_books(&path)?;
        Ok(Self {
            path,
            inner: InMemoryBookRepository::with_books(books),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Repository for JsonBookStore {
    type Entity = BookRecord;
    type Id = str;

    fn find_by_id(&self, id: &str) -> Result<Option<BookRecord>> {
        self.inner.find_by_id(id)
    }

    /// The file is written first; memory only changes once it succeeds.
    fn save(&self, book: &BookRecord) -> Result<()> {
        let mut books = self.inner.list_all()?;
        match books.iter_mut().find(|b| b.id == book.id) {
            Some(existing) => *existing = book.clone(),
            None => books.push(book.clone()),
        }
        save_books(&self.path, &books)?;
        self.inner.save(book)
    }

    fn delete(&self, id: &str) -> Result<bool> {
        let mut books = self.inner.list_all()?;
        let before = books.len();
        books.retain(|b| b.id != id);
        if books.len() == before {
            return Ok(false);
        }
        save_books(&self.path, &books)?;
        self.inner.delete(id)
    }
}

impl BookRepository for JsonBookStore {
    fn list_all(&self) -> Result<Vec<BookRecord>> {
        self.inner.list_all()
    }

    fn count(&self) -> Result<usize> {
        self.inner.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookDraft, BookStatus};
    use crate::storage::seed::seed_books;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file() {
        let books = load_books(Path::new("/tmp/nonexistent_bookdesk_store.json")).unwrap();
        assert!(books.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");
        let seed = seed_books();
        save_books(&path, &seed).unwrap();
        assert_eq!(load_books(&path).unwrap(), seed);
    }

    #[test]
    fn test_load_normalizes_and_skips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");
        fs::write(
            &path,
            r#"[
                {"id": "a", "title": "Loose", "author": "Someone"},
                "not a book",
                {"_id": "b", "title": "Tight", "author": "X", "genre": "Y",
                 "publishedYear": 1999, "status": "Issued",
                 "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-02T00:00:00Z"}
            ]"#,
        )
        .unwrap();

        let books = load_books(&path).unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].id, "a");
        assert_eq!(books[0].status, BookStatus::Available);
        assert_eq!(books[1].status, BookStatus::Issued);
    }

    #[test]
    fn test_loosely_typed_entries_survive_mutation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");
        fs::write(
            &path,
            r#"[
                {"_id": "1", "title": "IntYear", "author": "A", "genre": "G", "publishedYear": 1999},
                {"_id": "2", "title": "StringYear", "author": "A", "genre": "G", "publishedYear": "1999"},
                {"_id": "3", "title": "FloatYear", "author": "A", "genre": "G", "publishedYear": 1999.0,
                 "status": 1}
            ]"#,
        )
        .unwrap();

        let store = JsonBookStore::open(&path).unwrap();
        assert_eq!(store.count().unwrap(), 3);
        store
            .create(BookDraft {
                title: "Beloved".into(),
                author: "Toni Morrison".into(),
                genre: "Historical Fiction".into(),
                published_year: 1987,
                status: BookStatus::Available,
            })
            .unwrap();

        let reloaded = load_books(&path).unwrap();
        let titles: Vec<&str> = reloaded.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["IntYear", "StringYear", "FloatYear", "Beloved"]);
        assert!(reloaded[..3].iter().all(|b| b.published_year == 1999));
    }

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let store = JsonBookStore::open(blocker.join("books.json")).unwrap();
        let book = seed_books().remove(0);
        assert!(store.save(&book).is_err());
        assert_eq!(store.count().unwrap(), 0);
        assert_eq!(store.find_by_id(&book.id).unwrap(), None);
    }

    #[test]
    fn test_store_persists_mutations() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("books.json");

        let store = JsonBookStore::open(&path).unwrap();
        let book = store
            .create(BookDraft {
                title: "Middlemarch".into(),
                author: "George Eliot".into(),
                genre: "Realist Fiction".into(),
                published_year: 1871,
                status: BookStatus::Available,
            })
            .unwrap();
        assert!(path.exists());

        let reopened = JsonBookStore::open(&path).unwrap();
        assert_eq!(reopened.find_by_id(&book.id).unwrap(), Some(book.clone()));

        reopened.remove(&book.id).unwrap();
        assert_eq!(JsonBookStore::open(&path).unwrap().count().unwrap(), 0);
    }
}
