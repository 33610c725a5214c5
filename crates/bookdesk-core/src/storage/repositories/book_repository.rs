use chrono::{DateTime, Utc};
use rusqlite::params;
use rusqlite::types::Type;
use tracing::info;

use crate::error::{BookdeskError, Result};
use crate::models::{BookDraft, BookRecord, BookStatus};
use crate::storage::database::Database;

use super::Repository;

/// CRUD over the record store. `list_all` returns the snapshot the
/// pipeline consumes, in insertion order.
pub trait BookRepository: Repository<Entity = BookRecord, Id = str> {
    fn list_all(&self) -> Result<Vec<BookRecord>>;
    fn count(&self) -> Result<usize>;

    /// Validate and store a new book with a fresh id and timestamps.
    fn create(&self, draft: BookDraft) -> Result<BookRecord> {
        draft.validate()?;
        let book = BookRecord::from_draft(draft);
        self.save(&book)?;
        info!(id = %book.id, title = %book.title, "book created");
        Ok(book)
    }

    /// Validate and apply `draft` to the book with `id`.
    fn update(&self, id: &str, draft: BookDraft) -> Result<BookRecord> {
        draft.validate()?;
        let mut book = self
            .find_by_id(id)?
            .ok_or_else(|| BookdeskError::BookNotFound(id.to_string()))?;
        book.apply_draft(draft);
        self.save(&book)?;
        info!(id = %book.id, "book updated");
        Ok(book)
    }

    /// Delete the book with `id`, failing if there is none.
    fn remove(&self, id: &str) -> Result<()> {
        if !self.delete(id)? {
            return Err(BookdeskError::BookNotFound(id.to_string()));
        }
        info!(id, "book deleted");
        Ok(())
    }

    /// Lend out an `Available` book.
    fn issue(&self, id: &str) -> Result<BookRecord> {
        self.change_status(id, BookStatus::Issued)
    }

    /// Take back an `Issued` book.
    fn return_book(&self, id: &str) -> Result<BookRecord> {
        self.change_status(id, BookStatus::Available)
    }

    /// Move a book to `status`. A book already in that state is a conflict.
    fn change_status(&self, id: &str, status: BookStatus) -> Result<BookRecord> {
        let mut book = self
            .find_by_id(id)?
            .ok_or_else(|| BookdeskError::BookNotFound(id.to_string()))?;
        if book.status == status {
            return Err(BookdeskError::StatusConflict {
                id: id.to_string(),
                status,
            });
        }
        book.status = status;
        book.updated_at = Utc::now();
        self.save(&book)?;
        info!(id, status = %status, "book status changed");
        Ok(book)
    }

    /// Store an existing record as-is, refusing ids already present.
    fn insert(&self, book: &BookRecord) -> Result<()> {
        if self.find_by_id(book.id.as_str())?.is_some() {
            return Err(BookdeskError::DuplicateBook(book.id.clone()));
        }
        self.save(book)
    }

    /// Insert every record whose id is not taken yet. Returns how many
    /// were added.
    fn import(&self, books: &[BookRecord]) -> Result<usize> {
        let mut added = 0;
        for book in books {
            match self.insert(book) {
                Ok(()) => added += 1,
                Err(BookdeskError::DuplicateBook(_)) => {}
                Err(e) => return Err(e),
            }
        }
        info!(added, offered = books.len(), "books imported");
        Ok(added)
    }
}

// ─── SQLite ────────────────────────────────────────────────

pub struct SqliteBookRepository {
    db: Database,
}

impl SqliteBookRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Database::open_in_memory()?))
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    fn row_to_book(row: &rusqlite::Row) -> rusqlite::Result<BookRecord> {
        let status: String = row.get(5)?;
        Ok(BookRecord {
            id: row.get(0)?,
            title: row.get(1)?,
            author: row.get(2)?,
            genre: row.get(3)?,
            published_year: row.get(4)?,
            status: status
                .parse::<BookStatus>()
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?,
            created_at: parse_timestamp(6, row.get(6)?)?,
            updated_at: parse_timestamp(7, row.get(7)?)?,
        })
    }
}

fn parse_timestamp(column: usize, raw: String) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

const SELECT_BOOK: &str = "SELECT id, title, author, genre, published_year, status, created_at, updated_at
     FROM books";

impl Repository for SqliteBookRepository {
    type Entity = BookRecord;
    type Id = str;

    fn find_by_id(&self, id: &str) -> Result<Option<BookRecord>> {
        let conn = self.db.connection();
        let mut stmt = conn.prepare(&format!("{SELECT_BOOK} WHERE id = ?1"))?;
        match stmt.query_row(params![id], Self::row_to_book) {
            Ok(book) => Ok(Some(book)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(BookdeskError::Database(e)),
        }
    }

    fn save(&self, book: &BookRecord) -> Result<()> {
        self.db.connection().execute(
            "INSERT INTO books
                (id, title, author, genre, published_year, status, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                author = excluded.author,
                genre = excluded.genre,
                published_year = excluded.published_year,
                status = excluded.status,
                created_at = excluded.created_at,
                updated_at = excluded.updated_at",
            params![
                book.id,
                book.title,
                book.author,
                book.genre,
                book.published_year,
                book.status.as_str(),
                book.created_at.to_rfc3339(),
                book.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<bool> {
        let deleted = self
            .db
            .connection()
            .execute("DELETE FROM books WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }
}

impl BookRepository for SqliteBookRepository {
    fn list_all(&self) -> Result<Vec<BookRecord>> {
        let conn = self.db.connection();
        let mut stmt = conn.prepare(&format!("{SELECT_BOOK} ORDER BY rowid"))?;
        let rows = stmt
            .query_map([], Self::row_to_book)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn count(&self) -> Result<usize> {
        let count: i64 = self
            .db
            .connection()
            .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
