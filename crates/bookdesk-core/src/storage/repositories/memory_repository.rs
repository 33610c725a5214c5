use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::Result;
use crate::models::BookRecord;
use crate::storage::seed::seed_books;

use super::{BookRepository, Repository};

/// Ordered record list held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: Mutex<Vec<BookRecord>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<BookRecord>) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }

    /// A store pre-filled with the sample catalog.
    pub fn seeded() -> Self {
        Self::with_books(seed_books())
    }

    /// Every mutation is a single push/replace/remove, so a poisoned lock
    /// still guards a consistent list.
    fn lock(&self) -> MutexGuard<'_, Vec<BookRecord>> {
        self.books.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Repository for InMemoryBookRepository {
    type Entity = BookRecord;
    type Id = str;

    fn find_by_id(&self, id: &str) -> Result<Option<BookRecord>> {
        Ok(self.lock().iter().find(|b| b.id == id).cloned())
    }

    fn save(&self, book: &BookRecord) -> Result<()> {
        let mut books = self.lock();
        match books.iter_mut().find(|b| b.id == book.id) {
            Some(existing) => *existing = book.clone(),
            None => books.push(book.clone()),
        }
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<bool> {
        let mut books = self.lock();
        let before = books.len();
        books.retain(|b| b.id != id);
        Ok(books.len() != before)
    }
}

impl BookRepository for InMemoryBookRepository {
    fn list_all(&self) -> Result<Vec<BookRecord>> {
        Ok(self.lock().clone())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.lock().len())
    }
}
