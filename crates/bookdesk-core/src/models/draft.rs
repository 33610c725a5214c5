use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BookdeskError, Result};
use crate::models::{BookRecord, BookStatus};

/// Earliest publication year accepted from the add/edit form.
pub const MIN_FORM_YEAR: i32 = 1000;

/// Editable fields of a book, as submitted by the add/edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: i32,
    #[serde(default)]
    pub status: BookStatus,
}

impl BookDraft {
    /// Check the draft against the form rules, using this year as the upper bound.
    pub fn validate(&self) -> Result<()> {
        self.validate_at(Utc::now().year())
    }

    /// Check required fields and `MIN_FORM_YEAR..=current_year`.
    /// All violations are reported together.
    pub fn validate_at(&self, current_year: i32) -> Result<()> {
        let mut problems: Vec<String> = Vec::new();

        if self.title.trim().is_empty() {
            problems.push("Title is required".to_string());
        }
        if self.author.trim().is_empty() {
            problems.push("Author is required".to_string());
        }
        if self.genre.trim().is_empty() {
            problems.push("Genre is required".to_string());
        }
        if self.published_year < MIN_FORM_YEAR {
            problems.push(format!("Year must be at least {MIN_FORM_YEAR}"));
        } else if self.published_year > current_year {
            problems.push("Year cannot be in the future".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(BookdeskError::ValidationError(problems.join("; ")))
        }
    }
}

impl From<&BookRecord> for BookDraft {
    /// Prefill the form from an existing record.
    fn from(book: &BookRecord) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            published_year: book.published_year,
            status: book.status,
        }
    }
}
