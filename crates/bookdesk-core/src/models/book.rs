use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::BookdeskError;
use crate::models::BookDraft;

// ─── BookRecord ─────────────────────────────────────────────

/// One catalog entry. Field names on the wire follow the dashboard's
/// JSON shape (`_id`, `publishedYear`, `createdAt`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Negative for works before the Common Era.
    pub published_year: i32,
    pub status: BookStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookRecord {
    /// Create a fresh record with a new id and both timestamps set to now.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        published_year: i32,
        status: BookStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: new_book_id(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            published_year,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Build a new record from submitted form data.
    pub fn from_draft(draft: BookDraft) -> Self {
        Self::new(
            draft.title,
            draft.author,
            draft.genre,
            draft.published_year,
            draft.status,
        )
    }

    /// Overwrite the editable fields, keeping `id` and `created_at`.
    pub fn apply_draft(&mut self, draft: BookDraft) {
        self.title = draft.title;
        self.author = draft.author;
        self.genre = draft.genre;
        self.published_year = draft.published_year;
        self.status = draft.status;
        self.updated_at = Utc::now();
    }

    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }
}

/// Generate an id for a newly created record.
pub fn new_book_id() -> String {
    Uuid::now_v7().to_string()
}

// ─── Status ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    Available,
    Issued,
}

impl BookStatus {
    pub const ALL: [BookStatus; 2] = [BookStatus::Available, BookStatus::Issued];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Issued => "Issued",
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = BookdeskError;

    /// Accepts the canonical names in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "issued" => Ok(Self::Issued),
            _ => Err(BookdeskError::ValidationError(format!(
                "Unknown status '{}', expected Available or Issued",
                s.trim()
            ))),
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────
