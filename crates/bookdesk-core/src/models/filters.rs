use serde::{Deserialize, Serialize};

use crate::models::BookStatus;

/// Active filter constraints. Empty `search` / `genre` and a `None`
/// status mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against title and author.
    #[serde(default)]
    pub search: String,

    /// Exact genre label.
    #[serde(default)]
    pub genre: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BookStatus>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_status(mut self, status: Option<BookStatus>) -> Self {
        self.status = status;
        self
    }

    /// True when no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.genre.is_empty() && self.status.is_none()
    }
}
