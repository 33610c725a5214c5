use serde::{Deserialize, Serialize};

/// Summary statistics over a set of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookStats {
    pub total_books: usize,
    pub available_books: usize,
    pub issued_books: usize,
    /// One entry per genre, in the order each genre was first seen.
    pub genre_distribution: Vec<GenreCount>,
    /// One entry per year, ascending.
    pub year_distribution: Vec<YearCount>,
}

impl BookStats {
    /// Number of distinct genres in the set.
    pub fn genre_count(&self) -> usize {
        self.genre_distribution.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}
