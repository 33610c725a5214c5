use std::collections::BTreeSet;

use crate::models::BookRecord;

/// Distinct genres of the unfiltered snapshot, sorted ascending.
pub fn unique_genres(books: &[BookRecord]) -> Vec<String> {
    books
        .iter()
        .map(|book| book.genre.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookStatus;

    #[test]
    fn test_unique_sorted() {
        let books: Vec<_> = ["Fiction", "Adventure", "Fiction", "Romance", "Adventure"]
            .into_iter()
            .map(|g| BookRecord::new("t", "a", g, 2000, BookStatus::Available))
            .collect();
        assert_eq!(unique_genres(&books), ["Adventure", "Fiction", "Romance"]);
    }

    #[test]
    fn test_empty() {
        assert!(unique_genres(&[]).is_empty());
    }
}
