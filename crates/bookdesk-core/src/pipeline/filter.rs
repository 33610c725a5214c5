use crate::models::{BookRecord, FilterCriteria};

/// Keep the records that satisfy every active constraint in `criteria`,
/// preserving input order.
pub fn filter_books(books: &[BookRecord], criteria: &FilterCriteria) -> Vec<BookRecord> {
    let needle = criteria.search.to_lowercase();
    books
        .iter()
        .filter(|book| matches(book, criteria, &needle))
        .cloned()
        .collect()
}

/// `needle` is the already-lowercased search text.
fn matches(book: &BookRecord, criteria: &FilterCriteria, needle: &str) -> bool {
    let search_ok = needle.is_empty()
        || book.title.to_lowercase().contains(needle)
        || book.author.to_lowercase().contains(needle);

    let genre_ok = criteria.genre.is_empty() || book.genre == criteria.genre;
    let status_ok = criteria.status.is_none_or(|status| book.status == status);

    search_ok && genre_ok && status_ok
}
