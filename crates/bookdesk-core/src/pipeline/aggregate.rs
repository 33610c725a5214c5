use std::collections::{BTreeMap, HashMap};

use crate::models::{BookRecord, BookStats, BookStatus, GenreCount, YearCount};

/// Compute summary statistics for `books`, normally the filtered set.
pub fn calculate_book_stats(books: &[BookRecord]) -> BookStats {
    let mut available_books = 0;
    let mut issued_books = 0;

    // Genres keep first-seen order: `genre_slots` maps a label to its
    // index in `genre_distribution`.
    let mut genre_distribution: Vec<GenreCount> = Vec::new();
    let mut genre_slots: HashMap<&str, usize> = HashMap::new();
    let mut years: BTreeMap<i32, usize> = BTreeMap::new();

    for book in books {
        match book.status {
            BookStatus::Available => available_books += 1,
            BookStatus::Issued => issued_books += 1,
        }

        match genre_slots.get(book.genre.as_str()) {
            Some(&slot) => genre_distribution[slot].count += 1,
            None => {
                genre_slots.insert(book.genre.as_str(), genre_distribution.len());
                genre_distribution.push(GenreCount {
                    genre: book.genre.clone(),
                    count: 1,
                });
            }
        }

        *years.entry(book.published_year).or_insert(0) += 1;
    }

    let year_distribution = years
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect();

    BookStats {
        total_books: books.len(),
        available_books,
        issued_books,
        genre_distribution,
        year_distribution,
    }
}
