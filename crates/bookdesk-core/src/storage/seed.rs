use chrono::{DateTime, Utc};

use crate::models::{BookRecord, BookStatus};

type SeedRow = (&'static str, &'static str, &'static str, &'static str, i32, BookStatus, &'static str);

const SEED_ROWS: [SeedRow; 25] = [
    ("1", "The Great Gatsby", "F. Scott Fitzgerald", "Fiction", 1925, BookStatus::Available, "2024-01-15T10:30:00Z"),
    ("2", "To Kill a Mockingbird", "Harper Lee", "Fiction", 1960, BookStatus::Issued, "2024-01-16T14:20:00Z"),
    ("3", "1984", "George Orwell", "Dystopian Fiction", 1949, BookStatus::Available, "2024-01-17T09:15:00Z"),
    ("4", "Pride and Prejudice", "Jane Austen", "Romance", 1813, BookStatus::Available, "2024-01-18T16:45:00Z"),
    ("5", "The Catcher in the Rye", "J.D. Salinger", "Fiction", 1951, BookStatus::Issued, "2024-01-19T11:30:00Z"),
    ("6", "Lord of the Flies", "William Golding", "Adventure", 1954, BookStatus::Available, "2024-01-20T13:20:00Z"),
    ("7", "The Hobbit", "J.R.R. Tolkien", "Fantasy", 1937, BookStatus::Available, "2024-01-21T08:10:00Z"),
    ("8", "Fahrenheit 451", "Ray Bradbury", "Science Fiction", 1953, BookStatus::Issued, "2024-01-22T15:40:00Z"),
    ("9", "Jane Eyre", "Charlotte Brontë", "Gothic Fiction", 1847, BookStatus::Available, "2024-01-23T12:25:00Z"),
    ("10", "The Lord of the Rings", "J.R.R. Tolkien", "Fantasy", 1954, BookStatus::Available, "2024-01-24T17:55:00Z"),
    ("11", "Brave New World", "Aldous Huxley", "Science Fiction", 1932, BookStatus::Issued, "2024-01-25T10:15:00Z"),
    ("12", "The Chronicles of Narnia", "C.S. Lewis", "Fantasy", 1950, BookStatus::Available, "2024-01-26T14:30:00Z"),
    ("13", "Wuthering Heights", "Emily Brontë", "Gothic Fiction", 1847, BookStatus::Available, "2024-01-27T09:45:00Z"),
    ("14", "The Picture of Dorian Gray", "Oscar Wilde", "Gothic Fiction", 1890, BookStatus::Issued, "2024-01-28T16:20:00Z"),
    ("15", "Moby Dick", "Herman Melville", "Adventure", 1851, BookStatus::Available, "2024-01-29T11:10:00Z"),
    ("16", "The Odyssey", "Homer", "Epic Poetry", -800, BookStatus::Available, "2024-01-30T13:35:00Z"),
    ("17", "Crime and Punishment", "Fyodor Dostoevsky", "Psychological Fiction", 1866, BookStatus::Issued, "2024-01-31T08:50:00Z"),
    ("18", "The Brothers Karamazov", "Fyodor Dostoevsky", "Philosophical Fiction", 1880, BookStatus::Available, "2024-02-01T15:25:00Z"),
    ("19", "Anna Karenina", "Leo Tolstoy", "Realist Fiction", 1877, BookStatus::Available, "2024-02-02T12:40:00Z"),
    ("20", "War and Peace", "Leo Tolstoy", "Historical Fiction", 1869, BookStatus::Issued, "2024-02-03T17:15:00Z"),
    ("21", "The Alchemist", "Paulo Coelho", "Adventure", 1988, BookStatus::Available, "2024-02-04T10:05:00Z"),
    ("22", "One Hundred Years of Solitude", "Gabriel García Márquez", "Magical Realism", 1967, BookStatus::Available, "2024-02-05T14:50:00Z"),
    ("23", "The Kite Runner", "Khaled Hosseini", "Historical Fiction", 2003, BookStatus::Issued, "2024-02-06T09:30:00Z"),
    ("24", "Life of Pi", "Yann Martel", "Adventure", 2001, BookStatus::Available, "2024-02-07T16:45:00Z"),
    ("25", "The Book Thief", "Markus Zusak", "Historical Fiction", 2005, BookStatus::Available, "2024-02-08T11:20:00Z"),
];

/// The sample catalog used to populate an empty store.
pub fn seed_books() -> Vec<BookRecord> {
    SEED_ROWS
        .iter()
        .map(|&(id, title, author, genre, published_year, status, added)| {
            let added = DateTime::parse_from_rfc3339(added)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now());
            BookRecord {
                id: id.to_string(),
                title: title.to_string(),
                author: author.to_string(),
                genre: genre.to_string(),
                published_year,
                status,
                created_at: added,
                updated_at: added,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_catalog() {
        let books = seed_books();
        assert_eq!(books.len(), 25);

        let ids: HashSet<_> = books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), 25);

        let issued = books.iter().filter(|b| b.status == BookStatus::Issued).count();
        assert_eq!(issued, 8);
        assert!(books.iter().any(|b| b.published_year < 0));
        assert_eq!(books[0].created_at.to_rfc3339(), "2024-01-15T10:30:00+00:00");
    }
}
