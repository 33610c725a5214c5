use crate::models::BookRecord;

/// Slice out 1-indexed `page` of `page_size` records. Pages outside the
/// available range (including page 0) are empty.
pub fn paginate_books(books: &[BookRecord], page: usize, page_size: usize) -> &[BookRecord] {
    let Some(index) = page.checked_sub(1) else {
        return &[];
    };
    let start = index.saturating_mul(page_size);
    if start >= books.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(books.len());
    &books[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookStatus, total_pages};

    fn books(n: usize) -> Vec<BookRecord> {
        (0..n)
            .map(|i| BookRecord::new(format!("Book {i}"), "a", "g", 1900 + i as i32, BookStatus::Available))
            .collect()
    }

    #[test]
    fn test_first_and_last_page() {
        let all = books(25);
        assert_eq!(paginate_books(&all, 1, 10).len(), 10);
        assert_eq!(paginate_books(&all, 1, 10)[0].title, "Book 0");
        let last = paginate_books(&all, 3, 10);
        assert_eq!(last.len(), 5);
        assert_eq!(last[0].title, "Book 20");
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let all = books(25);
        assert!(paginate_books(&all, 4, 10).is_empty());
        assert!(paginate_books(&all, 0, 10).is_empty());
        assert!(paginate_books(&all, usize::MAX, 10).is_empty());
        assert!(paginate_books(&all, 1, 0).is_empty());
        assert!(paginate_books(&[], 1, 10).is_empty());
    }

    #[test]
    fn test_pages_reconstruct_input() {
        let all = books(23);
        let pages = total_pages(all.len(), 4);
        let joined: Vec<BookRecord> = (1..=pages)
            .flat_map(|p| paginate_books(&all, p, 4).to_vec())
            .collect();
        assert_eq!(joined, all);
    }
}
