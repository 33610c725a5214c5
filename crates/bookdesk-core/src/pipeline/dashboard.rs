use serde::Serialize;
use tracing::debug;

use crate::models::{BookRecord, BookStats, FilterCriteria, PaginationInfo};
use crate::pipeline::{calculate_book_stats, filter_books, paginate_books, unique_genres};

/// Everything the dashboard renders for one snapshot: filter options,
/// analytics for the filtered set, and the visible page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub genres: Vec<String>,
    pub stats: BookStats,
    pub pagination: PaginationInfo,
    pub page: Vec<BookRecord>,
    /// The whole filtered set, in snapshot order. Exports read from here.
    #[serde(skip)]
    pub filtered: Vec<BookRecord>,
}

impl DashboardView {
    /// Run the full pipeline over `snapshot`. Nothing is cached between calls.
    pub fn compute(
        snapshot: &[BookRecord],
        criteria: &FilterCriteria,
        page: usize,
        page_size: usize,
    ) -> Self {
        let genres = unique_genres(snapshot);
        let filtered = filter_books(snapshot, criteria);
        let stats = calculate_book_stats(&filtered);
        let pagination = PaginationInfo::new(filtered.len(), page, page_size);
        let page = paginate_books(&filtered, page, page_size).to_vec();

        debug!(
            snapshot = snapshot.len(),
            filtered = filtered.len(),
            page = pagination.current_page,
            total_pages = pagination.total_pages,
            "dashboard recomputed"
        );

        Self {
            genres,
            stats,
            pagination,
            page,
            filtered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookStatus;

    fn snapshot() -> Vec<BookRecord> {
        let mut books = Vec::new();
        for i in 0..12 {
            let (genre, status) = if i % 3 == 0 {
                ("Fantasy", BookStatus::Issued)
            } else {
                ("Fiction", BookStatus::Available)
            };
            books.push(BookRecord::new(format!("Book {i}"), "Author", genre, 1950 + i, status));
        }
        books
    }

    #[test]
    fn test_genres_come_from_unfiltered_snapshot() {
        let criteria = FilterCriteria::new().with_genre("Fantasy");
        let view = DashboardView::compute(&snapshot(), &criteria, 1, 10);
        assert_eq!(view.genres, ["Fantasy", "Fiction"]);
        assert_eq!(view.stats.total_books, 4);
        assert_eq!(view.stats.issued_books, 4);
        assert_eq!(view.pagination.total_pages, 1);
        assert_eq!(view.page.len(), 4);
    }

    #[test]
    fn test_page_and_stats_are_independent() {
        let view = DashboardView::compute(&snapshot(), &FilterCriteria::default(), 2, 10);
        assert_eq!(view.stats.total_books, 12);
        assert_eq!(view.pagination.total_pages, 2);
        assert_eq!(view.page.len(), 2);
        assert_eq!(view.filtered.len(), 12);
    }

    #[test]
    fn test_empty_snapshot() {
        let view = DashboardView::compute(&[], &FilterCriteria::default(), 1, 10);
        assert!(view.genres.is_empty());
        assert!(view.page.is_empty());
        assert_eq!(view.pagination.total_pages, 0);
        assert_eq!(view.stats, BookStats::default());
    }
}
