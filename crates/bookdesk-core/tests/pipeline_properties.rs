use bookdesk_core::{
    BookRecord, BookStats, BookStatus, DashboardView, FilterCriteria, calculate_book_stats,
    filter_books, paginate_books, seed_books, total_pages, unique_genres,
};
use proptest::prelude::*;

const GENRES: [&str; 5] = ["Fiction", "Fantasy", "Adventure", "Gothic Fiction", "Romance"];

fn arb_book() -> impl Strategy<Value = BookRecord> {
    (
        "[A-Za-z ]{1,16}",
        "[A-Za-z ]{1,16}",
        prop::sample::select(GENRES.to_vec()),
        -3000i32..2100,
        any::<bool>(),
    )
        .prop_map(|(title, author, genre, year, issued)| {
            let status = if issued { BookStatus::Issued } else { BookStatus::Available };
            BookRecord::new(title, author, genre, year, status)
        })
}

fn arb_books() -> impl Strategy<Value = Vec<BookRecord>> {
    prop::collection::vec(arb_book(), 0..60)
}

proptest! {
    #[test]
    fn empty_criteria_is_identity(books in arb_books()) {
        prop_assert_eq!(filter_books(&books, &FilterCriteria::default()), books);
    }

    #[test]
    fn genre_filter_keeps_only_that_genre(books in arb_books(), pick in 0usize..5) {
        let genre = GENRES[pick];
        let out = filter_books(&books, &FilterCriteria::new().with_genre(genre));
        prop_assert!(out.iter().all(|b| b.genre == genre));
        prop_assert_eq!(out.len(), books.iter().filter(|b| b.genre == genre).count());
    }

    #[test]
    fn filter_preserves_relative_order(books in arb_books()) {
        let out = filter_books(&books, &FilterCriteria::new().with_status(Some(BookStatus::Issued)));
        let positions: Vec<usize> = out
            .iter()
            .map(|b| books.iter().position(|x| x.id == b.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn status_counts_sum_to_total(books in arb_books()) {
        let stats = calculate_book_stats(&books);
        prop_assert_eq!(stats.available_books + stats.issued_books, stats.total_books);
        prop_assert_eq!(stats.total_books, books.len());
    }

    #[test]
    fn distributions_cover_every_record(books in arb_books()) {
        let stats = calculate_book_stats(&books);
        let genre_total: usize = stats.genre_distribution.iter().map(|g| g.count).sum();
        let year_total: usize = stats.year_distribution.iter().map(|y| y.count).sum();
        prop_assert_eq!(genre_total, books.len());
        prop_assert_eq!(year_total, books.len());
    }

    #[test]
    fn year_distribution_is_strictly_ascending(books in arb_books()) {
        let stats = calculate_book_stats(&books);
        prop_assert!(stats.year_distribution.windows(2).all(|w| w[0].year < w[1].year));
    }

    #[test]
    fn pages_reconstruct_the_list(books in arb_books(), page_size in 1usize..15) {
        let pages = total_pages(books.len(), page_size);
        let mut joined = Vec::new();
        for page in 1..=pages {
            let slice = paginate_books(&books, page, page_size);
            prop_assert!(!slice.is_empty());
            joined.extend_from_slice(slice);
        }
        prop_assert_eq!(joined, books.clone());
        prop_assert!(paginate_books(&books, pages + 1, page_size).is_empty());
    }

    #[test]
    fn genre_index_is_sorted_and_distinct(books in arb_books()) {
        let genres = unique_genres(&books);
        prop_assert!(genres.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(books.iter().all(|b| genres.contains(&b.genre)));
    }
}

fn orwell_and_huxley() -> Vec<BookRecord> {
    vec![
        BookRecord::new("1984", "George Orwell", "Dystopian Fiction", 1949, BookStatus::Available),
        BookRecord::new("Brave New World", "Aldous Huxley", "Science Fiction", 1932, BookStatus::Issued),
    ]
}

#[test]
fn search_orwell_returns_only_1984() {
    let out = filter_books(&orwell_and_huxley(), &FilterCriteria::new().with_search("orwell"));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title, "1984");
}

#[test]
fn twenty_five_records_make_three_pages() {
    let books = seed_books();
    assert_eq!(books.len(), 25);
    assert_eq!(total_pages(books.len(), 10), 3);
    assert_eq!(paginate_books(&books, 3, 10).len(), 5);
}

#[test]
fn empty_list_has_zero_stats() {
    let stats = calculate_book_stats(&[]);
    assert_eq!(
        stats,
        BookStats {
            total_books: 0,
            available_books: 0,
            issued_books: 0,
            genre_distribution: vec![],
            year_distribution: vec![],
        }
    );
    assert_eq!(total_pages(0, 10), 0);
}

#[test]
fn seed_catalog_dashboard() {
    let books = seed_books();
    let view = DashboardView::compute(&books, &FilterCriteria::default(), 1, 10);

    assert_eq!(view.stats.total_books, 25);
    assert_eq!(view.stats.available_books, 17);
    assert_eq!(view.stats.issued_books, 8);
    assert_eq!(view.stats.genre_distribution[0].genre, "Fiction");
    assert_eq!(view.stats.genre_distribution[0].count, 3);
    assert_eq!(view.stats.year_distribution[0].year, -800);
    assert_eq!(view.genres.first().map(String::as_str), Some("Adventure"));
    assert_eq!(view.pagination.total_pages, 3);
    assert_eq!(view.page.len(), 10);

    let tolkien = DashboardView::compute(&books, &FilterCriteria::new().with_search("tolkien"), 1, 10);
    assert_eq!(tolkien.stats.total_books, 2);
    assert_eq!(tolkien.genres, view.genres);
}
