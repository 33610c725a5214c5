//! Pure transforms over a snapshot of book records. Every function here is
//! synchronous and side-effect free; callers recompute on each change.

mod aggregate;
mod dashboard;
mod filter;
mod genre_index;
mod paginate;

pub use aggregate::calculate_book_stats;
pub use dashboard::DashboardView;
pub use filter::filter_books;
pub use genre_index::unique_genres;
pub use paginate::paginate_books;
