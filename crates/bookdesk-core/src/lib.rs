pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod storage;

pub use config::{AppConfig, StorageBackend};
pub use error::{BookdeskError, ExitCode, Result};
pub use models::*;

pub use pipeline::{DashboardView, calculate_book_stats, filter_books, paginate_books, unique_genres};

pub use storage::database::Database;
pub use storage::json_store::JsonBookStore;
pub use storage::repositories::{BookRepository, InMemoryBookRepository, Repository, SqliteBookRepository};
pub use storage::seed::seed_books;
