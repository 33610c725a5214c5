use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::models::BookRecord;

pub const CSV_HEADERS: [&str; 5] = ["Title", "Author", "Genre", "Published Year", "Status"];

/// File stem used when the caller does not name the export.
pub const DEFAULT_EXPORT_STEM: &str = "books";

/// Render `books` as CSV: a header row, then one row per record. Text
/// fields are double-quoted, the year is bare, rows are `\n`-separated
/// with no trailing newline.
pub fn generate_csv(books: &[BookRecord]) -> String {
    let mut lines = Vec::with_capacity(books.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    for book in books {
        lines.push(csv_row(book));
    }
    lines.join("\n")
}

fn csv_row(book: &BookRecord) -> String {
    [
        quote(&book.title),
        quote(&book.author),
        quote(&book.genre),
        book.published_year.to_string(),
        quote(book.status.as_str()),
    ]
    .join(",")
}

/// Wrap in double quotes, doubling any embedded quote.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// `<stem>.csv`, falling back to the default stem when `stem` is blank.
pub fn csv_file_name(stem: &str) -> String {
    let stem = stem.trim();
    let stem = if stem.is_empty() { DEFAULT_EXPORT_STEM } else { stem };
    format!("{stem}.csv")
}

/// Write the CSV for `books` into `dir/<stem>.csv` and return the path.
pub fn write_csv(dir: &Path, stem: &str, books: &[BookRecord]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(csv_file_name(stem));
    fs::write(&path, generate_csv(books))?;
    info!(path = %path.display(), rows = books.len(), "exported books to CSV");
    Ok(path)
}
