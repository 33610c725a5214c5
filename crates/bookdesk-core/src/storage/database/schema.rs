use rusqlite::Connection;

use crate::error::Result;

pub fn apply_pragmas(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        ",
    )?;
    Ok(())
}

/// Rows are listed by `rowid`, which keeps insertion order; upserts go
/// through `ON CONFLICT DO UPDATE` so an edited book keeps its position.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS books (
            id             TEXT PRIMARY KEY,
            title          TEXT NOT NULL,
            author         TEXT NOT NULL,
            genre          TEXT NOT NULL,
            published_year INTEGER NOT NULL,
            status         TEXT NOT NULL DEFAULT 'Available'
                           CHECK (status IN ('Available', 'Issued')),
            created_at     TEXT NOT NULL,
            updated_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_books_genre  ON books(genre);
        CREATE INDEX IF NOT EXISTS idx_books_status ON books(status);
        ",
    )?;
    Ok(())
}
