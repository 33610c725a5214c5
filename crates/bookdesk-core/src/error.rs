use thiserror::Error;

use crate::models::BookStatus;

/// All errors that can occur in bookdesk-core.
#[derive(Debug, Error)]
pub enum BookdeskError {
    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("Duplicate book: {0}")]
    DuplicateBook(String),

    #[error("Book {id} is already {status}")]
    StatusConflict { id: String, status: BookStatus },

    #[error("Confirmation required: {0}")]
    ConfirmRequired(String),

    #[error("Unknown config key: {0}")]
    UnknownConfigKey(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl BookdeskError {
    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::BookNotFound(_) => ExitCode::NotFound,
            Self::ValidationError(_) => ExitCode::InvalidArgs,
            Self::UnknownConfigKey(_) => ExitCode::NotFound,
            Self::DuplicateBook(_) | Self::StatusConflict { .. } => ExitCode::Conflict,
            Self::ConfirmRequired(_) => ExitCode::ConfirmRequired,
            Self::Io(_) => ExitCode::FileSystemError,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Exit codes used by the `bookdesk` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    NotFound = 2,
    InvalidArgs = 3,
    FileSystemError = 4,
    Conflict = 7,
    ConfirmRequired = 8,
}

pub type Result<T> = std::result::Result<T, BookdeskError>;
