//! Error types for archive ingestion

use thiserror::Error;

/// Errors that can occur while reading or writing optimization archives
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Line {line} has {found} columns, layout expects {expected}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unknown column header: {0}")]
    UnknownColumn(String),
}

/// Result type alias for archive operations
pub type Result<T> = std::result::Result<T, ArchiveError>;
