//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using ImportError.
pub type Result<T> = std::result::Result<T, ImportError>;

/// Errors that can occur while parsing a vocabulary source.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid difficulty_level '{value}' at line {line}")]
    InvalidDifficulty { line: usize, value: String },

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
}
