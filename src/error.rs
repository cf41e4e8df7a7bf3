//! Error types for boardview.

use thiserror::Error;

use crate::validation::ValidationError;

/// Common error type for boardview.
#[derive(Error, Debug)]
pub enum BoardviewError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Resource already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Seed data could not be read.
    #[error("seed error: {0}")]
    Seed(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<ValidationError> for BoardviewError {
    fn from(e: ValidationError) -> Self {
        BoardviewError::Validation(e.to_string())
    }
}

impl From<serde_json::Error> for BoardviewError {
    fn from(e: serde_json::Error) -> Self {
        BoardviewError::Seed(e.to_string())
    }
}

/// Result type alias for boardview operations.
pub type Result<T> = std::result::Result<T, BoardviewError>;
