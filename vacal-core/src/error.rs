//! Error types for vacal.

use thiserror::Error;

/// Errors that can occur at the edges of vacal (input parsing, forms, config).
///
/// Store operations themselves never fail.
#[derive(Error, Debug)]
pub enum VacalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unknown location '{0}'")]
    UnknownLocation(String),

    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for vacal operations.
pub type VacalResult<T> = Result<T, VacalError>;
