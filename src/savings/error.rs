//! Savings error types
//!
//! Errors that can occur while constructing or loading savings entries.
//! The transform itself is total and never fails.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the savings layer
#[derive(Error, Debug)]
pub enum SavingsError {
    /// Date string is not a valid `YYYY-MM-DD` calendar date
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// Data file could not be read
    #[error("Failed to read savings file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// Data file is not a JSON array of savings entries
    #[error(
        "Failed to parse savings file {path:?}: {error} (each entry needs a YYYY-MM-DD date and an amount in whole dollars)"
    )]
    Parse { path: PathBuf, error: String },
}

/// Result type alias for savings operations
pub type SavingsResult<T> = Result<T, SavingsError>;
