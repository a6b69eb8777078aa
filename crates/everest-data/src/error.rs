//! Persistence errors

use everest_core::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored record was too malformed to parse; carries the 1-based
    /// line number of the offending row.
    #[error("Malformed record in {file} on line {line}: {message}")]
    Format {
        file: String,
        line: usize,
        message: String,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}
