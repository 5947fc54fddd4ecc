//! Domain errors shared by the dashboard packages.

use thiserror::Error;

/// Errors raised by pure domain logic before anything touches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required form field was left empty or could not be read.
    #[error("{0}")]
    Validation(String),
    /// The requested action cannot run for this record.
    #[error("{0}")]
    Precondition(String),
    /// A month key was not of the form `YYYY-MM`.
    #[error("Invalid month: {0}")]
    InvalidMonth(String),
}

impl Error {
    pub fn required(field: &str) -> Self {
        Self::Validation(format!("{field} is required"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
