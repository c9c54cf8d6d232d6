//! Catalog error types

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog errors
///
/// The store never recovers from these internally; every kind is surfaced
/// to the caller, and a failed operation leaves the collection unchanged.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing file exists but cannot be parsed into valid records.
    /// Fatal to store construction.
    #[error("The library file is malformed and cannot be loaded")]
    MalformedStorage,

    /// No record with the given id exists
    #[error("No book with id {0} exists in the library")]
    RecordNotFound(String),

    /// The record already has the requested status
    #[error("The book already has the requested status")]
    NoStatusChange,

    /// Unexpected filesystem failure while reading or writing the backing file
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::Io(e.to_string())
    }
}
