//! CLI-specific error types

use thiserror::Error;

use crate::catalog::CatalogError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// A status shorthand outside the accepted set was supplied
    #[error("Invalid status '{0}': expected 's' (in stock) or 'c' (checked out)")]
    InvalidStatusShorthand(String),

    /// Error surfaced by the catalog store
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
