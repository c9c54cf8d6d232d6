//! Catalog module for shelfdb
//!
//! The core of the system: the book record type and the JSON file-backed
//! store that owns the collection, enforces id uniqueness and status
//! transitions, and rewrites the backing file after every mutation.

mod errors;
mod record;
mod store;

pub use errors::{CatalogError, CatalogResult};
pub use record::{Record, Status};
pub use store::{SearchFilter, Store};
