//! CLI module for shelfdb
//!
//! Provides the command-line interface:
//! - add: catalogue a new book
//! - delete: remove a book by id
//! - search: filter books by title/author/year
//! - show: list the whole library
//! - change: set a book's checkout status

mod args;
mod commands;
mod errors;
mod table;

pub use args::{Cli, Command};
pub use commands::{add, change, delete, run, run_command, search, show};
pub use errors::{CliError, CliResult};
pub use table::render;
