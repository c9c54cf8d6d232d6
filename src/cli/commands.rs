//! CLI command implementations
//!
//! Each command opens the store, performs exactly one operation, and
//! prints the outcome; the process then exits. The store itself never
//! prints and never maps errors, that all happens here.

use std::path::Path;

use crate::catalog::{SearchFilter, Status, Store};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::table;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(&cli.file, cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(file: &Path, cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Add {
            title,
            author,
            year,
        } => add(file, title, author, year),
        Command::Delete { id } => delete(file, &id),
        Command::Search {
            title,
            author,
            year,
        } => search(file, title, author, year),
        Command::Show => show(file),
        Command::Change { id, status } => change(file, &id, &status),
    }
}

/// Add a book and print it
pub fn add(file: &Path, title: String, author: String, year: i64) -> CliResult<()> {
    let mut store = Store::open(file)?;
    let record = store.add(title, author, year)?;

    println!("Added the following book:");
    print!("{}", table::render(&[&record]));
    Ok(())
}

/// Delete a book by id and print it
pub fn delete(file: &Path, id: &str) -> CliResult<()> {
    let mut store = Store::open(file)?;
    let record = store.delete(id)?;

    println!("Deleted the following book:");
    print!("{}", table::render(&[&record]));
    Ok(())
}

/// Search books and print the matches
pub fn search(
    file: &Path,
    title: Option<String>,
    author: Option<String>,
    year: Option<i64>,
) -> CliResult<()> {
    let store = Store::open(file)?;
    let filter = SearchFilter {
        title,
        author,
        year,
    };

    print!("{}", table::render(&store.search(&filter)));
    Ok(())
}

/// Print the full collection
pub fn show(file: &Path) -> CliResult<()> {
    let store = Store::open(file)?;
    let records: Vec<_> = store.records().iter().collect();

    print!("{}", table::render(&records));
    Ok(())
}

/// Change a book's status and print it
///
/// The shorthand is mapped before the store is touched; anything outside
/// 's'/'c' never reaches the catalog.
pub fn change(file: &Path, id: &str, shorthand: &str) -> CliResult<()> {
    let status = parse_status_shorthand(shorthand)?;

    let mut store = Store::open(file)?;
    let record = store.change_status(id, status)?;

    println!("Changed book status:");
    print!("{}", table::render(&[&record]));
    Ok(())
}

fn parse_status_shorthand(shorthand: &str) -> CliResult<Status> {
    match shorthand {
        "s" => Ok(Status::InStock),
        "c" => Ok(Status::CheckedOut),
        other => Err(CliError::InvalidStatusShorthand(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_mapping() {
        assert_eq!(parse_status_shorthand("s").unwrap(), Status::InStock);
        assert_eq!(parse_status_shorthand("c").unwrap(), Status::CheckedOut);
    }

    #[test]
    fn test_bad_shorthand_carries_value() {
        let err = parse_status_shorthand("x").unwrap_err();
        match err {
            CliError::InvalidStatusShorthand(value) => assert_eq!(value, "x"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
