//! CLI argument definitions using clap
//!
//! Commands:
//! - shelfdb add -t <title> -a <author> -y <year>
//! - shelfdb delete -i <id>
//! - shelfdb search [-t <title>] [-a <author>] [-y <year>]
//! - shelfdb show
//! - shelfdb change -i <id> -s <s|c>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shelfdb - a personal library catalog backed by a single JSON file
#[derive(Parser, Debug)]
#[command(name = "shelfdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the library file
    #[arg(long, default_value = "data.json", global = true)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a book to the library
    Add {
        /// Book title
        #[arg(short = 't', long)]
        title: String,

        /// Book author
        #[arg(short = 'a', long)]
        author: String,

        /// Publication year
        #[arg(short = 'y', long)]
        year: i64,
    },

    /// Delete a book by id
    Delete {
        /// Book id
        #[arg(short = 'i', long)]
        id: String,
    },

    /// Search books by title, author, and/or year
    Search {
        /// Title or part of a title
        #[arg(short = 't', long)]
        title: Option<String>,

        /// Author name or part of a name
        #[arg(short = 'a', long)]
        author: Option<String>,

        /// Publication year
        #[arg(short = 'y', long)]
        year: Option<i64>,
    },

    /// Show all books
    Show,

    /// Change the status of a book
    Change {
        /// Book id
        #[arg(short = 'i', long)]
        id: String,

        /// New status: 's' for in stock, 'c' for checked out
        #[arg(short = 's', long)]
        status: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
