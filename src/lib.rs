//! shelfdb - a small personal library catalog backed by a single JSON file

pub mod catalog;
pub mod cli;
