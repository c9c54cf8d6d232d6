//! Book record types
//!
//! A record carries exactly five fields: id, status, title, author, year.
//! The backing file stores records with these same field names, and load
//! is strict: a missing field, an unexpected field, or an unknown status
//! string fails deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Checkout status of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// On the shelf, available
    #[serde(rename = "IN_STOCK")]
    InStock,
    /// Currently checked out
    #[serde(rename = "CHECKED_OUT")]
    CheckedOut,
}

impl Status {
    /// Returns the wire/display form of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::InStock => "IN_STOCK",
            Status::CheckedOut => "CHECKED_OUT",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One catalogued book.
///
/// Created only by [`Store::add`](super::Store::add), which generates the
/// id and sets the initial status. Only `status` ever changes afterwards,
/// and only through [`Store::change_status`](super::Store::change_status).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    /// Unique identifier (uuid v4), immutable after creation
    pub id: String,
    /// Checkout status
    pub status: Status,
    /// Book title, uninterpreted
    pub title: String,
    /// Author name, uninterpreted
    pub author: String,
    /// Publication year, no range validation
    pub year: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_to_wire_names() {
        assert_eq!(
            serde_json::to_string(&Status::InStock).unwrap(),
            "\"IN_STOCK\""
        );
        assert_eq!(
            serde_json::to_string(&Status::CheckedOut).unwrap(),
            "\"CHECKED_OUT\""
        );
    }

    #[test]
    fn test_unknown_status_rejected() {
        let result: Result<Status, _> = serde_json::from_str("\"LOST\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_record_roundtrip() {
        let record = Record {
            id: "abc".to_string(),
            status: Status::InStock,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            year: 1965,
        };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = r#"{"id": "abc", "status": "IN_STOCK", "title": "Dune", "author": "Frank Herbert"}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_type_rejected() {
        let json = r#"{"id": "abc", "status": "IN_STOCK", "title": "Dune", "author": "Frank Herbert", "year": "1965"}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_extra_field_rejected() {
        let json = r#"{"id": "abc", "status": "IN_STOCK", "title": "Dune", "author": "Frank Herbert", "year": 1965, "isbn": "x"}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
