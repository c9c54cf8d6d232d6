//! The library store
//!
//! Owns the ordered collection of book records and keeps it in sync with
//! a single JSON backing file: every successful mutation rewrites the
//! whole file to match memory. There is no partial write or log; the
//! store is built for the one-read, one-operation, one-write lifetime of
//! a single CLI invocation, not for long-running use.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::errors::{CatalogError, CatalogResult};
use super::record::{Record, Status};

/// Optional filters for [`Store::search`].
///
/// Absent filters match everything; present filters are AND-composed.
/// Title and author match by case-sensitive literal substring, year by
/// exact equality.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i64>,
}

impl SearchFilter {
    fn matches(&self, record: &Record) -> bool {
        if let Some(title) = &self.title {
            if !record.title.contains(title.as_str()) {
                return false;
            }
        }
        if let Some(author) = &self.author {
            if !record.author.contains(author.as_str()) {
                return false;
            }
        }
        if let Some(year) = self.year {
            if record.year != year {
                return false;
            }
        }
        true
    }
}

/// JSON file-backed collection of book records
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    records: Vec<Record>,
}

impl Store {
    /// Open the store at the given path.
    ///
    /// If no file exists there, starts with an empty collection and
    /// immediately writes it out, establishing the file. If the file
    /// exists but does not parse as a list of records (wrong top-level
    /// shape, missing field, wrong type, unknown status), fails with
    /// [`CatalogError::MalformedStorage`]; the store must not be used
    /// in that case.
    pub fn open(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            let store = Self {
                path,
                records: Vec::new(),
            };
            store.persist()?;
            return Ok(store);
        }

        let content = fs::read_to_string(&path)?;
        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(|_| CatalogError::MalformedStorage)?;

        Ok(Self { path, records })
    }

    /// Rewrite the backing file from the in-memory collection
    fn persist(&self) -> CatalogResult<()> {
        let content = serde_json::to_string_pretty(&self.records)
            .map_err(|e| CatalogError::Io(e.to_string()))?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Add a new book to the end of the collection.
    ///
    /// Generates a fresh uuid-v4 id, sets status to `IN_STOCK`, persists,
    /// and returns a copy of the created record. Duplicate titles,
    /// authors, and years are permitted.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
    ) -> CatalogResult<Record> {
        let record = Record {
            id: Uuid::new_v4().to_string(),
            status: Status::InStock,
            title: title.into(),
            author: author.into(),
            year,
        };
        self.records.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Remove the book with the given id.
    ///
    /// Returns the removed record, or [`CatalogError::RecordNotFound`]
    /// with no mutation and no persist if the id is unknown.
    pub fn delete(&mut self, id: &str) -> CatalogResult<Record> {
        match self.find_by_id(id) {
            Some(index) => {
                let removed = self.records.remove(index);
                self.persist()?;
                Ok(removed)
            }
            None => Err(CatalogError::RecordNotFound(id.to_string())),
        }
    }

    /// Return the records matching the filter, in insertion order.
    ///
    /// Never mutates and never persists; an empty filter returns every
    /// record.
    pub fn search(&self, filter: &SearchFilter) -> Vec<&Record> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }

    /// Change the status of the book with the given id.
    ///
    /// Fails with [`CatalogError::RecordNotFound`] for an unknown id and
    /// with [`CatalogError::NoStatusChange`] if the book already has the
    /// requested status; neither failure mutates or persists. On success
    /// persists and returns a copy of the updated record.
    pub fn change_status(&mut self, id: &str, new_status: Status) -> CatalogResult<Record> {
        let index = self
            .find_by_id(id)
            .ok_or_else(|| CatalogError::RecordNotFound(id.to_string()))?;

        if self.records[index].status == new_status {
            return Err(CatalogError::NoStatusChange);
        }

        self.records[index].status = new_status;
        self.persist()?;
        Ok(self.records[index].clone())
    }

    /// The full collection, in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Delete the backing file entirely.
    ///
    /// Intended for teardown / full reset. The in-memory collection is
    /// left untouched and therefore stale: a later mutating call on this
    /// store would recreate the file from stale memory. Callers must
    /// reopen the store instead of continuing to use it.
    pub fn destroy_storage(&self) -> CatalogResult<()> {
        fs::remove_file(&self.path)?;
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, Store) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = Store::open(dir.path().join("data.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_open_establishes_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        assert!(!path.exists());

        let store = Store::open(&path).unwrap();
        assert!(path.exists());
        assert!(store.records().is_empty());
    }

    #[test]
    fn test_add_defaults_to_in_stock() {
        let (_dir, mut store) = temp_store();
        let record = store.add("Dune", "Frank Herbert", 1965).unwrap();

        assert_eq!(record.status, Status::InStock);
        assert_eq!(record.title, "Dune");
        assert_eq!(record.author, "Frank Herbert");
        assert_eq!(record.year, 1965);
        assert_eq!(store.records(), &[record]);
    }

    #[test]
    fn test_delete_unknown_id_leaves_collection_unchanged() {
        let (_dir, mut store) = temp_store();
        store.add("Dune", "Frank Herbert", 1965).unwrap();

        let result = store.delete("");
        assert!(matches!(result, Err(CatalogError::RecordNotFound(_))));
        assert_eq!(store.records().len(), 1);
    }

    #[test]
    fn test_change_status_rejects_redundant_change() {
        let (_dir, mut store) = temp_store();
        let record = store.add("Dune", "Frank Herbert", 1965).unwrap();

        let result = store.change_status(&record.id, Status::InStock);
        assert!(matches!(result, Err(CatalogError::NoStatusChange)));
        assert_eq!(store.records()[0].status, Status::InStock);
    }

    #[test]
    fn test_change_status_mutates_in_place() {
        let (_dir, mut store) = temp_store();
        let record = store.add("Dune", "Frank Herbert", 1965).unwrap();

        let changed = store.change_status(&record.id, Status::CheckedOut).unwrap();
        assert_eq!(changed.status, Status::CheckedOut);
        assert_eq!(changed.id, record.id);
        assert_eq!(store.records().len(), 1);
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let (_dir, mut store) = temp_store();
        store.add("Dune", "Frank Herbert", 1965).unwrap();
        store.add("Hyperion", "Dan Simmons", 1989).unwrap();

        let matches = store.search(&SearchFilter::default());
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_search_is_case_sensitive_substring() {
        let (_dir, mut store) = temp_store();
        store.add("Dune", "Frank Herbert", 1965).unwrap();

        let filter = SearchFilter {
            title: Some("une".to_string()),
            ..Default::default()
        };
        assert_eq!(store.search(&filter).len(), 1);

        let filter = SearchFilter {
            title: Some("dune".to_string()),
            ..Default::default()
        };
        assert!(store.search(&filter).is_empty());
    }
}
