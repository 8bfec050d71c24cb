//! Shared test utilities for the photo-archive test suite.
//!
//! Builders for library items and records, and an in-memory library with
//! independent favorites and all-items collections.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let library = MemoryLibrary {
//!     favorites: vec![item("a", "DSCF0001.JPG", true)],
//!     all: vec![item("a", "DSCF0001.JPG", true), item("b", "IMG_0002.HEIC", false)],
//! };
//! ```

use chrono::{DateTime, Utc};

use crate::library::{LibraryItem, PhotoSource, SourceError};
use crate::record::PhotoRecord;

/// Capture date used when a test doesn't care about it.
pub const DEFAULT_DATE: &str = "2023-04-05T00:00:00Z";

// =========================================================================
// Builders
// =========================================================================

/// An item dated [`DEFAULT_DATE`].
pub fn item(id: &str, filename: &str, favorite: bool) -> LibraryItem {
    item_at(id, filename, DEFAULT_DATE, favorite)
}

/// An item with an explicit RFC 3339 capture date.
pub fn item_at(id: &str, filename: &str, date: &str, favorite: bool) -> LibraryItem {
    LibraryItem {
        id: id.to_string(),
        filename: filename.to_string(),
        date: DateTime::parse_from_rfc3339(date)
            .unwrap_or_else(|e| panic!("bad test date '{date}': {e}")),
        favorite,
    }
}

/// A bare record dated [`DEFAULT_DATE`], without optional fields.
pub fn record(id: &str, filename: &str) -> PhotoRecord {
    PhotoRecord {
        id: id.to_string(),
        date: DateTime::parse_from_rfc3339(DEFAULT_DATE)
            .unwrap()
            .with_timezone(&Utc),
        favorite: None,
        original_filename: filename.to_string(),
        archive_path: None,
    }
}

/// Ids of records, in order.
pub fn record_ids(records: &[PhotoRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

// =========================================================================
// In-memory library
// =========================================================================

/// A library whose two collections are given independently, the way the
/// Photos app keeps the favorites album apart from the item list.
#[derive(Debug, Clone, Default)]
pub struct MemoryLibrary {
    pub favorites: Vec<LibraryItem>,
    pub all: Vec<LibraryItem>,
}

impl PhotoSource for MemoryLibrary {
    type Item = LibraryItem;

    fn favorites(&self) -> Result<Vec<LibraryItem>, SourceError> {
        Ok(self.favorites.clone())
    }

    fn all_items(&self) -> Result<Vec<LibraryItem>, SourceError> {
        Ok(self.all.clone())
    }
}

/// A library that fails every query.
pub struct BrokenLibrary;

impl PhotoSource for BrokenLibrary {
    type Item = LibraryItem;

    fn favorites(&self) -> Result<Vec<LibraryItem>, SourceError> {
        Err(SourceError::ScriptFailed {
            exit_code: Some(1),
            stderr: "Photos is not running".into(),
        })
    }

    fn all_items(&self) -> Result<Vec<LibraryItem>, SourceError> {
        self.favorites()
    }
}
