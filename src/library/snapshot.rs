//! A library snapshot on disk.
//!
//! A snapshot is the JSON array the Photos backend emits, saved to a file
//! (for instance with `osascript` on a Mac, then copied elsewhere). The
//! favorites album is every item whose `favorite` flag is set.

use std::path::{Path, PathBuf};

use super::{LibraryItem, PhotoSource, SourceError, parse_items};

/// Reads items from a JSON snapshot file.
#[derive(Debug, Clone)]
pub struct Snapshot {
    path: PathBuf,
}

impl Snapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<LibraryItem>, SourceError> {
        tracing::debug!(path = %self.path.display(), "reading library snapshot");
        let content = std::fs::read_to_string(&self.path)?;
        parse_items(&content)
    }
}

impl PhotoSource for Snapshot {
    type Item = LibraryItem;

    fn favorites(&self) -> Result<Vec<LibraryItem>, SourceError> {
        Ok(self.load()?.into_iter().filter(|i| i.favorite).collect())
    }

    fn all_items(&self) -> Result<Vec<LibraryItem>, SourceError> {
        self.load()
    }
}
