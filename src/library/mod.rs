//! Access to the photo library.
//!
//! The pipeline never talks to a library directly. It sees two capabilities:
//!
//! - [`PhotoItem`]: a read-only photo with four accessors (id, filename,
//!   capture date, favorite flag).
//! - [`PhotoSource`]: something that can list the favorites album or the
//!   whole library as a sequence of items.
//!
//! Two sources ship with the crate:
//!
//! | Source | Backed by |
//! |--------|-----------|
//! | [`photos_app::PhotosApp`] | The macOS Photos app, queried through `osascript` (JavaScript for Automation) |
//! | [`snapshot::Snapshot`] | A JSON file holding the same item shape, for offline use |
//!
//! Both produce [`LibraryItem`]s, the wire shape the Photos backend emits:
//!
//! ```json
//! { "id": "8F1C…/L0/001", "filename": "DSCF0001.JPG", "date": "2023-04-05T00:00:00.000Z", "favorite": true }
//! ```

pub mod photos_app;
pub mod snapshot;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("library script exited with {}: {stderr}", describe_exit(.exit_code))]
    ScriptFailed {
        exit_code: Option<i32>,
        stderr: String,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed library data: {0}")]
    Json(#[from] serde_json::Error),
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

/// Which collection of the library to list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Every media item in the library.
    #[default]
    All,
    /// Only the favorites album.
    Favorites,
}

impl SourceMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceMode::All => "all",
            SourceMode::Favorites => "favorites",
        }
    }
}

impl std::fmt::Display for SourceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A photo as the library exposes it. Read-only.
pub trait PhotoItem {
    fn id(&self) -> &str;
    fn filename(&self) -> &str;
    /// Capture date, in whatever offset the library reports.
    fn date(&self) -> DateTime<FixedOffset>;
    fn favorite(&self) -> bool;
}

/// A library that can list its favorites album and all of its items.
pub trait PhotoSource {
    type Item: PhotoItem;

    fn favorites(&self) -> Result<Vec<Self::Item>, SourceError>;

    fn all_items(&self) -> Result<Vec<Self::Item>, SourceError>;

    /// List the collection selected by `mode`.
    fn query(&self, mode: SourceMode) -> Result<Vec<Self::Item>, SourceError> {
        match mode {
            SourceMode::All => self.all_items(),
            SourceMode::Favorites => self.favorites(),
        }
    }
}

/// A photo item as exchanged with the library backends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryItem {
    pub id: String,
    pub filename: String,
    pub date: DateTime<FixedOffset>,
    #[serde(default)]
    pub favorite: bool,
}

impl PhotoItem for LibraryItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn filename(&self) -> &str {
        &self.filename
    }

    fn date(&self) -> DateTime<FixedOffset> {
        self.date
    }

    fn favorite(&self) -> bool {
        self.favorite
    }
}

/// Parse the JSON array both backends speak.
pub fn parse_items(json: &str) -> Result<Vec<LibraryItem>, SourceError> {
    Ok(serde_json::from_str(json)?)
}
