//! Plain photo records, the pipeline's output unit.
//!
//! A [`PhotoRecord`] is a flat copy of the fields read from a library item,
//! plus the derived archive path. It is what gets serialized:
//!
//! ```json
//! {
//!   "id": "8F1C…/L0/001",
//!   "date": "2023-04-05T00:00:00Z",
//!   "favorite": true,
//!   "original-filename": "DSCF0001.JPG",
//!   "archive-path": "2023/2023-04/2023-04-05/20230405-DSCF0001.JPG"
//! }
//! ```
//!
//! `favorite` and `archive-path` are optional and left out of the output
//! entirely when disabled in [`RecordConfig`](crate::config::RecordConfig).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::archive::archive_path;
use crate::config::RecordConfig;
use crate::library::PhotoItem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PhotoRecord {
    pub id: String,
    /// Capture date, normalized to UTC.
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    pub original_filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_path: Option<String>,
}

/// Copy an item's fields into a record, deriving whatever `config` asks for.
pub fn normalize<I: PhotoItem>(item: &I, config: &RecordConfig) -> PhotoRecord {
    let filename = item.filename();
    let date = item.date().with_timezone(&Utc);
    PhotoRecord {
        id: item.id().to_string(),
        date,
        favorite: config.favorite.then(|| item.favorite()),
        original_filename: filename.to_string(),
        archive_path: config.archive_path.then(|| archive_path(&date, filename)),
    }
}
