//! Camera photo detection.
//!
//! Only files straight off the cameras are worth archiving. Those are
//! recognized by the cameras' default naming conventions:
//!
//! | Camera | Pattern | Example |
//! |--------|---------|---------|
//! | Fujifilm | `DSCF` + 4 digits + `.JPG` | `DSCF0042.JPG` |
//! | Ricoh GR | `R` + 7 digits + `.JPG` | `R0012345.JPG` |
//!
//! Matching is case-sensitive: the cameras always write upper case, so a
//! lower-case `dscf0042.jpg` has been renamed by something else. The
//! convention may appear anywhere in the name, so re-imported originals
//! (`20230405-DSCF0001.JPG`, see [`crate::archive`]) and names with added
//! text (`edited-DSCF0001.JPG`) still count.

use regex::Regex;
use std::sync::LazyLock;

use crate::record::PhotoRecord;

static CAMERA_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:DSCF\d{4}|R\d{7})\.JPG").unwrap());

/// Whether `filename` follows one of the camera naming conventions.
pub fn is_camera_filename(filename: &str) -> bool {
    CAMERA_FILENAME.is_match(filename)
}

/// Keep only camera photos, preserving their relative order.
pub fn retain_camera_photos(records: Vec<PhotoRecord>) -> Vec<PhotoRecord> {
    records
        .into_iter()
        .filter(|r| is_camera_filename(&r.original_filename))
        .collect()
}
