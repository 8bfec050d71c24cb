//! Date-partitioned archive paths for exported originals.
//!
//! Every photo gets a relative path derived from its capture date (in UTC) and
//! its filename:
//!
//! ```text
//! {year}/{year}-{month}/{year}-{month}-{day}/{year}{month}{day}-{basename}
//! 2023/2023-04/2023-04-05/20230405-DSCF0001.JPG
//! ```
//!
//! ## Re-imported files
//!
//! Originals that went through the archive once already carry the
//! `YYYYMMDD-` prefix in their filename. When such a file is imported back
//! into the library the prefix is stripped before deriving the path again, so
//! `20230405-DSCF0001.JPG` and `DSCF0001.JPG` land on the same archive path.

use chrono::{DateTime, Datelike, TimeZone, Utc};

/// Length of the `YYYYMMDD-` prefix written by [`archive_path`].
const DATE_PREFIX_LEN: usize = 9;

/// Strip a leading `YYYYMMDD-` prefix from a filename, if present.
///
/// - `"20230405-DSCF0001.JPG"` → `"DSCF0001.JPG"`
/// - `"DSCF0001.JPG"` → `"DSCF0001.JPG"`
/// - `"2023-DSCF0001.JPG"` → unchanged (not eight digits)
/// - `"20230405-"` → `""`
pub fn strip_date_prefix(filename: &str) -> &str {
    let bytes = filename.as_bytes();
    let has_prefix = bytes.len() >= DATE_PREFIX_LEN
        && bytes[..DATE_PREFIX_LEN - 1].iter().all(u8::is_ascii_digit)
        && bytes[DATE_PREFIX_LEN - 1] == b'-';
    if has_prefix {
        &filename[DATE_PREFIX_LEN..]
    } else {
        filename
    }
}

/// Derive the archive path for a photo taken at `date` named `filename`.
///
/// The date is normalized to UTC before it is split into components, so the
/// same instant always maps to the same directory regardless of the offset
/// the library reports it in.
pub fn archive_path<Tz: TimeZone>(date: &DateTime<Tz>, filename: &str) -> String {
    let utc = date.with_timezone(&Utc);
    let (year, month, day) = (utc.year(), utc.month(), utc.day());
    let basename = strip_date_prefix(filename);
    format!(
        "{year:04}/{year:04}-{month:02}/{year:04}-{month:02}-{day:02}/{year:04}{month:02}{day:02}-{basename}"
    )
}
