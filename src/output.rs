//! CLI output.
//!
//! Two streams, kept strictly apart:
//!
//! - **stdout** gets the listing itself: a JSON array of records, indented
//!   with two spaces, written once at the end of a successful run.
//! - **stderr** gets the optional human-readable summary (`--summary`):
//!
//! ```text
//! Source: favorites
//! Queried 120 items, kept 37 camera photos
//!     2023-04-05: 12
//!     2023-04-06: 25
//! ```
//!
//! Each output has a `format_*` function (pure, no I/O) for testability and a
//! `print_*` wrapper that writes it out.

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::pipeline::Listing;
use crate::record::PhotoRecord;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

// ============================================================================
// Listing (stdout)
// ============================================================================

/// Render records as a pretty-printed JSON array.
pub fn format_records(records: &[PhotoRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Parse a listing produced by [`format_records`].
pub fn parse_records(json: &str) -> Result<Vec<PhotoRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Write the listing, followed by a newline.
pub fn write_records(out: &mut impl Write, records: &[PhotoRecord]) -> io::Result<()> {
    let json = format_records(records)?;
    writeln!(out, "{json}")?;
    out.flush()
}

pub fn print_records(records: &[PhotoRecord]) -> io::Result<()> {
    write_records(&mut io::stdout().lock(), records)
}

// ============================================================================
// Summary (stderr)
// ============================================================================

/// Format the summary: source, counts, and kept records per UTC day.
pub fn format_summary(listing: &Listing) -> Vec<String> {
    let mut lines = vec![
        format!("Source: {}", listing.mode),
        format!(
            "Queried {}, kept {}",
            plural(listing.queried, "item", "items"),
            plural(listing.records.len(), "photo", "photos"),
        ),
    ];

    let mut per_day: BTreeMap<String, usize> = BTreeMap::new();
    for record in &listing.records {
        *per_day
            .entry(record.date.format("%Y-%m-%d").to_string())
            .or_default() += 1;
    }
    for (day, count) in per_day {
        lines.push(format!("{}{day}: {count}", indent(1)));
    }
    lines
}

pub fn print_summary(listing: &Listing) {
    for line in format_summary(listing) {
        eprintln!("{}", line);
    }
}
