//! # photo-archive
//!
//! Lists the camera photos in a Photos library, each with the path it should
//! be archived under.
//!
//! # Pipeline
//!
//! One pass, no state kept between runs:
//!
//! ```text
//! query      library   →  items       (favorites album or all items)
//! normalize  items     →  records     (id, date, favorite, filename)
//! derive     records   →  records     (+ archive path)
//! filter     records   →  records     (camera originals only)
//! serialize  records   →  stdout      (pretty JSON)
//! ```
//!
//! Any failure aborts the run before anything is written to stdout.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`library`] | `PhotoItem`/`PhotoSource` traits, the Photos app and snapshot backends |
//! | [`record`] | `PhotoRecord` and item normalization |
//! | [`archive`] | Date-partitioned archive path derivation |
//! | [`camera`] | Camera filename detection and filtering |
//! | [`pipeline`] | Runs the steps above in order |
//! | [`config`] | `photo-archive.toml` loading, merging, and validation |
//! | [`output`] | JSON listing on stdout, summary on stderr |
//!
//! # Archive Layout
//!
//! ```text
//! 2023/
//! └── 2023-04/
//!     └── 2023-04-05/
//!         ├── 20230405-DSCF0001.JPG
//!         └── 20230405-R0012345.JPG
//! ```
//!
//! Dates are bucketed in UTC so the layout doesn't depend on the time zone
//! of the machine doing the export.

pub mod archive;
pub mod camera;
pub mod config;
pub mod library;
pub mod output;
pub mod pipeline;
pub mod record;

#[cfg(test)]
pub(crate) mod test_helpers;
