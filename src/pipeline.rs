//! The listing pipeline: query → normalize → derive path → filter.
//!
//! Serialization is left to [`crate::output`], so a listing is only printed
//! once every step has succeeded.

use crate::camera::retain_camera_photos;
use crate::config::Config;
use crate::library::{PhotoSource, SourceError, SourceMode};
use crate::record::{PhotoRecord, normalize};

/// Result of one run of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// Collection that was queried.
    pub mode: SourceMode,
    /// Number of items the library returned.
    pub queried: usize,
    /// Records that survived filtering, in library order.
    pub records: Vec<PhotoRecord>,
}

/// Query `source` for the `mode` collection and turn its items into records.
pub fn list_photos<S: PhotoSource>(
    source: &S,
    mode: SourceMode,
    config: &Config,
) -> Result<Listing, SourceError> {
    let items = source.query(mode)?;
    let queried = items.len();
    tracing::debug!(%mode, queried, "library query finished");

    let records: Vec<PhotoRecord> = items
        .iter()
        .map(|item| normalize(item, &config.record))
        .collect();

    let records = if config.filter.camera_only {
        retain_camera_photos(records)
    } else {
        records
    };
    tracing::info!(%mode, queried, kept = records.len(), "listed photos");

    Ok(Listing {
        mode,
        queried,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn library() -> MemoryLibrary {
        MemoryLibrary {
            favorites: vec![
                item("2", "R0000002.JPG", true),
                item("4", "IMG_0004.HEIC", true),
            ],
            all: vec![
                item("1", "DSCF0001.JPG", false),
                item("2", "R0000002.JPG", true),
                item("3", "Screenshot.png", false),
                item("4", "IMG_0004.HEIC", true),
                item("5", "20230405-DSCF0005.JPG", false),
            ],
        }
    }

    #[test]
    fn all_mode_keeps_camera_photos_in_order() {
        let listing = list_photos(&library(), SourceMode::All, &Config::default()).unwrap();
        assert_eq!(listing.mode, SourceMode::All);
        assert_eq!(listing.queried, 5);
        assert_eq!(record_ids(&listing.records), vec!["1", "2", "5"]);
    }

    #[test]
    fn favorites_mode_only_returns_favorites_collection() {
        let library = library();
        let listing = list_photos(&library, SourceMode::Favorites, &Config::default()).unwrap();
        assert_eq!(listing.queried, 2);
        assert_eq!(record_ids(&listing.records), vec!["2"]);
        for record in &listing.records {
            assert!(library.favorites.iter().any(|i| i.id == record.id));
        }
    }

    #[test]
    fn favorites_mode_trusts_the_album_not_the_flag() {
        // An item flagged favorite but absent from the album is not listed.
        let library = MemoryLibrary {
            favorites: vec![],
            all: vec![item("1", "DSCF0001.JPG", true)],
        };
        let listing = list_photos(&library, SourceMode::Favorites, &Config::default()).unwrap();
        assert!(listing.records.is_empty());
    }

    #[test]
    fn filter_can_be_disabled() {
        let mut config = Config::default();
        config.filter.camera_only = false;
        let listing = list_photos(&library(), SourceMode::All, &config).unwrap();
        assert_eq!(record_ids(&listing.records), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn records_carry_archive_paths() {
        let listing = list_photos(&library(), SourceMode::All, &Config::default()).unwrap();
        let paths: Vec<&str> = listing
            .records
            .iter()
            .map(|r| r.archive_path.as_deref().unwrap())
            .collect();
        assert_eq!(
            paths,
            vec![
                "2023/2023-04/2023-04-05/20230405-DSCF0001.JPG",
                "2023/2023-04/2023-04-05/20230405-R0000002.JPG",
                "2023/2023-04/2023-04-05/20230405-DSCF0005.JPG",
            ]
        );
    }

    #[test]
    fn favorites_variant_config_drops_favorite_flag() {
        let mut config = Config::default();
        config.source.default = SourceMode::Favorites;
        config.record.favorite = false;
        let mode = config.resolve_mode(None);
        let listing = list_photos(&library(), mode, &config).unwrap();
        assert_eq!(listing.mode, SourceMode::Favorites);
        assert!(listing.records.iter().all(|r| r.favorite.is_none()));
        assert!(listing.records.iter().all(|r| r.archive_path.is_some()));
    }

    #[test]
    fn empty_library_gives_empty_listing() {
        let listing =
            list_photos(&MemoryLibrary::default(), SourceMode::All, &Config::default()).unwrap();
        assert_eq!(listing.queried, 0);
        assert!(listing.records.is_empty());
    }

    #[test]
    fn library_errors_propagate() {
        let result = list_photos(&BrokenLibrary, SourceMode::All, &Config::default());
        assert!(matches!(result, Err(SourceError::ScriptFailed { .. })));
    }
}
