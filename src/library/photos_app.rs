//! The macOS Photos app as a photo source.
//!
//! Photos has no library API outside of Apple's frameworks, but it does have
//! a scripting dictionary. We drive it with JavaScript for Automation through
//! `osascript`, and have the script do the accessor calls on the Photos side
//! and hand back plain JSON. One `osascript` process per query.

use std::process::Command;

use super::{LibraryItem, PhotoSource, SourceError, SourceMode, parse_items};

/// JXA program run by `osascript`. Its only argument is the source mode.
const QUERY_SCRIPT: &str = r#"function run(argv) {
  const photos = Application("Photos");
  const items = argv[0] === "favorites"
    ? photos.favoritesAlbum().mediaItems()
    : photos.mediaItems();
  return JSON.stringify(items.map((item) => ({
    id: item.id(),
    filename: item.filename(),
    date: item.date().toISOString(),
    favorite: item.favorite(),
  })));
}"#;

/// Queries the Photos app through `osascript -l JavaScript`.
#[derive(Debug, Clone)]
pub struct PhotosApp {
    osascript: String,
}

impl PhotosApp {
    /// `osascript` is the program to run; normally just `"osascript"`.
    pub fn new(osascript: impl Into<String>) -> Self {
        Self {
            osascript: osascript.into(),
        }
    }

    fn run_query(&self, mode: SourceMode) -> Result<Vec<LibraryItem>, SourceError> {
        tracing::debug!(program = %self.osascript, %mode, "querying Photos");

        let output = Command::new(&self.osascript)
            .args(["-l", "JavaScript", "-e", QUERY_SCRIPT, mode.as_str()])
            .output()
            .map_err(|source| SourceError::Spawn {
                program: self.osascript.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SourceError::ScriptFailed {
                exit_code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_items(stdout.trim())
    }
}

impl PhotoSource for PhotosApp {
    type Item = LibraryItem;

    fn favorites(&self) -> Result<Vec<LibraryItem>, SourceError> {
        self.run_query(SourceMode::Favorites)
    }

    fn all_items(&self) -> Result<Vec<LibraryItem>, SourceError> {
        self.run_query(SourceMode::All)
    }
}
