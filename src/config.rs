//! Tool configuration.
//!
//! Handles loading, validating, and merging `photo-archive.toml`. Stock
//! defaults are the base layer; a user file overrides any subset of keys.
//!
//! ## Config File Location
//!
//! The file is taken from `--config <PATH>` when given. Otherwise
//! `photo-archive.toml` in the working directory is used if it exists, and
//! the stock defaults apply when it doesn't.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [source]
//! default = "all"          # Collection listed when neither --all nor --favorites is given
//!
//! [record]
//! favorite = true          # Include the favorite flag in each record
//! archive_path = true      # Include the derived archive path
//!
//! [filter]
//! camera_only = true       # Keep only DSCF####.JPG / R#######.JPG files
//!
//! [library]
//! osascript = "osascript"  # Program used to query the Photos app
//! ```
//!
//! ## Variants
//!
//! The favorites-only listing is the same tool with a different default:
//!
//! ```toml
//! [source]
//! default = "favorites"
//!
//! [record]
//! favorite = false
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::library::SourceMode;

/// File name looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "photo-archive.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `photo-archive.toml`.
///
/// All fields have defaults matching the full listing. User config files need
/// only specify the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Which collection to list by default.
    pub source: SourceConfig,
    /// Optional record fields.
    pub record: RecordConfig,
    /// Record filtering.
    pub filter: FilterConfig,
    /// Library backend settings.
    pub library: LibraryConfig,
}

impl Config {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.library.osascript.trim().is_empty() {
            return Err(ConfigError::Validation(
                "library.osascript must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// The mode to query: the CLI flag when one was given, else the configured default.
    pub fn resolve_mode(&self, flag: Option<SourceMode>) -> SourceMode {
        flag.unwrap_or(self.source.default)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// Collection listed when no mode flag is passed.
    pub default: SourceMode,
}

/// Which optional fields each record carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecordConfig {
    pub favorite: bool,
    pub archive_path: bool,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            favorite: true,
            archive_path: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Drop everything that isn't a camera photo.
    pub camera_only: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self { camera_only: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibraryConfig {
    /// Program run to query the Photos app.
    pub osascript: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            osascript: "osascript".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(Config::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<Config, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: Config = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the effective config.
///
/// An explicit path must exist. Without one, `photo-archive.toml` in `cwd`
/// is used when present and stock defaults otherwise.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config, ConfigError> {
    let overlay = match explicit {
        Some(path) => Some(load_raw_config(path)?),
        None => {
            let implicit = cwd.join(DEFAULT_CONFIG_FILE);
            if implicit.exists() {
                Some(load_raw_config(&implicit)?)
            } else {
                None
            }
        }
    };
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `photo-archive.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# photo-archive configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Read from --config <PATH>, or from ./photo-archive.toml when present.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Source
# ---------------------------------------------------------------------------
[source]
# Collection listed when neither --all nor --favorites is passed.
# "all" lists every item in the library, "favorites" only the favorites album.
default = "all"

# ---------------------------------------------------------------------------
# Records
# ---------------------------------------------------------------------------
[record]
# Include the item's favorite flag.
favorite = true

# Include the date-partitioned archive path, e.g.
# 2023/2023-04/2023-04-05/20230405-DSCF0001.JPG
archive_path = true

# ---------------------------------------------------------------------------
# Filtering
# ---------------------------------------------------------------------------
[filter]
# Keep only camera originals (DSCF####.JPG and R#######.JPG).
camera_only = true

# ---------------------------------------------------------------------------
# Photos library
# ---------------------------------------------------------------------------
[library]
# Program used to run the JavaScript for Automation query against Photos.
osascript = "osascript"
"##
}
