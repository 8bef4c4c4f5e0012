//! Configuration file support for the genome view.
//!
//! This module provides serialization and deserialization of user settings:
//! preferences, per-category-type color overrides and gene highlights.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color_table::{ColorOverrides, HighlightEntry};
use crate::constants::DEFAULT_TOOLTIP_OFFSET;
use crate::model::{CategoryType, HexColor};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Get all log levels in order from least to most verbose.
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ]
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::all()
            .iter()
            .copied()
            .find(|level| level.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown log level '{}'", s))
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// User configuration that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Application name (for identification)
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// User preferences
    #[serde(default)]
    pub preferences: UserPreferences,

    /// Color overrides per category type
    #[serde(default)]
    pub color_overrides: BTreeMap<CategoryType, ColorOverrides>,

    /// Genes drawn with their own color
    #[serde(default)]
    pub highlight_genes: Vec<HighlightEntry>,
}

fn default_app_name() -> String {
    "genome-view".to_string()
}

/// User preferences section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Category type selected when a dataset is opened
    #[serde(default)]
    pub default_category_type: CategoryType,

    /// Only list categories that occur in the loaded genomes
    #[serde(default = "default_filter_to_observed")]
    pub filter_to_observed: bool,

    /// Tooltip offset from the pointer, in pixels
    #[serde(default = "default_tooltip_offset")]
    pub tooltip_offset: [i32; 2],
}

fn default_filter_to_observed() -> bool {
    true
}

fn default_tooltip_offset() -> [i32; 2] {
    DEFAULT_TOOLTIP_OFFSET
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            default_category_type: CategoryType::default(),
            filter_to_observed: default_filter_to_observed(),
            tooltip_offset: default_tooltip_offset(),
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            app_name: default_app_name(),
            preferences: UserPreferences::default(),
            color_overrides: BTreeMap::new(),
            highlight_genes: Vec::new(),
        }
    }

    /// Overrides stored for a category type, if any.
    pub fn overrides_for(&self, category_type: CategoryType) -> Option<&ColorOverrides> {
        self.color_overrides.get(&category_type)
    }

    /// Override one category color. Returns `false`, storing nothing, if
    /// `key` is not a category of `category_type`.
    pub fn set_override(&mut self, category_type: CategoryType, key: &str, color: HexColor) -> bool {
        if category_type.defaults().iter().all(|def| def.key != key) {
            log::warn!("'{}' is not a {} category", key, category_type);
            return false;
        }
        self.color_overrides
            .entry(category_type)
            .or_default()
            .insert(key.to_string(), color);
        true
    }

    /// Add a gene highlight, replacing any earlier one for the same gene.
    pub fn add_highlight(&mut self, entry: HighlightEntry) {
        self.highlight_genes
            .retain(|h| !(h.genome_id == entry.genome_id && h.gene_id == entry.gene_id));
        self.highlight_genes.push(entry);
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Read configuration from a file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Write configuration to a file, creating parent directories.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Get the default filename for config export.
    pub fn default_filename() -> &'static str {
        "genome-view-config.json"
    }

    /// Get the default config file path for auto-load/save.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("genome-view").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("genome-view")
                    .join(Self::default_filename())
            })
        }
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match Self::load(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save configuration to the default path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save(&path)
    }

    /// LocalStorage key for WASM config persistence.
    #[cfg(target_arch = "wasm32")]
    const LOCALSTORAGE_KEY: &'static str = "genome-view-config";

    /// Try to load configuration from localStorage (WASM only).
    /// Returns None if not found or can't be parsed.
    #[cfg(target_arch = "wasm32")]
    pub fn load_from_local_storage() -> Option<Self> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;

        match storage.get_item(Self::LOCALSTORAGE_KEY) {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration from localStorage");
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config from localStorage: {}", e);
                    None
                }
            },
            Ok(None) => {
                log::debug!("No config found in localStorage");
                None
            }
            Err(e) => {
                log::warn!("Failed to read from localStorage: {:?}", e);
                None
            }
        }
    }

    /// Save configuration to localStorage (WASM only).
    #[cfg(target_arch = "wasm32")]
    pub fn save_to_local_storage(&self) -> Result<(), ConfigError> {
        let window = web_sys::window()
            .ok_or_else(|| ConfigError::StorageError("No window object available".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| ConfigError::StorageError(format!("localStorage access error: {:?}", e)))?
            .ok_or_else(|| ConfigError::StorageError("localStorage not available".to_string()))?;

        let json = self.to_json()?;

        storage
            .set_item(Self::LOCALSTORAGE_KEY, &json)
            .map_err(|e| {
                ConfigError::StorageError(format!("Failed to save to localStorage: {:?}", e))
            })?;

        log::info!("Saved configuration to localStorage");
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Storage error (localStorage in WASM)
    #[error("Storage error: {0}")]
    StorageError(String),
}
