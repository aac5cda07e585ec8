//! # App Configuration
//!
//! Configuration loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BASKET_DATA_DIR=/tmp/basket                                        │
//! │     BASKET_LOG=debug                                                   │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/basket/basket.toml (Linux)                               │
//! │     ~/Library/Application Support/app.basket.basket/basket.toml (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     platform data dir, "shopping_list_prefs", "shopping_items"         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # basket.toml
//! [storage]
//! data_dir = "/home/me/.local/share/basket"
//! prefs_name = "shopping_list_prefs"
//! items_key = "shopping_items"
//!
//! [logging]
//! filter = "info,basket=debug"
//! ```
//!
//! Read-only after startup.

use std::path::PathBuf;

use basket_core::{DEFAULT_ITEMS_KEY, DEFAULT_PREFS_NAME};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

// =============================================================================
// Storage Settings
// =============================================================================

/// Where the list is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory holding the preference file.
    /// `None` means the platform data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Preference set name; the file is `<data_dir>/<prefs_name>.json`.
    #[serde(default = "default_prefs_name")]
    pub prefs_name: String,

    /// Key holding the encoded list.
    #[serde(default = "default_items_key")]
    pub items_key: String,
}

fn default_prefs_name() -> String {
    DEFAULT_PREFS_NAME.to_string()
}

fn default_items_key() -> String {
    DEFAULT_ITEMS_KEY.to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            data_dir: None,
            prefs_name: default_prefs_name(),
            items_key: default_items_key(),
        }
    }
}

impl StorageSettings {
    /// Resolves the directory holding the preference file.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/app.basket.basket`
    /// - **Windows**: `%APPDATA%\basket\basket\data`
    /// - **Linux**: `~/.local/share/basket`
    pub fn resolve_data_dir(&self) -> AppResult<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        directories::ProjectDirs::from("app", "basket", "basket")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| AppError::InvalidConfig("Could not determine app data directory".into()))
    }
}

// =============================================================================
// Logging Settings
// =============================================================================

/// Log filter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info,basket=debug".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// App Config
// =============================================================================

/// Complete app configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Persistence settings.
    #[serde(default)]
    pub storage: StorageSettings,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (basket.toml)
    /// 3. Environment variables
    ///
    /// The result is validated after the overrides are applied.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| AppError::ConfigLoadFailed(e.to_string()))?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> AppResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| AppError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| AppError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.storage.prefs_name.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "storage.prefs_name must not be empty".into(),
            ));
        }

        if self
            .storage
            .prefs_name
            .chars()
            .any(|c| std::path::is_separator(c) || c == '.')
        {
            return Err(AppError::InvalidConfig(format!(
                "storage.prefs_name must be a plain file stem, got: {}",
                self.storage.prefs_name
            )));
        }

        if self.storage.items_key.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "storage.items_key must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("BASKET_DATA_DIR") {
            debug!(data_dir = %dir, "Overriding data dir from environment");
            self.storage.data_dir = Some(PathBuf::from(dir));
        }

        if let Ok(name) = std::env::var("BASKET_PREFS_NAME") {
            self.storage.prefs_name = name;
        }

        if let Ok(key) = std::env::var("BASKET_ITEMS_KEY") {
            self.storage.items_key = key;
        }

        if let Ok(filter) = std::env::var("BASKET_LOG") {
            self.logging.filter = filter;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("app", "basket", "basket")
            .map(|dirs| dirs.config_dir().join("basket.toml"))
    }
}
