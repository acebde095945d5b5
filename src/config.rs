//! Configuration for the Cascade backend and CLI.
//!
//! Follows XDG Base Directory conventions and supports:
//! - User config: `~/.config/cascade/config.yaml`
//! - Project config: `.cascade.yaml` in current directory
//! - Environment variables: `CASCADE_*`
//! - Command-line flags (highest precedence)

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::store::{self, CacheStore};

/// Backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Locale assumed current when none is given.
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// Directory holding the default translation bundles.
    #[serde(default)]
    pub bundle_dir: Option<PathBuf>,

    /// Path of the persistent store file.
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Fast-cache tier selection.
    #[serde(default)]
    pub cache: CacheSettings,
}

/// Fast-cache tier settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Named store backing the tier: `shared`, `memory`, or `none`.
    #[serde(default = "default_cache_store")]
    pub store: String,

    /// Entry capacity (only for `memory`).
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,

    /// Entry TTL in seconds (only for `memory`); absent means no expiry.
    #[serde(default)]
    pub ttl_secs: Option<u64>,
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_cache_store() -> String {
    "shared".to_string()
}

fn default_cache_capacity() -> usize {
    1024
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            bundle_dir: None,
            store_path: None,
            cache: CacheSettings::default(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            store: default_cache_store(),
            capacity: default_cache_capacity(),
            ttl_secs: None,
        }
    }
}

impl Settings {
    /// Load settings from all sources with proper precedence.
    ///
    /// Resolution order (highest to lowest):
    /// 1. CLI flags (handled separately)
    /// 2. Environment variables
    /// 3. Project config (`.cascade.yaml`)
    /// 4. User config (`~/.config/cascade/config.yaml`)
    /// 5. Defaults
    pub fn load() -> Result<Self> {
        let mut settings = Self::default();

        if let Some(path) = Self::user_config_path()
            && path.exists()
        {
            settings.merge(Self::load_from_file(&path)?);
        }

        let project_path = PathBuf::from(".cascade.yaml");
        if project_path.exists() {
            settings.merge(Self::load_from_file(&project_path)?);
        }

        settings.apply_env_overrides();
        Ok(settings)
    }

    /// Load settings from a YAML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            Error::config(format!("Failed to parse config file {}: {}", path.display(), e))
        })
    }

    /// Merge another settings object into this one (other takes precedence).
    fn merge(&mut self, other: Self) {
        if other.default_locale != default_locale() {
            self.default_locale = other.default_locale;
        }
        if other.bundle_dir.is_some() {
            self.bundle_dir = other.bundle_dir;
        }
        if other.store_path.is_some() {
            self.store_path = other.store_path;
        }
        if other.cache.store != default_cache_store() {
            self.cache.store = other.cache.store;
        }
        if other.cache.capacity != default_cache_capacity() {
            self.cache.capacity = other.cache.capacity;
        }
        if other.cache.ttl_secs.is_some() {
            self.cache.ttl_secs = other.cache.ttl_secs;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(locale) = std::env::var("CASCADE_LOCALE") {
            self.default_locale = locale;
        }
        if let Ok(path) = std::env::var("CASCADE_STORE") {
            self.store_path = Some(PathBuf::from(path));
        }
        if let Ok(dir) = std::env::var("CASCADE_BUNDLES") {
            self.bundle_dir = Some(PathBuf::from(dir));
        }
        if let Ok(name) = std::env::var("CASCADE_CACHE") {
            self.cache.store = name;
        }
    }

    /// Get the path to the user config file.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.yaml"))
    }

    /// Get the path to the user config directory.
    ///
    /// Cross-platform behavior:
    /// - If `XDG_CONFIG_HOME` is set, uses `$XDG_CONFIG_HOME/cascade`
    /// - Linux/macOS: Falls back to `~/.config/cascade` (XDG default)
    /// - Windows: Falls back to `%APPDATA%\cascade`
    #[must_use]
    pub fn config_dir() -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
            && !xdg_config.is_empty()
        {
            return Some(PathBuf::from(xdg_config).join("cascade"));
        }

        #[cfg(windows)]
        {
            dirs::config_dir().map(|p| p.join("cascade"))
        }

        #[cfg(not(windows))]
        {
            dirs::home_dir().map(|p| p.join(".config").join("cascade"))
        }
    }

    /// Get the path to the data directory (default home of the store file).
    ///
    /// Cross-platform behavior:
    /// - If `XDG_DATA_HOME` is set, uses `$XDG_DATA_HOME/cascade`
    /// - Linux/macOS: Falls back to `~/.local/share/cascade` (XDG default)
    /// - Windows: Falls back to `%APPDATA%\cascade`
    #[must_use]
    pub fn data_dir() -> Option<PathBuf> {
        if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME")
            && !xdg_data.is_empty()
        {
            return Some(PathBuf::from(xdg_data).join("cascade"));
        }

        #[cfg(windows)]
        {
            dirs::data_dir().map(|p| p.join("cascade"))
        }

        #[cfg(not(windows))]
        {
            dirs::home_dir().map(|p| p.join(".local").join("share").join("cascade"))
        }
    }

    /// The effective store file path, falling back to the data directory.
    pub fn effective_store_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.store_path {
            return Ok(path.clone());
        }
        Self::data_dir()
            .map(|dir| dir.join("translations.json"))
            .ok_or_else(|| Error::config("Cannot determine data directory"))
    }

    /// Resolve the configured fast-cache tier.
    pub fn cache_store(&self) -> Result<Arc<dyn CacheStore>> {
        let ttl = self.cache.ttl_secs.map(Duration::from_secs);
        store::cache_store_by_name(&self.cache.store, self.cache.capacity, ttl)
    }
}
