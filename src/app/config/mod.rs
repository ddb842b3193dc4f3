// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Swipe threshold and grid columns
//! - `[backend]` - Hosted backend URL, public key and bucket
//! - `[contact]` - Contact relay endpoint and access key
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_FOLIO_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::gallery::{GridColumns, SwipeThreshold};
use crate::error::{Error, Result};
use crate::infrastructure::supabase::Endpoint;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Gallery interaction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Horizontal travel (logical pixels) a swipe must exceed.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold: Option<f32>,

    /// Thumbnail columns on a project page.
    #[serde(
        default = "default_grid_columns",
        skip_serializing_if = "Option::is_none"
    )]
    pub grid_columns: Option<usize>,

    /// Number of downloaded images kept in memory.
    #[serde(
        default = "default_image_cache_entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_cache_entries: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
            grid_columns: default_grid_columns(),
            image_cache_entries: default_image_cache_entries(),
        }
    }
}

impl GalleryConfig {
    /// Configured threshold, clamped to the supported range.
    #[must_use]
    pub fn swipe_threshold(&self) -> SwipeThreshold {
        SwipeThreshold::new(self.swipe_threshold.unwrap_or(DEFAULT_SWIPE_THRESHOLD))
    }

    #[must_use]
    pub fn grid_columns(&self) -> GridColumns {
        GridColumns::new(self.grid_columns.unwrap_or(DEFAULT_GRID_COLUMNS))
    }

    #[must_use]
    pub fn image_cache_entries(&self) -> usize {
        self.image_cache_entries
            .unwrap_or(DEFAULT_IMAGE_CACHE_ENTRIES)
            .clamp(MIN_IMAGE_CACHE_ENTRIES, MAX_IMAGE_CACHE_ENTRIES)
    }
}

/// Hosted backend settings (database, auth and storage).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Public (anon) API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anon_key: Option<String>,

    /// Storage bucket for uploaded images.
    #[serde(default = "default_bucket", skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: None,
            bucket: default_bucket(),
        }
    }
}

impl BackendConfig {
    /// Endpoint to talk to, or `None` when URL or key is missing.
    #[must_use]
    pub fn endpoint(&self) -> Option<Endpoint> {
        Endpoint::new(
            self.url.as_deref()?,
            self.anon_key.as_deref()?,
            self.bucket.as_deref().unwrap_or(DEFAULT_BUCKET),
        )
    }
}

/// Contact form relay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    /// Submission endpoint.
    #[serde(
        default = "default_contact_endpoint",
        skip_serializing_if = "Option::is_none"
    )]
    pub endpoint: Option<String>,

    /// Relay access key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_contact_endpoint(),
            access_key: None,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gallery interaction settings.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Hosted backend settings.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Contact relay settings.
    #[serde(default)]
    pub contact: ContactConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD)
}

fn default_grid_columns() -> Option<usize> {
    Some(DEFAULT_GRID_COLUMNS)
}

fn default_image_cache_entries() -> Option<usize> {
    Some(DEFAULT_IMAGE_CACHE_ENTRIES)
}

fn default_bucket() -> Option<String> {
    Some(DEFAULT_BUCKET.to_string())
}

fn default_contact_endpoint() -> Option<String> {
    Some(DEFAULT_CONTACT_ENDPOINT.to_string())
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining it.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "config not loaded, using defaults"
                    );
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
