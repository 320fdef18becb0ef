//! Simulator configuration module.
//!
//! Handles loading, validating, and merging an `exposure.toml` file. Stock
//! defaults are the base layer; a user file only overrides the keys it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [selection]
//! aperture = 4   # index into the aperture table (f/4)
//! shutter = 6    # index into the shutter table (1/60)
//! iso = 0        # index into the ISO table (ISO 100)
//! scene = 0      # index into the scene table (Plein soleil)
//!
//! [display]
//! language = "en"   # "en" or "fr"
//!
//! [preview]
//! title = "Exposure triangle"
//! image = "https://apprendre-la-photo.fr/wp-content/uploads/2022/10/P1230573.jpg"
//! ```
//!
//! Unknown keys are rejected to catch typos early, and selection indices are
//! checked against their tables.

use crate::exposure::{Language, Selection};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the config directory.
pub const CONFIG_FILE: &str = "exposure.toml";

/// Sample photo the preview applies its effects to.
pub const DEFAULT_SAMPLE_IMAGE: &str =
    "https://apprendre-la-photo.fr/wp-content/uploads/2022/10/P1230573.jpg";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Simulator configuration loaded from `exposure.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExposureConfig {
    /// Initial slider positions.
    pub selection: Selection,
    /// Label language.
    pub display: DisplayConfig,
    /// HTML preview settings.
    pub preview: PreviewConfig,
}

impl ExposureConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.selection
            .validate()
            .map_err(|e| ConfigError::Validation(format!("selection: {e}")))?;
        if self.preview.image.trim().is_empty() {
            return Err(ConfigError::Validation(
                "preview.image must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub language: Language,
}

/// HTML preview settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    /// Page title.
    pub title: String,
    /// URL or path of the sample photo.
    pub image: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            title: "Exposure triangle".to_string(),
            image: DEFAULT_SAMPLE_IMAGE.to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(ExposureConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
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

/// Load `exposure.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(None);
    }
    tracing::debug!(path = %config_path.display(), "loading config");
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<ExposureConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ExposureConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `exposure.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<ExposureConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `exposure.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Exposure Triangle Configuration
# ================================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Initial slider positions (0-based indices)
# ---------------------------------------------------------------------------
[selection]
# Aperture: 0=f/1.4 1=f/1.8 2=f/2 3=f/2.8 4=f/4 5=f/5.6 6=f/8 7=f/11 8=f/16 9=f/22
aperture = 4

# Shutter: 0=1/4000 1=1/2000 2=1/1000 3=1/500 4=1/250 5=1/125 6=1/60 7=1/30
#          8=1/15 9=1/8 10=1/4 11=1/2 12=1s 13=2s 14=4s
shutter = 6

# ISO: 0=100 1=200 2=400 3=800 4=1600 5=3200 6=6400 7=12800
iso = 0

# Scene: 0=Plein soleil (EV 15) 1=Légèrement nuageux (14) 2=Nuageux (13)
#        3=Ombre / Couvert (12) 4=Intérieur bien éclairé (9)
#        5=Intérieur normal (7) 6=Intérieur sombre (5) 7=Nuit urbaine (3)
scene = 0

# ---------------------------------------------------------------------------
# Display
# ---------------------------------------------------------------------------
[display]
# Label language: "en" or "fr".
language = "en"

# ---------------------------------------------------------------------------
# HTML preview
# ---------------------------------------------------------------------------
[preview]
title = "Exposure triangle"

# Sample photo the simulated effects are applied to (URL or path).
image = "https://apprendre-la-photo.fr/wp-content/uploads/2022/10/P1230573.jpg"
"##
}
