//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml` from the source
//! root. User values are layered on top of stock defaults, so a config file
//! only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! safe = false              # Refuse symlinked documents
//! collections = []          # Collection names; "posts" reads `_posts/`
//! ```
//!
//! Unknown keys are rejected to catch typos early. Collection names are
//! sanitized to letters and digits; a name with nothing left after that, or
//! two names that end up as the same label, fail validation.

use crate::label::sanitize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Restricted mode: documents reachable only through symlinks are skipped.
    pub safe: bool,
    /// Raw collection names, in configuration order.
    pub collections: Vec<String>,
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: BTreeMap<String, &str> = BTreeMap::new();
        for raw in &self.collections {
            let label = sanitize(raw);
            if label.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "collection name {raw:?} contains no letters or digits"
                )));
            }
            if let Some(first) = seen.insert(label.clone(), raw.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "collection names {first:?} and {raw:?} both map to label {label:?}"
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    let mut table = toml::map::Map::new();
    table.insert("safe".to_string(), toml::Value::Boolean(false));
    table.insert("collections".to_string(), toml::Value::Array(Vec::new()));
    toml::Value::Table(table)
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

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the source root.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(root)?)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Site Collections Configuration
# ==============================
#
# Place this file as `config.toml` in the site source root. Every key is
# optional; the values below are the defaults.

# Safe mode.
# When true, documents that are symbolic links, or that resolve outside
# their collection directory through a linked parent, are skipped.
safe = false

# Collections.
# Each name maps to a directory named `_<name>` in the source root, e.g.
# "posts" reads `_posts/`. Names are reduced to ASCII letters and digits,
# so "team-bios" reads `_teambios/`. A name with no letters or digits, or
# two names reducing to the same label, is a configuration error.
collections = []
"##
}
