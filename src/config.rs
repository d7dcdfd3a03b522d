//! Configuration file support for content-preview.
//!
//! Provides YAML-based configuration through `content-preview.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::rule_preview::domain::{SortDirection, SortKey};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "content-preview.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub data_dir: Option<PathBuf>,
    pub format: Option<String>,
    pub kba_base_url: Option<String>,
    pub kba_client: Option<String>,
    /// Session cookie sent with knowledge-base searches.
    pub kba_session_cookie: Option<String>,
    pub debounce_ms: Option<u64>,
    pub default_sort: Option<String>,
    pub default_direction: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.debounce_ms == Some(0) {
        bail!(
            "Invalid config: debounce_ms must be greater than 0.\n\n\
             💡 Hint: The default search debounce is 800 milliseconds."
        );
    }

    if let Some(ref sort) = config.default_sort {
        sort.parse::<SortKey>()
            .with_context(|| format!("Invalid config: default_sort '{}'", sort))?;
    }

    if let Some(ref direction) = config.default_direction {
        if let Err(e) = direction.parse::<SortDirection>() {
            bail!("Invalid config: default_direction: {}", e);
        }
    }

    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!("Invalid config: format: {}", e);
        }
    }

    if let Some(ref base_url) = config.kba_base_url {
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            bail!(
                "Invalid config: kba_base_url must be an http(s) URL, got '{}'.",
                base_url
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "Unknown config field will be ignored.");
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
