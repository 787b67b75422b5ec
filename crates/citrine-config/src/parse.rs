//! Reading one `.citrine.toml` into its raw, all-optional form.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// One configuration file exactly as written; nothing is defaulted yet.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Hides every file further up the tree, and the per-user file.
    pub root: Option<bool>,
    /// The `[client]` table.
    pub client: Option<RawClientSettings>,
    /// The `[search]` table.
    pub search: Option<RawSearchSettings>,
}

/// The `[client]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawClientSettings {
    /// Base URL of the site.
    #[serde(alias = "site")]
    pub host: Option<String>,
    /// API key sent with every request.
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// The `[search]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Hits requested per page.
    pub page_size: Option<u64>,
    /// Upper bound on hits collected across pages.
    pub max_hits: Option<u64>,
}

/// Reads and decodes the file at `path`.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(text) => parse_config_str(&text, path),
        Err(source) => Err(ConfigError::ReadFile {
            path: path.into(),
            source,
        }),
    }
}

/// Decodes `text`, naming `path` in any error.
pub fn parse_config_str(text: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(text).map_err(|source| ConfigError::ParseToml {
        path: path.into(),
        source,
    })
}

/// True only for a readable, valid file that sets `root = true`.
pub fn is_root_config(path: &Path) -> bool {
    fs::read_to_string(path)
        .ok()
        .and_then(|text| toml::from_str::<RawConfig>(&text).ok())
        .and_then(|raw| raw.root)
        .unwrap_or(false)
}
