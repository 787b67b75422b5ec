//! Configuration system for the citrine search client.
//!
//! Configuration lives in TOML files named `.citrine.toml`. Files are discovered by walking
//! up from the working directory, then `~/.citrine.toml` is loaded with the lowest
//! precedence. Environment variables are never read here; callers apply them with
//! [`Config::with_overrides`].

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
mod validate;

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawClientSettings, RawConfig, RawSearchSettings, parse_config_file, parse_config_str,
};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
use tracing::debug;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default site.
pub const DEFAULT_HOST: &str = "https://citrination.com";

/// Shown in place of a configured API key when settings are printed.
const REDACTED: &str = "<redacted>";

/// Fully merged configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Connection settings.
    pub client: ClientSettings,
    /// Search settings.
    pub search: SearchSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Discovers the files that apply to `cwd` and merges them.
    ///
    /// Finding no file at all is not an error; the defaults apply.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        Self::load_from_files(&discover_config_files(cwd))
    }

    /// Merges the given files, highest precedence first.
    ///
    /// The first unreadable or invalid file aborts the load.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut parsed = Vec::with_capacity(files.len());
        for path in files {
            let config = parse_config_file(path)?;
            debug!(path = %path.display(), "read config file");
            parsed.push(ParsedConfig {
                path: path.clone(),
                config,
            });
        }
        Ok(merge_configs(&parsed))
    }

    /// Replaces the host and API key where an override is given.
    #[must_use]
    pub fn with_overrides(mut self, host: Option<String>, api_key: Option<String>) -> Self {
        if let Some(host) = host {
            self.client.host = host;
        }
        if let Some(api_key) = api_key {
            self.client.api_key = Some(api_key);
        }
        self
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings in `.citrine.toml` format.
    ///
    /// A configured API key is replaced by a placeholder.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let mut client = self.client.clone();
        if client.api_key.is_some() {
            client.api_key = Some(REDACTED.to_string());
        }
        let printable = PrintedSettings {
            client,
            search: self.search.clone(),
        };
        Ok(toml::to_string_pretty(&printable)?)
    }
}

/// Connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Base URL of the site, without a trailing path.
    pub host: String,
    /// API key sent with every request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientSettings {
    /// The request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

/// Search settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Hits requested per page when a query sets no size.
    pub page_size: u64,
    /// Upper bound on hits collected when paging.
    pub max_hits: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            page_size: 10,
            max_hits: 1000,
        }
    }
}

/// The `[client]` and `[search]` tables as `citrine config` prints them.
#[derive(Serialize)]
struct PrintedSettings {
    /// Connection table, API key redacted.
    client: ClientSettings,
    /// Search table.
    search: SearchSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_values() {
        let config = Config::default().with_overrides(None, Some("key".to_string()));
        assert_eq!(config.client.host, DEFAULT_HOST);
        assert_eq!(config.client.api_key.as_deref(), Some("key"));

        let config = config.with_overrides(Some("https://other.example".to_string()), None);
        assert_eq!(config.client.host, "https://other.example");
        assert_eq!(config.client.api_key.as_deref(), Some("key"));
    }

    #[test]
    fn printed_settings_parse_back() {
        let toml = Config::default().settings_to_toml().unwrap();
        let raw = parse_config_str(&toml, Path::new("out.toml")).unwrap();
        let client = raw.client.unwrap();
        assert_eq!(client.host.as_deref(), Some(DEFAULT_HOST));
        assert_eq!(client.api_key, None);
        assert_eq!(raw.search.unwrap().max_hits, Some(1000));
    }

    #[test]
    fn printed_settings_hide_api_key() {
        let config = Config::default().with_overrides(None, Some("secret".to_string()));
        let toml = config.settings_to_toml().unwrap();
        assert!(!toml.contains("secret"));
        assert!(toml.contains(REDACTED));
    }

    #[test]
    fn timeout_is_seconds() {
        assert_eq!(ClientSettings::default().timeout(), Duration::from_secs(30));
    }
}
