//! Folding several files into one [`Config`].
//!
//! Files arrive highest precedence first. Each setting is taken from the first
//! file that defines it; settings no file defines keep their defaults.

use std::path::PathBuf;

use crate::{
    ClientSettings, Config, SearchSettings,
    parse::{RawClientSettings, RawConfig, RawSearchSettings},
};

/// A decoded file and where it came from.
pub struct ParsedConfig {
    /// The file's location.
    pub path: PathBuf,
    /// Its contents.
    pub config: RawConfig,
}

/// Merges `configs` (highest precedence first) over the defaults.
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    let clients: Vec<&RawClientSettings> = configs
        .iter()
        .filter_map(|parsed| parsed.config.client.as_ref())
        .collect();
    let searches: Vec<&RawSearchSettings> = configs
        .iter()
        .filter_map(|parsed| parsed.config.search.as_ref())
        .collect();

    let client_defaults = ClientSettings::default();
    let client = ClientSettings {
        host: first(&clients, |raw| raw.host.clone()).unwrap_or(client_defaults.host),
        api_key: first(&clients, |raw| raw.api_key.clone()),
        timeout_secs: first(&clients, |raw| raw.timeout_secs)
            .unwrap_or(client_defaults.timeout_secs),
    };

    let search_defaults = SearchSettings::default();
    let search = SearchSettings {
        page_size: first(&searches, |raw| raw.page_size).unwrap_or(search_defaults.page_size),
        max_hits: first(&searches, |raw| raw.max_hits).unwrap_or(search_defaults.max_hits),
    };

    Config {
        client,
        search,
        config_root: configs
            .first()
            .and_then(|parsed| parsed.path.parent())
            .map(PathBuf::from),
    }
}

/// The first value `get` finds across `tables`.
fn first<T, V>(tables: &[&T], get: impl Fn(&T) -> Option<V>) -> Option<V> {
    tables.iter().find_map(|table| get(*table))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::parse::parse_config_str;

    /// Decodes `text` as the file at `path`.
    fn file(path: &str, text: &str) -> ParsedConfig {
        ParsedConfig {
            path: PathBuf::from(path),
            config: parse_config_str(text, Path::new(path)).unwrap(),
        }
    }

    #[test]
    fn no_files_gives_defaults() {
        let config = merge_configs(&[]);
        assert_eq!(config.client, ClientSettings::default());
        assert_eq!(config.search, SearchSettings::default());
        assert!(config.config_root.is_none());
    }

    #[test]
    fn nearer_file_shadows_per_setting() {
        let config = merge_configs(&[
            file("/work/.citrine.toml", "[search]\npage_size = 25\n"),
            file(
                "/home/ada/.citrine.toml",
                "[client]\napi_key = \"personal\"\n[search]\npage_size = 5\nmax_hits = 50\n",
            ),
        ]);
        assert_eq!(config.search.page_size, 25);
        assert_eq!(config.search.max_hits, 50);
        assert_eq!(config.client.api_key.as_deref(), Some("personal"));
        assert_eq!(config.config_root, Some(PathBuf::from("/work")));
    }

    #[test]
    fn tables_combine_across_files() {
        let config = merge_configs(&[
            file("/a/.citrine.toml", "[client]\ntimeout_secs = 3\n"),
            file("/.citrine.toml", "[client]\nhost = \"https://x.example\"\n"),
        ]);
        assert_eq!(config.client.timeout_secs, 3);
        assert_eq!(config.client.host, "https://x.example");
    }
}
