//! Configuration validation.
//!
//! Reports non-fatal problems with a loaded configuration.

use std::fmt;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No API key is configured; requests will be anonymous.
    MissingApiKey,
    /// The host is not an http(s) URL.
    InvalidHost {
        /// The configured host.
        host: String,
    },
    /// A page size of zero makes paging impossible.
    ZeroPageSize,
    /// The page size exceeds the hit limit, so only one partial page is fetched.
    PageSizeExceedsMaxHits {
        /// Configured page size.
        page_size: u64,
        /// Configured hit limit.
        max_hits: u64,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "no api_key configured"),
            Self::InvalidHost { host } => write!(f, "host is not an http(s) URL: {host}"),
            Self::ZeroPageSize => write!(f, "search.page_size is 0"),
            Self::PageSizeExceedsMaxHits {
                page_size,
                max_hits,
            } => write!(
                f,
                "search.page_size ({page_size}) exceeds search.max_hits ({max_hits})"
            ),
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.client.api_key.as_deref().is_none_or(str::is_empty) {
        warnings.push(ConfigWarning::MissingApiKey);
    }

    let host = &config.client.host;
    if !(host.starts_with("https://") || host.starts_with("http://")) {
        warnings.push(ConfigWarning::InvalidHost { host: host.clone() });
    }

    let search = &config.search;
    if search.page_size == 0 {
        warnings.push(ConfigWarning::ZeroPageSize);
    } else if search.page_size > search.max_hits {
        warnings.push(ConfigWarning::PageSizeExceedsMaxHits {
            page_size: search.page_size,
            max_hits: search.max_hits,
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_lacks_api_key() {
        assert_eq!(
            validate_config(&Config::default()),
            [ConfigWarning::MissingApiKey]
        );
    }

    #[test]
    fn test_invalid_host_and_zero_page() {
        let mut config = Config::default().with_overrides(None, Some("k".to_string()));
        config.client.host = "citrination.com".to_string();
        config.search.page_size = 0;
        let warnings = validate_config(&config);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.contains(&ConfigWarning::ZeroPageSize));
        assert!(
            warnings
                .iter()
                .any(|w| {
                    matches!(w, ConfigWarning::InvalidHost { host } if host == "citrination.com")
                })
        );
    }

    #[test]
    fn test_page_size_over_limit() {
        let mut config = Config::default().with_overrides(None, Some("k".to_string()));
        config.search.page_size = 500;
        config.search.max_hits = 100;
        assert_eq!(
            validate_config(&config)[0].to_string(),
            "search.page_size (500) exceeds search.max_hits (100)"
        );
    }
}
