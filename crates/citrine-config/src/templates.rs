//! Starter files written by `citrine init`.
//!
//! The sources under `templates/` are live TOML so they can be checked by the
//! parser; the rendered output has every setting commented out.

/// Source of the per-directory starter file.
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Source of the per-user starter file.
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Starter contents for a project `.citrine.toml`.
pub fn local_template() -> String {
    comment_template(LOCAL_TEMPLATE)
}

/// Starter contents for `~/.citrine.toml`.
pub fn global_template() -> String {
    comment_template(GLOBAL_TEMPLATE)
}

/// Comments out every setting and table header, leaving existing comments and
/// blank lines alone.
fn comment_template(source: &str) -> String {
    source
        .lines()
        .map(|line| {
            if line.is_empty() || line.starts_with('#') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::parse::parse_config_str;

    #[test]
    fn sources_are_valid_toml() {
        for (name, source) in [("local", LOCAL_TEMPLATE), ("global", GLOBAL_TEMPLATE)] {
            let parsed = parse_config_str(source, Path::new(name));
            assert!(parsed.is_ok(), "{name}: {parsed:?}");
        }
    }

    #[test]
    fn rendered_templates_configure_nothing() {
        for rendered in [local_template(), global_template()] {
            let raw = parse_config_str(&rendered, Path::new("rendered")).unwrap();
            assert!(raw.root.is_none());
            assert!(raw.client.is_none());
            assert!(raw.search.is_none());
        }
    }

    #[test]
    fn only_settings_are_commented() {
        assert_eq!(
            comment_template("# note\n[search]\n\npage_size = 5\n"),
            "# note\n# [search]\n\n# page_size = 5\n"
        );
    }
}
