//! Locating `.citrine.toml` files.
//!
//! Every ancestor of the working directory may hold one. The nearest file wins,
//! a file marked `root = true` hides everything above it (including the file in
//! the home directory), and `~/.citrine.toml` comes last.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::debug;

use crate::parse::is_root_config;

/// Name of the configuration file looked up in each directory.
pub const CONFIG_FILENAME: &str = ".citrine.toml";

/// Lists the configuration files that apply to `cwd`, highest precedence first.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for candidate in cwd.ancestors().map(|dir| dir.join(CONFIG_FILENAME)) {
        if !candidate.is_file() {
            continue;
        }
        let root = is_root_config(&candidate);
        debug!(path = %candidate.display(), root, "config file");
        found.push(candidate);
        if root {
            return found;
        }
    }

    match global_config_path() {
        Some(home) if home.is_file() && !found.contains(&home) => found.push(home),
        _ => {}
    }
    found
}

/// Location of the per-user file, or `None` without a home directory.
pub fn global_config_path() -> Option<PathBuf> {
    let dirs = BaseDirs::new()?;
    Some(dirs.home_dir().join(CONFIG_FILENAME))
}

/// True when `path` is the per-user file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|home| home == path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    /// Writes `contents` as the config file of `dir` (relative to `tree`).
    fn write_config(tree: &TempDir, dir: &str, contents: &str) -> PathBuf {
        let dir = tree.path().join(dir);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILENAME);
        fs::write(&path, contents).unwrap();
        path
    }

    /// Creates `dir` under `tree` and returns it.
    fn mkdir(tree: &TempDir, dir: &str) -> PathBuf {
        let path = tree.path().join(dir);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Discovery results without the per-user file.
    fn local_only(cwd: &Path) -> Vec<PathBuf> {
        discover_config_files(cwd)
            .into_iter()
            .filter(|path| !is_global_config(path))
            .collect()
    }

    #[test]
    fn nothing_to_find() {
        let tree = tempfile::tempdir().unwrap();
        let cwd = mkdir(&tree, "x/y/z");
        assert!(local_only(&cwd).is_empty());
    }

    #[test]
    fn nearest_file_first() {
        let tree = tempfile::tempdir().unwrap();
        let outer = write_config(&tree, "", "[search]\npage_size = 5\n");
        let inner = write_config(&tree, "lab/batch", "[search]\npage_size = 50\n");
        let cwd = mkdir(&tree, "lab/batch/run1");

        assert_eq!(local_only(&cwd), [inner, outer]);
    }

    #[test]
    fn directory_with_config_name_is_ignored() {
        let tree = tempfile::tempdir().unwrap();
        mkdir(&tree, CONFIG_FILENAME);
        let cwd = mkdir(&tree, "nested");
        assert!(local_only(&cwd).is_empty());
    }

    #[test]
    fn root_marker_hides_ancestors_and_home() {
        let tree = tempfile::tempdir().unwrap();
        write_config(&tree, "", "");
        let project = write_config(&tree, "project", "root = true\n");
        let nested = write_config(&tree, "project/data", "");
        let cwd = mkdir(&tree, "project/data/raw");

        assert_eq!(discover_config_files(&cwd), [nested, project]);
    }

    #[test]
    fn home_file_uses_config_name() {
        assert!(global_config_path().is_some_and(|path| path.ends_with(CONFIG_FILENAME)));
    }
}
