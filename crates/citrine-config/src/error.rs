//! Configuration errors.

use std::{io, path::PathBuf};

use thiserror::Error;
use toml::{de, ser};

/// Why configuration could not be loaded or printed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A discovered file could not be read.
    #[error("cannot read {path}: {source}")]
    ReadFile {
        /// The unreadable file.
        path: PathBuf,
        /// I/O failure.
        source: io::Error,
    },

    /// A file is not valid TOML or has a value of the wrong type.
    #[error("invalid configuration in {path}: {source}")]
    ParseToml {
        /// The offending file.
        path: PathBuf,
        /// Decoder diagnostic, with line and column.
        source: de::Error,
    },

    /// Effective settings could not be rendered as TOML.
    #[error("cannot render settings: {0}")]
    Render(#[from] ser::Error),

    /// `~/.citrine.toml` was requested but there is no home directory.
    #[error("no home directory to hold the per-user configuration")]
    NoHomeDirectory,
}
