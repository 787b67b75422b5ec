//! What every command starts from: the working directory and the settings.

use std::{env, fmt, path::PathBuf, process::ExitCode};

use citrine_config::Config;

use super::args::Commands;

/// Environment variable overriding the configured host.
pub const SITE_ENV: &str = "CITRINATION_SITE";

/// Environment variable overriding the configured API key.
pub const API_KEY_ENV: &str = "CITRINATION_API_KEY";

/// Inputs shared by all commands, resolved once per invocation.
pub struct CommandContext {
    /// Directory the command runs in.
    pub cwd: PathBuf,
    /// Effective settings, environment overrides included.
    pub config: Config,
}

impl CommandContext {
    /// Resolves the context for `command`.
    ///
    /// `init` gets default settings so it still works next to a broken file.
    pub fn for_command(command: &Commands) -> Result<Self, ExitCode> {
        let cwd = env::current_dir()
            .map_err(|e| fail(format_args!("cannot determine the working directory: {e}")))?;

        let config = match command {
            Commands::Init(_) => Config::default(),
            _ => Config::load(&cwd)
                .map_err(|e| fail(format_args!("failed to load configuration: {e}")))?
                .with_overrides(non_empty_env(SITE_ENV), non_empty_env(API_KEY_ENV)),
        };

        Ok(Self { cwd, config })
    }
}

/// Reports `message` on stderr and yields the failure exit code.
fn fail(message: fmt::Arguments<'_>) -> ExitCode {
    eprintln!("error: {message}");
    ExitCode::FAILURE
}

/// The value of `name`, unless unset or empty.
fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
