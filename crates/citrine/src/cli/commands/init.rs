//! `citrine init`: write a starter configuration file.

use std::{fs, path::PathBuf, process::ExitCode};

use citrine_config::{
    CONFIG_FILENAME, ConfigError, global_config_path, global_template, local_template,
};

use crate::cli::{args::InitCommand, context::CommandContext};

/// Writes a commented-out `.citrine.toml` into the working directory, or into
/// the home directory with `--global`.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let (path, contents) = match starter_file(ctx, cmd) {
        Ok(target) => target,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if path.exists() && !cmd.force {
        eprintln!("error: {} already exists (use --force to replace it)", path.display());
        return ExitCode::FAILURE;
    }

    match fs::write(&path, contents) {
        Ok(()) => {
            println!("Created {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: cannot write {}: {e}", path.display());
            ExitCode::FAILURE
        }
    }
}

/// Where the starter file goes and what it contains.
fn starter_file(
    ctx: &CommandContext,
    cmd: &InitCommand,
) -> Result<(PathBuf, String), ConfigError> {
    if cmd.global {
        let path = global_config_path().ok_or(ConfigError::NoHomeDirectory)?;
        Ok((path, global_template()))
    } else {
        Ok((ctx.cwd.join(CONFIG_FILENAME), local_template()))
    }
}
