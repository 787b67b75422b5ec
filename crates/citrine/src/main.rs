//! Command-line interface for searching Citrination.

mod cli;

use std::{io, process::ExitCode};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{args::Cli, commands, context::CommandContext};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "CITRINE_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let ctx = match CommandContext::for_command(&cli.command) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    commands::run(cli.command, &ctx)
}

/// Installs a stderr subscriber filtered by `CITRINE_LOG`, defaulting to warnings.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
