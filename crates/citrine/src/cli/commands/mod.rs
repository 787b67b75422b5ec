//! Command implementations and dispatch.

pub mod config;
pub mod explain;
pub mod init;
pub mod search;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Explain(cmd) => explain::run(&cmd),
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
        Commands::Init(cmd) => init::run(ctx, &cmd),
    }
}
