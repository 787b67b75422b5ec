//! Implementation of `citrine explain`.

use std::process::ExitCode;

use crate::cli::args::ExplainCommand;

/// Prints the query the flags describe, without sending it.
pub fn run(cmd: &ExplainCommand) -> ExitCode {
    match serde_json::to_string_pretty(&cmd.query.to_query()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to encode query: {e}");
            ExitCode::FAILURE
        }
    }
}
