//! Implementation of `citrine search`.

use std::process::ExitCode;

use citrine_client::{HttpTransport, SearchClient};
use citrine_query::{PifQuery, ReturningQuery};
use tracing::warn;

use crate::cli::{args::SearchCommand, context::CommandContext, output::render_pif_result};

/// Runs a PIF search against the configured site.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let config = &ctx.config;
    for warning in config.validate() {
        warn!(%warning, "configuration warning");
    }

    let transport = match HttpTransport::new(&config.client) {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let client = SearchClient::with_settings(transport, config.search.clone());

    let query = sized_query(cmd, config.search.page_size);
    let result = if cmd.all {
        client.pif_search_pages(&query, cmd.max_hits)
    } else {
        client.pif_search(&query)
    };
    let result = match result {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to encode result: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", render_pif_result(&result));
    }
    ExitCode::SUCCESS
}

/// The query to send. A single request gets the configured page size when the
/// flags set none; paged runs leave the size to the client, which caps it at
/// the hit limit.
fn sized_query(cmd: &SearchCommand, page_size: u64) -> PifQuery {
    let query = cmd.query.to_query();
    if cmd.all || query.base().size().is_some() {
        query
    } else {
        query.with_size(page_size)
    }
}
