//! Clap argument definitions for the `citrine` CLI.

use clap::{Args, Parser, Subcommand};

use super::query::PropertyFilter;

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "citrine")]
#[command(about = "Search the Citrination materials database")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags describing a PIF search.
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Free-text query
    pub text: Option<String>,

    /// Chemical formula to match exactly
    #[arg(long)]
    pub formula: Option<String>,

    /// Restrict to a dataset id (can be specified multiple times)
    #[arg(long = "dataset")]
    pub datasets: Vec<String>,

    /// Property filter: NAME, NAME=VALUE or NAME=MIN..MAX (either bound may be omitted)
    #[arg(long = "property", value_parser = PropertyFilter::parse)]
    pub properties: Vec<PropertyFilter>,

    /// Index of the first hit
    #[arg(long)]
    pub from: Option<u64>,

    /// Hits per page [default: search.page_size]
    #[arg(short = 'n', long)]
    pub size: Option<u64>,

    /// Add a histogram analysis over a record path (can be specified multiple times)
    #[arg(long = "histogram")]
    pub histograms: Vec<String>,

    /// Bucket width for histogram analyses
    #[arg(long, default_value = "1.0")]
    pub interval: f64,

    /// Add a statistics analysis over a record path (can be specified multiple times)
    #[arg(long = "statistics")]
    pub statistics: Vec<String>,

    /// Include the full record with each hit
    #[arg(long)]
    pub return_system: bool,
}

/// Arguments for `citrine explain`.
#[derive(Args, Debug, Clone)]
pub struct ExplainCommand {
    #[command(flatten)]
    /// Query flags.
    pub query: QueryArgs,
}

/// Arguments for `citrine search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    #[command(flatten)]
    /// Query flags.
    pub query: QueryArgs,

    /// Page through results up to search.max_hits (or --max-hits)
    #[arg(long)]
    pub all: bool,

    /// Upper bound on hits collected with --all
    #[arg(long, requires = "all")]
    pub max_hits: Option<u64>,

    /// Output the raw result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `citrine init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.citrine.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `citrine` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the query JSON without sending it
    Explain(ExplainCommand),

    /// Run a PIF search and print the hits
    #[command(after_help = "\
EXAMPLES:
  citrine search --formula PbTe
  citrine search --property 'Band gap=1.0..2.5' --statistics properties.value
  citrine search thermoelectric --dataset 150 --all --max-hits 200

ENVIRONMENT:
  CITRINATION_SITE      Overrides client.host
  CITRINATION_API_KEY   Overrides client.api_key
  CITRINE_LOG           Log filter (default: warn)")]
    Search(SearchCommand),

    /// Show effective configuration settings
    Config,

    /// Initialize citrine configuration in current directory
    Init(InitCommand),
}
