// Command-line surface
use crate::harness::ConnectorFilter;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "harness-mcp",
    version,
    about = "List Harness connectors, or serve them to MCP clients over stdio",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Log at debug level regardless of RUST_LOG
    #[arg(long, global = true)]
    pub debug: bool,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true, env = "HARNESS_MCP_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the MCP server on stdin/stdout
    Stdio,
}

/// Filters for the one-shot listing mode.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Connector names to match
    #[arg(long, num_args = 1.., value_name = "NAME")]
    pub names: Option<Vec<String>>,

    /// Connector identifiers to match
    #[arg(long, num_args = 1.., value_name = "ID")]
    pub identifiers: Option<Vec<String>>,

    /// Connector types to match (e.g. Aws, Gcp, Azure)
    #[arg(long, num_args = 1.., value_name = "TYPE")]
    pub types: Option<Vec<String>>,
}

impl From<FilterArgs> for ConnectorFilter {
    fn from(args: FilterArgs) -> Self {
        ConnectorFilter {
            names: args.names,
            identifiers: args.identifiers,
            types: args.types,
        }
    }
}
