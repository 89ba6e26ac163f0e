// Harness MCP entry point
// Without a subcommand, lists connectors once and prints the JSON response.
// `stdio` serves the same listing as an MCP tool over stdin/stdout.
use anyhow::{Context, Result};
use clap::Parser;
use harness_mcp::{
    cli::{Cli, Command},
    ConnectorClient, ConnectorFilter, HarnessConfig, McpServer, ToolRegistry,
};
use std::{fs::OpenOptions, path::Path, process::ExitCode, sync::Mutex};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Before parsing, so `.env` can supply RUST_LOG and HARNESS_MCP_LOG_FILE too.
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let default_level = match cli.command {
        Some(Command::Stdio) => "info",
        None => "warn",
    };
    init_logging(cli.log_file.as_deref(), cli.debug, default_level)?;

    let config = HarnessConfig::from_env()?;
    info!(base_url = %config.base_url, account = %config.account_id, "Loaded Harness configuration");

    let client = ConnectorClient::new(config)?;

    match cli.command {
        Some(Command::Stdio) => {
            let registry = ToolRegistry::with_harness_tools(client.into());
            McpServer::new(registry).run().await
        }
        None => {
            let filter = ConnectorFilter::from(cli.filter);
            let response = client.list_connectors(&filter).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
    }
}

// stdout carries protocol traffic or command output, so logs never go there.
fn init_logging(log_file: Option<&Path>, debug: bool, default_level: &str) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}
