use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pool_inspect::application::{Cli, CommandExecutor};
use pool_inspect::infrastructure::blockchain::SolanaRpcClient;
use pool_inspect::shared::config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Diagnostics go to stderr; stdout carries only command output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Priority: CLI args > Config file > Defaults
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from(path)?,
        None => ConfigLoader::load_or_default()?,
    };
    if let Some(rpc_url) = cli.rpc_url {
        config.network.rpc_url = rpc_url;
    }

    let client = SolanaRpcClient::new(&config.network)?;
    match CommandExecutor::execute(cli.command, &config, Arc::new(client)).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is_reported() => Ok(ExitCode::FAILURE),
        Err(e) => Err(e.into()),
    }
}
