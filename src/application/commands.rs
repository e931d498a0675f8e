//! CLI commands and handlers
use clap::{Parser, Subcommand};
use crate::domain::pool::{PoolProgramResolver, PoolVersionInspector, ResolutionSource, VersionInspection};
use crate::infrastructure::blockchain::{program_name, AccountSource};
use crate::infrastructure::ProgramIdWriter;
use crate::shared::config::AppConfig;
use crate::shared::errors::AppError;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "pool-inspect")]
#[command(version, about = "Inspect Raydium pool accounts: market program id and pool version")]
pub struct Cli {
    /// Path to config file (defaults to ./Config.toml when present)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// RPC endpoint URL (overrides config)
    #[arg(long, global = true)]
    pub rpc_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the market program id stored in a pool account
    #[command(name = "program-id")]
    ProgramId {
        /// Pool address (base-58)
        pool: String,

        /// File to write the program id to (overrides config)
        #[arg(short, long)]
        output: Option<String>,

        /// Do not write the program id to a file
        #[arg(long)]
        no_write: bool,

        /// Do not fall back to the legacy JSON account payload
        #[arg(long)]
        no_legacy_fallback: bool,
    },

    /// Identify the pool program version from its version tag
    Version {
        /// Pool address (base-58)
        pool: String,

        /// Show owner, lamports and data size of the pool account
        #[arg(short, long)]
        detailed: bool,
    },
}

pub struct CommandExecutor;

impl CommandExecutor {
    /// Execute the selected command
    pub async fn execute(
        command: Commands,
        config: &AppConfig,
        source: Arc<dyn AccountSource>,
    ) -> Result<(), AppError> {
        match command {
            Commands::ProgramId { pool, output, no_write, no_legacy_fallback } => {
                Self::execute_program_id_command(&pool, output, no_write, no_legacy_fallback, config, source).await
            }
            Commands::Version { pool, detailed } => {
                Self::execute_version_command(&pool, detailed, source).await
            }
        }
    }

    async fn execute_program_id_command(
        pool: &str,
        output: Option<String>,
        no_write: bool,
        no_legacy_fallback: bool,
        config: &AppConfig,
        source: Arc<dyn AccountSource>,
    ) -> Result<(), AppError> {
        let mut resolver = PoolProgramResolver::new(source)
            .with_legacy_fallback(config.resolver.legacy_fallback && !no_legacy_fallback);

        if !no_write {
            let path = output.unwrap_or_else(|| config.resolver.output_path.clone());
            resolver = resolver.with_writer(ProgramIdWriter::new(path));
        }

        let resolved = resolver.resolve(pool).await?;

        println!("Market program id: {}", resolved.encoded());
        if let Some(name) = program_name(&resolved.program_id) {
            println!("Program: {}", name);
        }
        if resolved.source == ResolutionSource::LegacyJson {
            info!("Resolved from legacy JSON account payload");
        }

        Ok(())
    }

    async fn execute_version_command(
        pool: &str,
        detailed: bool,
        source: Arc<dyn AccountSource>,
    ) -> Result<(), AppError> {
        let inspector = PoolVersionInspector::new(source);
        let inspection = inspector.inspect(pool).await;

        for line in render_inspection(&inspection, detailed) {
            println!("{}", line);
        }

        match inspection {
            VersionInspection::Found(_) => Ok(()),
            VersionInspection::NotFound => Err(AppError::PoolNotFound(pool.to_string())),
            VersionInspection::TransportError(detail) | VersionInspection::DecodeError(detail) => {
                error!("Version inspection of {} failed: {}", pool, detail);
                Err(AppError::InspectionFailed(detail))
            }
        }
    }
}

/// Console lines for a version inspection
fn render_inspection(inspection: &VersionInspection, detailed: bool) -> Vec<String> {
    match inspection {
        VersionInspection::Found(report) => {
            let mut lines = vec![
                format!("Version bytes (hex): {}", report.version_hex),
                format!("Pool version: {}", report.label()),
            ];

            if detailed {
                match report.account.owner {
                    Some(owner) => lines.push(format!("Owner: {}", owner)),
                    None => lines.push("Owner: unknown".to_string()),
                }
                lines.push(format!("Lamports: {}", report.account.lamports));
                lines.push(format!("Data size: {} bytes", report.account.data_len));
            }
            lines
        }
        VersionInspection::NotFound => vec!["Pool not found".to_string()],
        VersionInspection::TransportError(detail) | VersionInspection::DecodeError(detail) => {
            vec![format!("Error: {}", detail)]
        }
    }
}
