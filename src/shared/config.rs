use std::fs;
use std::path::Path;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;
use crate::shared::errors::AppError;

pub const DEFAULT_CONFIG_FILE: &str = "Config.toml";
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEFAULT_OUTPUT_PATH: &str = "info.txt";

/// Network configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub rpc_url: String,
    pub commitment: String,
    pub timeout_ms: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            commitment: "confirmed".to_string(),
            timeout_ms: 30000,
        }
    }
}

impl NetworkConfig {
    pub fn commitment_config(&self) -> Result<CommitmentConfig, AppError> {
        match self.commitment.to_lowercase().as_str() {
            "processed" => Ok(CommitmentConfig::processed()),
            "confirmed" => Ok(CommitmentConfig::confirmed()),
            "finalized" => Ok(CommitmentConfig::finalized()),
            other => Err(AppError::ConfigError(format!("Unknown commitment level: {}", other))),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Program id resolver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub output_path: String,
    pub legacy_fallback: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            legacy_fallback: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub network: NetworkConfig,
    pub resolver: ResolverConfig,
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from an explicit file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<AppConfig, AppError> {
        let path = path.as_ref();
        let config_content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigError(format!("Failed to read config file {}: {}", path.display(), e)))?;

        Self::parse(&config_content)
    }

    /// Load `Config.toml` from the working directory, or defaults when it is absent
    pub fn load_or_default() -> Result<AppConfig, AppError> {
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::load_from(DEFAULT_CONFIG_FILE)
        } else {
            Ok(AppConfig::default())
        }
    }

    pub fn parse(content: &str) -> Result<AppConfig, AppError> {
        let config: AppConfig = toml::from_str(content)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        // Surface a bad commitment level at load time rather than on first request
        config.network.commitment_config()?;

        Ok(config)
    }
}
