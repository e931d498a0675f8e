//! Solana RPC client for direct blockchain reading

use async_trait::async_trait;
use serde_json::{json, Value};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

use crate::shared::config::NetworkConfig;
use crate::shared::errors::{AppError, RpcError};
use crate::shared::types::AccountSnapshot;

/// Source of on-chain account state
#[async_trait]
pub trait AccountSource: Send + Sync {
    /// Fetch an account; `Ok(None)` when the account does not exist
    async fn get_account_info(&self, pubkey: &Pubkey) -> Result<Option<AccountSnapshot>, RpcError>;

    /// Fetch the raw JSON-RPC `getAccountInfo` envelope (`{"result": {"value": ...}}`)
    async fn get_account_info_raw(&self, pubkey: &Pubkey) -> Result<Value, RpcError>;
}

/// Solana RPC client wrapper
pub struct SolanaRpcClient {
    client: RpcClient,
    http: reqwest::Client,
    rpc_url: String,
    commitment: CommitmentConfig,
}

impl SolanaRpcClient {
    /// Create new RPC client from network configuration
    pub fn new(config: &NetworkConfig) -> Result<Self, AppError> {
        let commitment = config.commitment_config()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client: RpcClient::new_with_timeout_and_commitment(
                config.rpc_url.clone(),
                config.timeout(),
                commitment,
            ),
            http,
            rpc_url: config.rpc_url.clone(),
            commitment,
        })
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

#[async_trait]
impl AccountSource for SolanaRpcClient {
    async fn get_account_info(&self, pubkey: &Pubkey) -> Result<Option<AccountSnapshot>, RpcError> {
        debug!("getAccountInfo {} via {}", pubkey, self.rpc_url);

        let response = self
            .client
            .get_account_with_commitment(pubkey, self.commitment)
            .await
            .map_err(|e| RpcError::RequestFailed(format!("Failed to get account {}: {}", pubkey, e)))?;

        Ok(response.value.map(AccountSnapshot::from))
    }

    async fn get_account_info_raw(&self, pubkey: &Pubkey) -> Result<Value, RpcError> {
        debug!("raw getAccountInfo {} via {}", pubkey, self.rpc_url);

        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getAccountInfo",
            "params": [
                pubkey.to_string(),
                {
                    "encoding": "base64",
                    "commitment": self.commitment.commitment.to_string(),
                }
            ]
        });

        let envelope: Value = self
            .http
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        check_envelope(envelope)
    }
}

/// Turn a JSON-RPC `error` object into `RpcError::NodeError`
fn check_envelope(envelope: Value) -> Result<Value, RpcError> {
    if let Some(error) = envelope.get("error") {
        return Err(RpcError::NodeError {
            code: error.get("code").and_then(Value::as_i64).unwrap_or_default(),
            message: error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string(),
        });
    }

    Ok(envelope)
}
