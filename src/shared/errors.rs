//! Error handling for the application

use thiserror::Error;

/// Transport-level errors from the RPC collaborator
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("RPC request failed: {0}")]
    RequestFailed(String),

    #[error("HTTP transport failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("RPC node returned error {code}: {message}")]
    NodeError { code: i64, message: String },
}

/// Pool-related errors
#[derive(Error, Debug)]
pub enum PoolError {
    #[error("Invalid pool address: {0}")]
    InvalidAddress(String),

    #[error("Pool account not found: {0}")]
    AccountNotFound(String),

    #[error("Malformed RPC response: {0}")]
    MalformedResponse(String),

    #[error("Failed to decode account data: {0}")]
    Decode(String),

    #[error(transparent)]
    Transport(#[from] RpcError),

    #[error("Failed to write program id to {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Pool error: {0}")]
    Pool(#[from] PoolError),

    #[error("Pool not found: {0}")]
    PoolNotFound(String),

    #[error("Inspection failed: {0}")]
    InspectionFailed(String),
}

impl AppError {
    /// Errors whose message has already been printed as command output
    pub fn is_reported(&self) -> bool {
        matches!(self, AppError::PoolNotFound(_) | AppError::InspectionFailed(_))
    }
}
