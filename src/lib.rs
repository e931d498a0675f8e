//! pool-inspect - Raydium pool account inspection
//! Resolves a pool's market program id and identifies its program version

pub mod domain;
pub mod infrastructure;
pub mod application;
pub mod shared;

// Re-export main types for convenience
pub use domain::pool::{PoolProgramResolver, PoolVersionInspector, PoolVersion, VersionInspection};
pub use infrastructure::blockchain::{AccountSource, SolanaRpcClient};
pub use shared::errors::{AppError, PoolError, RpcError};
