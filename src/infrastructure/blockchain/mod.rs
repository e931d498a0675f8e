//! Direct blockchain reading for Solana pool accounts

pub mod account_parser;
pub mod known_programs;
pub mod rpc_client;

pub use account_parser::{parse_legacy_market_program_id, parse_program_id, parse_version_tag};
pub use known_programs::program_name;
pub use rpc_client::{AccountSource, SolanaRpcClient};
