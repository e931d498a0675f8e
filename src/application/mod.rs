//! Application layer - CLI commands

pub mod commands;

pub use commands::{Cli, Commands, CommandExecutor};
