//! Infrastructure layer - RPC access and file output

pub mod blockchain;
pub mod output;

pub use output::ProgramIdWriter;
