//! Model Context Protocol over newline-delimited JSON-RPC on stdio.

pub mod protocol;
pub mod server;

pub const SERVER_NAME: &str = "idfm";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";
