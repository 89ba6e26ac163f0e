// Model Context Protocol over stdio
pub mod server;
pub mod types;

pub use server::McpServer;
pub use types::*;
