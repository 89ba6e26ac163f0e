// Harness MCP bridge
// Exposes Harness connector listing to AI agents as the `list-connector` tool

pub mod cli;
pub mod config;
pub mod errors;
pub mod harness;
pub mod mcp;
pub mod tools;

pub use config::HarnessConfig;
pub use errors::{McpError, McpResult};
pub use harness::{ConnectorClient, ConnectorFilter};
pub use mcp::McpServer;
pub use tools::ToolRegistry;
