// MCP tools exposed by this server
pub mod handler;
pub mod list_connector;
pub mod registry;

pub use handler::ToolHandler;
pub use list_connector::ListConnectorTool;
pub use registry::ToolRegistry;
