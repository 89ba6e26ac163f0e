// Tool Handler Trait - Common interface for every exposed tool
use crate::{
    errors::McpResult,
    mcp::{McpTool, ToolContent},
};
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Name the tool is registered and invoked under
    fn name(&self) -> &'static str;

    /// Descriptor advertised through `tools/list`
    fn describe(&self) -> McpTool;

    /// Run the tool with the caller's argument object, if any
    async fn invoke(&self, arguments: Option<Value>) -> McpResult<Vec<ToolContent>>;
}
