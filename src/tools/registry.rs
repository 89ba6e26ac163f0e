// Tool Registry - Routes tool calls to the handler registered under that name
use super::handler::ToolHandler;
use crate::{
    errors::{McpError, McpResult},
    harness::ConnectorClient,
    mcp::{McpTool, ToolContent},
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every Harness tool wired to `client`.
    pub fn with_harness_tools(client: Arc<ConnectorClient>) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(super::list_connector::ListConnectorTool::new(client)));
        registry
    }

    /// Adds a handler, replacing any previous handler with the same name.
    pub fn register(&mut self, handler: Arc<dyn ToolHandler>) {
        self.tools.insert(handler.name().to_string(), handler);
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Descriptors for every registered tool, sorted by name
    pub fn list_tools(&self) -> Vec<McpTool> {
        let mut tools: Vec<McpTool> = self.tools.values().map(|tool| tool.describe()).collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    pub async fn call_tool(&self, name: &str, arguments: Option<Value>) -> McpResult<Vec<ToolContent>> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| McpError::ToolNotFound(name.to_string()))?;

        debug!(tool = name, "Invoking tool");
        tool.invoke(arguments).await
    }
}
