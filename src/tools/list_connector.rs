//! `list-connector` tool
//!
//! Forwards the caller's filters to the Harness connector listing endpoint and
//! hands the response back unchanged, pretty-printed as text content.

use super::handler::ToolHandler;
use crate::{
    errors::{McpError, McpResult},
    harness::{ConnectorClient, ConnectorFilter},
    mcp::{McpTool, ToolContent},
};
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::info;

pub const TOOL_NAME: &str = "list-connector";

pub struct ListConnectorTool {
    client: Arc<ConnectorClient>,
}

impl ListConnectorTool {
    pub fn new(client: Arc<ConnectorClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ToolHandler for ListConnectorTool {
    fn name(&self) -> &'static str {
        TOOL_NAME
    }

    fn describe(&self) -> McpTool {
        McpTool {
            name: TOOL_NAME.to_string(),
            description: "List available connectors".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "connector_type": {
                        "type": "string",
                        "description": "Type of connector to filter by"
                    },
                    "connector_names": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "List of connector names to filter by"
                    },
                    "connector_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "List of connector IDs to filter by"
                    }
                },
                "required": []
            }),
        }
    }

    async fn invoke(&self, arguments: Option<Value>) -> McpResult<Vec<ToolContent>> {
        let filter = filter_from_arguments(arguments.as_ref())?;
        info!(?filter, "Listing connectors");

        let response = self.client.list_connectors(&filter).await?;
        Ok(vec![ToolContent::text(serde_json::to_string_pretty(&response)?)])
    }
}

/// Maps the tool's argument object onto a connector filter. A single
/// `connector_type` becomes a one-element `types` list.
pub fn filter_from_arguments(arguments: Option<&Value>) -> McpResult<ConnectorFilter> {
    let empty = Map::new();
    let args = match arguments {
        None | Some(Value::Null) => &empty,
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(McpError::InvalidArguments(format!(
                "arguments must be an object, got {other}"
            )))
        }
    };

    let connector_type = optional_string(args, "connector_type")?.filter(|t| !t.is_empty());

    Ok(ConnectorFilter {
        names: optional_string_array(args, "connector_names")?,
        identifiers: optional_string_array(args, "connector_ids")?,
        types: connector_type.map(|t| vec![t]),
    })
}

fn optional_string(args: &Map<String, Value>, key: &str) -> McpResult<Option<String>> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(McpError::InvalidArguments(format!(
            "{key} must be a string, got {other}"
        ))),
    }
}

fn optional_string_array(args: &Map<String, Value>, key: &str) -> McpResult<Option<Vec<String>>> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(McpError::InvalidArguments(format!(
                    "{key} must contain only strings, got {other}"
                ))),
            })
            .collect::<McpResult<Vec<_>>>()
            .map(Some),
        Some(other) => Err(McpError::InvalidArguments(format!(
            "{key} must be an array of strings, got {other}"
        ))),
    }
}
