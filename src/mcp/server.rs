// MCP Server - JSON-RPC handler
use crate::{
    errors::{McpError, McpErrorResponse, McpResult, INVALID_REQUEST, PARSE_ERROR},
    mcp::types::*,
    tools::ToolRegistry,
};
use anyhow::Result;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "harness-mcp";

pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Serve on stdin/stdout until the client closes its end.
    pub async fn run(self) -> Result<()> {
        info!(tools = self.registry.tool_count(), "Harness MCP server starting on stdio");

        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await?;

        info!("MCP Server shutting down");
        Ok(())
    }

    /// Newline-delimited JSON-RPC loop. One message is handled completely
    /// before the next line is read.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let n = reader.read_until(b'\n', &mut buf).await?;
            if n == 0 {
                break; // EOF
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let message = line.trim();
                    if message.is_empty() {
                        continue;
                    }

                    debug!("Received message: {}", message);
                    match self.handle_message(message).await {
                        Some(response) => response,
                        None => continue,
                    }
                }
                Err(e) => {
                    warn!("Discarding message that is not UTF-8: {}", e);
                    parse_error(format!("Parse error: {e}"))
                }
            };

            let response_str = serde_json::to_string(&response)?;
            debug!("Sending response: {}", response_str);

            writer.write_all(response_str.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }

        Ok(())
    }

    /// Handles one raw message. Returns `None` for notifications.
    pub async fn handle_message(&self, message: &str) -> Option<JsonRpcResponse> {
        let raw: Value = match serde_json::from_str(message) {
            Ok(value) => value,
            Err(e) => {
                warn!("Discarding unparseable message: {}", e);
                return Some(parse_error(format!("Parse error: {e}")));
            }
        };

        // A present but null id is neither a request nor a notification.
        let has_id = raw.get("id").is_some();
        let id = raw.get("id").cloned().filter(|id| !id.is_null());
        let request: JsonRpcRequest = match serde_json::from_value(raw) {
            Ok(request) => request,
            Err(e) => {
                return Some(JsonRpcResponse::failure(
                    id,
                    McpErrorResponse {
                        code: INVALID_REQUEST,
                        message: format!("Invalid request: {e}"),
                        data: None,
                    },
                ));
            }
        };

        if !has_id {
            self.handle_notification(&request);
            return None;
        }

        if request.id.is_none() {
            return Some(JsonRpcResponse::failure(
                None,
                McpErrorResponse {
                    code: INVALID_REQUEST,
                    message: "Invalid request: id must not be null".to_string(),
                    data: None,
                },
            ));
        }

        let result = match request.method.as_str() {
            "initialize" => self.initialize(request.params),
            "ping" => Ok(json!({})),
            "tools/list" => self.list_tools(),
            "tools/call" => self.call_tool(request.params).await,
            other => Err(McpError::MethodNotFound(other.to_string())),
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(request.id, value),
            Err(e) => {
                error!("Error handling {}: {}", request.method, e);
                JsonRpcResponse::failure(request.id, e.to_jsonrpc_error())
            }
        })
    }

    fn handle_notification(&self, request: &JsonRpcRequest) {
        match request.method.as_str() {
            "notifications/initialized" => info!("Client finished initialization"),
            "notifications/cancelled" => debug!("Ignoring cancellation notice"),
            other => debug!("Ignoring notification {}", other),
        }
    }

    fn initialize(&self, params: Option<Value>) -> McpResult<Value> {
        let client_info = params
            .and_then(|p| p.get("clientInfo").cloned())
            .and_then(|c| serde_json::from_value::<ClientInfo>(c).ok());

        if let Some(info) = &client_info {
            info!(name = %info.name, version = %info.version, "Client connected");
        }

        Ok(json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {
                    "listChanged": false
                }
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            }
        }))
    }

    fn list_tools(&self) -> McpResult<Value> {
        let tools = self.registry.list_tools();
        Ok(json!({ "tools": tools }))
    }

    async fn call_tool(&self, params: Option<Value>) -> McpResult<Value> {
        let call_request: ToolCallRequest = serde_json::from_value(
            params.ok_or_else(|| McpError::InvalidArguments("Missing params".to_string()))?,
        )
        .map_err(|e| McpError::InvalidArguments(e.to_string()))?;

        let tool_result = match self
            .registry
            .call_tool(&call_request.name, call_request.arguments)
            .await
        {
            Ok(content) => ToolCallResult::success(content),
            Err(e) if e.is_tool_failure() => {
                warn!(tool = %call_request.name, "Tool call failed: {}", e);
                ToolCallResult::error(e.to_string())
            }
            Err(e) => return Err(e),
        };

        Ok(serde_json::to_value(tool_result)?)
    }
}

fn parse_error(message: String) -> JsonRpcResponse {
    JsonRpcResponse::failure(
        None,
        McpErrorResponse {
            code: PARSE_ERROR,
            message,
            data: None,
        },
    )
}
