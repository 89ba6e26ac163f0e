// MCP Error Types
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type McpResult<T> = Result<T, McpError>;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Unknown tool: {0}")]
    ToolNotFound(String),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("HARNESS_API_KEY is not set")]
    MissingApiKey,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Harness API returned {status}: {body}")]
    Upstream {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpErrorResponse {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

impl McpError {
    /// True for failures raised by the Harness round trip itself, which are
    /// reported inside a tool result rather than as a protocol error.
    pub fn is_tool_failure(&self) -> bool {
        matches!(
            self,
            McpError::Http(_) | McpError::Upstream { .. } | McpError::Json(_) | McpError::InvalidArguments(_)
        )
    }

    pub fn to_jsonrpc_error(&self) -> McpErrorResponse {
        match self {
            McpError::ToolNotFound(name) => McpErrorResponse {
                code: METHOD_NOT_FOUND,
                message: self.to_string(),
                data: Some(serde_json::json!({ "name": name })),
            },
            McpError::MethodNotFound(_) => McpErrorResponse {
                code: METHOD_NOT_FOUND,
                message: self.to_string(),
                data: None,
            },
            McpError::InvalidArguments(_) => McpErrorResponse {
                code: INVALID_PARAMS,
                message: self.to_string(),
                data: None,
            },
            _ => McpErrorResponse {
                code: INTERNAL_ERROR,
                message: self.to_string(),
                data: None,
            },
        }
    }
}
