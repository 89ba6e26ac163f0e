// Harness connection and request-scope configuration
use crate::errors::{McpError, McpResult};

pub const DEFAULT_BASE_URL: &str = "https://app.harness.io";
pub const DEFAULT_ACCOUNT_ID: &str = "wFHXHD0RRQWoO8tIZT5YVw";
pub const DEFAULT_ORG_ID: &str = "default";
pub const DEFAULT_PROJECT_ID: &str = "nitisha";
pub const DEFAULT_PAGE_INDEX: u32 = 0;
pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const DEFAULT_CATEGORY: &str = "CLOUD_PROVIDER";

#[derive(Clone)]
pub struct HarnessConfig {
    pub base_url: String,
    pub api_key: Option<String>,

    // Request scope sent as query parameters on every listing call
    pub account_id: String,
    pub org_id: String,
    pub project_id: String,
    pub page_index: u32,
    pub page_size: u32,

    /// Connector category placed in the `categories` body field.
    pub category: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            account_id: DEFAULT_ACCOUNT_ID.to_string(),
            org_id: DEFAULT_ORG_ID.to_string(),
            project_id: DEFAULT_PROJECT_ID.to_string(),
            page_index: DEFAULT_PAGE_INDEX,
            page_size: DEFAULT_PAGE_SIZE,
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

// Hand-written so the key never ends up in a log line.
impl std::fmt::Debug for HarnessConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HarnessConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("account_id", &self.account_id)
            .field("org_id", &self.org_id)
            .field("project_id", &self.project_id)
            .field("page_index", &self.page_index)
            .field("page_size", &self.page_size)
            .field("category", &self.category)
            .finish()
    }
}

impl HarnessConfig {
    pub fn from_env() -> McpResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> McpResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            base_url: get("HARNESS_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            api_key: get("HARNESS_API_KEY"),
            account_id: get("HARNESS_ACCOUNT_ID").unwrap_or(defaults.account_id),
            org_id: get("HARNESS_ORG_ID").unwrap_or(defaults.org_id),
            project_id: get("HARNESS_PROJECT_ID").unwrap_or(defaults.project_id),
            page_index: parse_number("HARNESS_PAGE_INDEX", get("HARNESS_PAGE_INDEX"), defaults.page_index)?,
            page_size: parse_number("HARNESS_PAGE_SIZE", get("HARNESS_PAGE_SIZE"), defaults.page_size)?,
            category: get("HARNESS_CONNECTOR_CATEGORY").unwrap_or(defaults.category),
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The API key, or `MissingApiKey` when it is unset or blank.
    pub fn require_api_key(&self) -> McpResult<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(McpError::MissingApiKey)
    }
}

fn parse_number(key: &str, raw: Option<String>, default: u32) -> McpResult<u32> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| McpError::Config(format!("{key} must be a non-negative integer, got {value:?}"))),
    }
}
