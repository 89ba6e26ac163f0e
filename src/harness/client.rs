// Harness connector listing client
use super::types::{ConnectorFilter, ListConnectorsBody};
use crate::{
    config::HarnessConfig,
    errors::{McpError, McpResult},
};
use serde_json::Value;
use tracing::debug;

pub const LIST_CONNECTORS_PATH: &str = "/ng/api/connectors/listV2";
pub const API_KEY_HEADER: &str = "x-api-key";

pub struct ConnectorClient {
    config: HarnessConfig,
    api_key: String,
    http_client: reqwest::Client,
}

impl ConnectorClient {
    /// Fails with `MissingApiKey` when the configuration carries no key.
    pub fn new(config: HarnessConfig) -> McpResult<Self> {
        let api_key = config.require_api_key()?.to_string();
        Ok(Self {
            config,
            api_key,
            http_client: reqwest::Client::new(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.config.base_url, LIST_CONNECTORS_PATH)
    }

    /// Lists connectors matching `filter` and returns the response body as
    /// untyped JSON.
    pub async fn list_connectors(&self, filter: &ConnectorFilter) -> McpResult<Value> {
        let url = self.endpoint();
        let body = build_request_body(filter, &self.config.category);

        debug!(url = %url, body = ?body, "Listing Harness connectors");

        let response = self
            .http_client
            .post(&url)
            .query(&build_query(&self.config))
            .header(API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            debug!(%status, "Harness connector listing failed");
            return Err(McpError::Upstream { status, body: text });
        }

        let result: Value = serde_json::from_str(&text)?;
        debug!(%status, bytes = text.len(), "Harness connector listing succeeded");
        Ok(result)
    }
}

/// Query parameters sent with every listing call, in wire order.
pub fn build_query(config: &HarnessConfig) -> Vec<(&'static str, String)> {
    vec![
        ("accountIdentifier", config.account_id.clone()),
        ("orgIdentifier", config.org_id.clone()),
        ("projectIdentifier", config.project_id.clone()),
        ("getDefaultFromOtherRepo", "true".to_string()),
        ("getDistinctFromBranches", "true".to_string()),
        ("onlyFavorites", "false".to_string()),
        ("pageIndex", config.page_index.to_string()),
        ("pageSize", config.page_size.to_string()),
        ("sortOrders", "orderType=ASC".to_string()),
    ]
}

pub fn build_request_body(filter: &ConnectorFilter, category: &str) -> ListConnectorsBody {
    ListConnectorsBody::new(filter, category)
}
