use harness_mcp::{ConnectorClient, ConnectorFilter, HarnessConfig, McpServer, ToolRegistry};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LIST_PATH: &str = "/ng/api/connectors/listV2";

fn client_for(server: &MockServer) -> Arc<ConnectorClient> {
    let config = HarnessConfig::default()
        .with_api_key("test-key")
        .with_base_url(server.uri());
    Arc::new(ConnectorClient::new(config).unwrap())
}

fn server_for(mock: &MockServer) -> McpServer {
    McpServer::new(ToolRegistry::with_harness_tools(client_for(mock)))
}

async fn call(server: &McpServer, id: u64, method: &str, params: Value) -> Value {
    let request = json!({ "jsonrpc": "2.0", "id": id, "method": method, "params": params });
    let response = server
        .handle_message(&request.to_string())
        .await
        .expect("request should get a response");
    serde_json::to_value(response).unwrap()
}

fn page() -> Value {
    json!({
        "status": "SUCCESS",
        "data": {
            "content": [
                { "connector": { "identifier": "gcp_prod", "type": "Gcp", "tags": {} } }
            ],
            "pageItemCount": 1
        },
        "correlationId": "3f1c"
    })
}

#[tokio::test]
async fn tools_list_advertises_list_connector() {
    let mock = MockServer::start().await;
    let server = server_for(&mock);

    let response = call(&server, 1, "tools/list", json!({})).await;
    let tools = response["result"]["tools"].as_array().unwrap();

    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0]["name"], "list-connector");
    assert_eq!(tools[0]["description"], "List available connectors");
    let schema = &tools[0]["inputSchema"];
    assert_eq!(schema["properties"]["connector_type"]["type"], "string");
    assert_eq!(schema["properties"]["connector_names"]["type"], "array");
    assert_eq!(schema["properties"]["connector_ids"]["items"]["type"], "string");
    assert_eq!(schema["required"], json!([]));
}

#[tokio::test]
async fn connector_type_matches_direct_types_filter() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LIST_PATH))
        .and(body_json(json!({
            "categories": ["CLOUD_PROVIDER"],
            "filterType": "Connector",
            "types": ["GCP"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page()))
        .expect(2)
        .mount(&mock)
        .await;

    let client = client_for(&mock);
    client
        .list_connectors(&ConnectorFilter::default().with_types(["GCP"]))
        .await
        .unwrap();

    let server = McpServer::new(ToolRegistry::with_harness_tools(client));
    let response = call(
        &server,
        2,
        "tools/call",
        json!({ "name": "list-connector", "arguments": { "connector_type": "GCP" } }),
    )
    .await;
    assert!(response["result"].get("isError").is_none());
}

#[tokio::test]
async fn tool_text_round_trips_to_the_raw_response() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LIST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(page()))
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let response = call(&server, 3, "tools/call", json!({ "name": "list-connector" })).await;

    let content = response["result"]["content"].as_array().unwrap();
    assert_eq!(content.len(), 1);
    assert_eq!(content[0]["type"], "text");

    let text = content[0]["text"].as_str().unwrap();
    assert_eq!(text, serde_json::to_string_pretty(&page()).unwrap());
    assert!(text.contains("\n  \"data\""));

    let parsed: Value = serde_json::from_str(text).unwrap();
    assert_eq!(parsed, page());
}

#[tokio::test]
async fn unknown_tool_makes_no_network_call() {
    let mock = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(page()))
        .expect(0)
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let response = call(&server, 4, "tools/call", json!({ "name": "bogus-tool", "arguments": {} })).await;

    assert_eq!(response["error"]["code"], -32601);
    assert_eq!(response["error"]["data"]["name"], "bogus-tool");
    assert!(response.get("result").is_none());
}

#[tokio::test]
async fn upstream_failure_is_an_error_tagged_result() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LIST_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let response = call(&server, 5, "tools/call", json!({ "name": "list-connector" })).await;

    assert_eq!(response["result"]["isError"], true);
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("500"));
    assert!(text.contains("boom"));
}

#[tokio::test]
async fn badly_typed_arguments_never_reach_harness() {
    let mock = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(page()))
        .expect(0)
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let response = call(
        &server,
        6,
        "tools/call",
        json!({ "name": "list-connector", "arguments": { "connector_ids": "aws-conn-1" } }),
    )
    .await;

    assert_eq!(response["result"]["isError"], true);
}

#[tokio::test]
async fn full_session_over_a_byte_stream() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LIST_PATH))
        .and(body_json(json!({
            "categories": ["CLOUD_PROVIDER"],
            "filterType": "Connector",
            "connectorNames": ["prod gcp"],
            "connectorIdentifiers": ["gcp_prod"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page()))
        .expect(1)
        .mount(&mock)
        .await;

    let input = [
        json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize",
                "params": { "protocolVersion": "2024-11-05", "clientInfo": { "name": "it", "version": "0.0.1" } } }),
        json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
        json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" }),
        json!({ "jsonrpc": "2.0", "id": 3, "method": "tools/call",
                "params": { "name": "list-connector",
                            "arguments": { "connector_names": ["prod gcp"], "connector_ids": ["gcp_prod"] } } }),
    ]
    .iter()
    .map(|m| format!("{m}\n"))
    .collect::<String>();

    let mut output = Vec::new();
    server_for(&mock)
        .serve(input.as_bytes(), &mut output)
        .await
        .unwrap();

    let responses: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "harness-mcp");
    assert_eq!(responses[1]["result"]["tools"][0]["name"], "list-connector");
    assert_eq!(responses[2]["id"], 3);

    let text = responses[2]["result"]["content"][0]["text"].as_str().unwrap();
    assert_eq!(serde_json::from_str::<Value>(text).unwrap(), page());
}
