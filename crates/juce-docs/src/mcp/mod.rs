mod cli;
mod prompts;
mod resources;
mod sse;
mod stdio;
mod tools;

pub use cli::App;

use crate::docs::{DocsClient, PageFetcher};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

// JSON-RPC 2.0 types
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<serde_json::Value>,
    method: String,
    params: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    jsonrpc: String,
    id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcError {
    pub fn invalid_params(message: String) -> Self {
        Self {
            code: -32602,
            message,
            data: None,
        }
    }

    pub fn internal(message: String) -> Self {
        Self {
            code: -32603,
            message,
            data: None,
        }
    }
}

/// Serialize a handler result into a JSON-RPC result value
pub fn to_result<T: Serialize>(value: T) -> Result<serde_json::Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

/// Deserialize handler arguments, reporting failures as invalid params
pub fn parse_params<T: serde::de::DeserializeOwned>(
    params: Option<serde_json::Value>,
) -> Result<T, JsonRpcError> {
    serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid arguments: {e}")))
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let docs = crate::docs::http_client(&global)?;

    match app.command {
        cli::Commands::Stdio => stdio::run_stdio(docs, global).await,
        cli::Commands::Sse(options) => sse::run_sse(options, docs, global).await,
    }
}

/// Handle one JSON-RPC message
///
/// Returns `None` for notifications, which never get a reply.
pub async fn handle_request<F: PageFetcher>(
    request_str: &str,
    docs: &DocsClient<F>,
) -> Option<JsonRpcResponse> {
    let request: JsonRpcRequest = match serde_json::from_str(request_str) {
        Ok(req) => req,
        Err(e) => {
            return Some(JsonRpcResponse {
                jsonrpc: "2.0".to_string(),
                id: None,
                result: None,
                error: Some(JsonRpcError {
                    code: -32700,
                    message: format!("Parse error: {e}"),
                    data: None,
                }),
            });
        }
    };

    if request.id.is_none() && request.method.starts_with("notifications/") {
        log::debug!("Notification {}", request.method);
        return None;
    }

    log::debug!("Handling {}", request.method);

    let result = match request.method.as_str() {
        "initialize" => tools::handle_initialize(),
        "ping" => Ok(serde_json::json!({})),
        "tools/list" => tools::handle_tools_list(),
        "tools/call" => tools::handle_tools_call(request.params, docs).await,
        "resources/list" => resources::handle_resources_list(),
        "resources/templates/list" => resources::handle_resource_templates_list(),
        "resources/read" => resources::handle_resources_read(request.params, docs).await,
        "prompts/list" => prompts::handle_prompts_list(),
        "prompts/get" => prompts::handle_prompts_get(request.params),
        method => Err(JsonRpcError {
            code: -32601,
            message: format!("Method not found: {method}"),
            data: None,
        }),
    };

    Some(match result {
        Ok(value) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: Some(value),
            error: None,
        },
        Err(error) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: None,
            error: Some(error),
        },
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::docs::fixtures::{self, FixtureFetcher};

    /// Send a request through the dispatcher and return the response as JSON
    pub(crate) async fn call(
        request: serde_json::Value,
        docs: &DocsClient<FixtureFetcher>,
    ) -> serde_json::Value {
        let response = handle_request(&request.to_string(), docs)
            .await
            .expect("requests with an id get a response");
        serde_json::to_value(response).unwrap()
    }

    #[tokio::test]
    async fn test_parse_error() {
        let docs = fixtures::client(fixtures::catalog_fetcher());
        let response = handle_request("{not json", &docs).await.unwrap();
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["error"]["code"], -32700);
        assert!(value["id"].is_null());
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let docs = fixtures::client(fixtures::catalog_fetcher());
        let value = call(
            serde_json::json!({"jsonrpc": "2.0", "id": 7, "method": "bogus/method"}),
            &docs,
        )
        .await;
        assert_eq!(value["id"], 7);
        assert_eq!(value["error"]["code"], -32601);
        assert!(value.get("result").is_none());
    }

    #[tokio::test]
    async fn test_notifications_get_no_reply() {
        let docs = fixtures::client(fixtures::catalog_fetcher());
        let request = serde_json::json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
        assert!(handle_request(&request.to_string(), &docs).await.is_none());
    }

    #[tokio::test]
    async fn test_ping() {
        let docs = fixtures::client(fixtures::catalog_fetcher());
        let value = call(
            serde_json::json!({"jsonrpc": "2.0", "id": "a", "method": "ping"}),
            &docs,
        )
        .await;
        assert_eq!(value["id"], "a");
        assert_eq!(value["result"], serde_json::json!({}));
    }
}
