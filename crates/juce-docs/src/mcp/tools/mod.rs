mod classes;

use serde::{Deserialize, Serialize};

use crate::docs::{DocsClient, PageFetcher};

// Re-export types needed by tool handlers
pub use super::{parse_params, to_result, JsonRpcError};

#[derive(Debug, Serialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<EmptyCapability>,
    pub resources: Option<EmptyCapability>,
    pub prompts: Option<EmptyCapability>,
}

#[derive(Debug, Serialize)]
pub struct EmptyCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl CallToolResult {
    pub fn text(text: String) -> Self {
        Self {
            content: vec![Content::Text { text }],
            is_error: None,
        }
    }

    pub fn error(text: String) -> Self {
        Self {
            content: vec![Content::Text { text }],
            is_error: Some(true),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    to_result(InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(EmptyCapability {}),
            resources: Some(EmptyCapability {}),
            prompts: Some(EmptyCapability {}),
        },
        server_info: ServerInfo {
            name: "JUCE Documentation Server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    })
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = vec![
        Tool {
            name: "search-classes".to_string(),
            description: "Search JUCE class names by case-insensitive substring. Returns a Markdown list of matching classes, each linked to its juce://class/{className} resource, in the order of the JUCE class index.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Substring to look for in class names (e.g., 'Buffer'). An empty string lists every class."
                    }
                },
                "required": ["query"]
            }),
        },
        Tool {
            name: "get-class-docs".to_string(),
            description: "Get the reference documentation of one JUCE class as Markdown: description, inheritance, methods with their signatures, and properties. Class names are case-sensitive.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "className": {
                        "type": "string",
                        "description": "Exact JUCE class name (e.g., 'ValueTree', 'AudioBuffer')"
                    }
                },
                "required": ["className"]
            }),
        },
    ];

    to_result(ToolsList { tools })
}

pub async fn handle_tools_call<F: PageFetcher>(
    params: Option<serde_json::Value>,
    docs: &DocsClient<F>,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {e}")))?;

    match params.name.as_str() {
        "search-classes" => classes::handle_search_classes(params.arguments, docs).await,
        "get-class-docs" => classes::handle_get_class_docs(params.arguments, docs).await,
        _ => Err(JsonRpcError::invalid_params(format!(
            "Unknown tool: {}",
            params.name
        ))),
    }
}
