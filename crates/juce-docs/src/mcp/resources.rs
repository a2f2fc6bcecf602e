use juce_docs_core::catalog::{class_name_from_uri, CLASS_LIST_URI, CLASS_URI_TEMPLATE};
use serde::{Deserialize, Serialize};

use super::{parse_params, to_result, JsonRpcError};
use crate::docs::{DocsClient, PageFetcher};

const MARKDOWN: &str = "text/markdown";

#[derive(Debug, Serialize)]
pub struct Resource {
    pub uri: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

#[derive(Debug, Serialize)]
pub struct ResourceTemplate {
    #[serde(rename = "uriTemplate")]
    pub uri_template: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

#[derive(Debug, Serialize)]
pub struct ResourceContents {
    pub uri: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
struct ResourcesList {
    resources: Vec<Resource>,
}

#[derive(Debug, Serialize)]
struct ResourceTemplatesList {
    #[serde(rename = "resourceTemplates")]
    resource_templates: Vec<ResourceTemplate>,
}

#[derive(Debug, Serialize)]
struct ReadResourceResult {
    contents: Vec<ResourceContents>,
}

pub fn handle_resources_list() -> Result<serde_json::Value, JsonRpcError> {
    to_result(ResourcesList {
        resources: vec![Resource {
            uri: CLASS_LIST_URI.to_string(),
            name: "class-list".to_string(),
            description: "Every class in the JUCE class index, as a Markdown list".to_string(),
            mime_type: MARKDOWN.to_string(),
        }],
    })
}

pub fn handle_resource_templates_list() -> Result<serde_json::Value, JsonRpcError> {
    to_result(ResourceTemplatesList {
        resource_templates: vec![ResourceTemplate {
            uri_template: CLASS_URI_TEMPLATE.to_string(),
            name: "class-docs".to_string(),
            description: "Reference documentation for one JUCE class".to_string(),
            mime_type: MARKDOWN.to_string(),
        }],
    })
}

pub async fn handle_resources_read<F: PageFetcher>(
    params: Option<serde_json::Value>,
    docs: &DocsClient<F>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct ReadResourceArgs {
        uri: String,
    }

    let args: ReadResourceArgs = parse_params(params)?;

    let text = if args.uri == CLASS_LIST_URI {
        log::info!("Fetching list of all JUCE classes");
        docs.class_list_markdown()
            .await
            .map_err(|e| JsonRpcError::internal(format!("Resource read error: {e}")))?
    } else if let Some(class_name) = class_name_from_uri(&args.uri) {
        log::info!("Fetching documentation for class: {class_name}");
        docs.class_document_markdown(class_name).await
    } else {
        return Err(JsonRpcError::invalid_params(format!(
            "Unknown resource: {}",
            args.uri
        )));
    };

    to_result(ReadResourceResult {
        contents: vec![ResourceContents {
            uri: args.uri,
            mime_type: MARKDOWN.to_string(),
            text,
        }],
    })
}

#[cfg(test)]
mod tests {
    use crate::docs::fixtures::{self, FixtureFetcher};
    use crate::mcp::tests::call;

    fn read(uri: &str) -> serde_json::Value {
        serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "resources/read",
            "params": {"uri": uri}
        })
    }

    #[tokio::test]
    async fn test_resources_list() {
        let docs = fixtures::client(fixtures::catalog_fetcher());
        let value = call(
            serde_json::json!({"jsonrpc": "2.0", "id": 1, "method": "resources/list"}),
            &docs,
        )
        .await;

        assert_eq!(value["result"]["resources"][0]["uri"], "juce://classes");
        assert_eq!(value["result"]["resources"][0]["mimeType"], "text/markdown");
    }

    #[tokio::test]
    async fn test_resource_templates_list() {
        let docs = fixtures::client(fixtures::catalog_fetcher());
        let value = call(
            serde_json::json!({"jsonrpc": "2.0", "id": 1, "method": "resources/templates/list"}),
            &docs,
        )
        .await;

        assert_eq!(
            value["result"]["resourceTemplates"][0]["uriTemplate"],
            "juce://class/{className}"
        );
    }

    #[tokio::test]
    async fn test_read_class_list() {
        let docs = fixtures::client(fixtures::catalog_fetcher());
        let value = call(read("juce://classes"), &docs).await;

        let contents = &value["result"]["contents"][0];
        assert_eq!(contents["uri"], "juce://classes");
        assert_eq!(
            contents["text"],
            "# JUCE Classes\n\n- [AudioBuffer](juce://class/AudioBuffer)\n- [MidiBuffer](juce://class/MidiBuffer)\n- [ValueTree](juce://class/ValueTree)"
        );
    }

    #[tokio::test]
    async fn test_read_class_list_index_unreachable() {
        let docs = fixtures::client(FixtureFetcher::offline());
        let value = call(read("juce://classes"), &docs).await;

        assert_eq!(value["error"]["code"], -32603);
    }

    #[tokio::test]
    async fn test_read_class_document() {
        let docs = fixtures::client(fixtures::catalog_fetcher());
        let value = call(read("juce://class/ValueTree"), &docs).await;

        let text = value["result"]["contents"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("# ValueTree"));
        assert!(text.contains("[View Online Documentation](https://docs.example.com/juce/classValueTree.html)"));
    }

    #[tokio::test]
    async fn test_read_missing_class_document() {
        let docs = fixtures::client(fixtures::catalog_fetcher());
        let value = call(read("juce://class/NoSuchClass123"), &docs).await;

        assert_eq!(
            value["result"]["contents"][0]["text"],
            "Documentation for class 'NoSuchClass123' not found."
        );
    }

    #[tokio::test]
    async fn test_read_unknown_resource() {
        let docs = fixtures::client(fixtures::catalog_fetcher());
        let value = call(read("https://example.com"), &docs).await;

        assert_eq!(value["error"]["code"], -32602);
    }
}
