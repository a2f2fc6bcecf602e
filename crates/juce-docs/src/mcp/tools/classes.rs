use serde::Deserialize;

use super::{parse_params, to_result, CallToolResult, JsonRpcError};
use crate::docs::{DocsClient, PageFetcher};

pub async fn handle_search_classes<F: PageFetcher>(
    arguments: Option<serde_json::Value>,
    docs: &DocsClient<F>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct SearchClassesArgs {
        query: String,
    }

    let args: SearchClassesArgs = parse_params(arguments)?;

    log::info!("Searching for classes matching: {}", args.query);

    let result = match docs.search_markdown(&args.query).await {
        Ok(markdown) => CallToolResult::text(markdown),
        Err(e) => CallToolResult::error(format!("Tool execution error: {e}")),
    };

    to_result(result)
}

pub async fn handle_get_class_docs<F: PageFetcher>(
    arguments: Option<serde_json::Value>,
    docs: &DocsClient<F>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct GetClassDocsArgs {
        #[serde(rename = "className")]
        class_name: String,
    }

    let args: GetClassDocsArgs = parse_params(arguments)?;

    if args.class_name.trim().is_empty() {
        return Err(JsonRpcError::invalid_params(
            "className must not be empty".to_string(),
        ));
    }

    log::info!("Fetching documentation for class: {}", args.class_name);

    let markdown = docs.class_document_markdown(&args.class_name).await;

    to_result(CallToolResult::text(markdown))
}
