use crate::prelude::{eprintln, println, *};
use juce_docs_core::catalog::ClassDocument;
use juce_docs_core::render::{not_found_message, render_class_document};

use super::{DocsClient, PageFetcher};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct GetOptions {
    /// Class name, e.g. ValueTree
    #[arg(value_name = "CLASS")]
    pub class_name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run<F: PageFetcher>(options: GetOptions, client: &DocsClient<F>) -> Result<()> {
    let Some(doc) = client.get_class_document(&options.class_name).await else {
        eprintln!("{}", not_found_message(&options.class_name));
        return Ok(());
    };

    let output = if options.json {
        format_document_json(&doc)?
    } else {
        render_class_document(&doc)
    };

    println!("{output}");

    Ok(())
}

/// Convert a class document to a JSON string
fn format_document_json(doc: &ClassDocument) -> Result<String> {
    serde_json::to_string_pretty(doc).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::*;

    #[tokio::test]
    async fn test_format_document_json() {
        let client = fixtures::client(fixtures::catalog_fetcher());
        let doc = client.get_class_document("ValueTree").await.unwrap();

        let json = format_document_json(&doc).unwrap();
        assert!(json.contains("\"class_name\": \"ValueTree\""));
        assert!(json.contains("\"signature\": \"int getValue() const\""));
        assert!(json.contains("\"inheritance\": \"ValueTree\""));
    }

    #[tokio::test]
    async fn test_run_missing_class_is_not_an_error() {
        let client = fixtures::client(fixtures::catalog_fetcher());
        let options = GetOptions {
            class_name: "NoSuchClass123".to_string(),
            json: false,
        };
        assert!(run(options, &client).await.is_ok());
    }
}
