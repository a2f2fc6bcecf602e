use crate::prelude::{println, *};

use super::{DocsClient, PageFetcher};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run<F: PageFetcher>(options: ListOptions, client: &DocsClient<F>) -> Result<()> {
    let output = if options.json {
        let names = client.list_classes().await?;
        format_names_json(&names)?
    } else {
        client.class_list_markdown().await?
    };

    println!("{output}");

    Ok(())
}

/// Convert a list of class names to a JSON array string
pub(super) fn format_names_json(names: &[String]) -> Result<String> {
    serde_json::to_string_pretty(names).map_err(|e| eyre!("JSON serialization failed: {}", e))
}
