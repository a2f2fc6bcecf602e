use crate::prelude::{println, *};

use super::list::format_names_json;
use super::{DocsClient, PageFetcher};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SearchOptions {
    /// Case-insensitive substring to look for in class names
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run<F: PageFetcher>(options: SearchOptions, client: &DocsClient<F>) -> Result<()> {
    let output = if options.json {
        let results = client.search_classes(&options.query).await?;
        format_names_json(&results)?
    } else {
        client.search_markdown(&options.query).await?
    };

    println!("{output}");

    Ok(())
}
