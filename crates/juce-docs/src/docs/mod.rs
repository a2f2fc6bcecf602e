pub mod fetcher;
mod get;
mod list;
mod search;

#[cfg(test)]
pub mod fixtures;

use std::time::Duration;

use crate::prelude::{eprintln, *};
use colored::Colorize;
use juce_docs_core::catalog::{ClassDocument, DocsSite};
use juce_docs_core::class_page::extract_class_document;
use juce_docs_core::index::extract_class_names;
use juce_docs_core::render::{
    no_results_message, not_found_message, render_class_document, render_class_links,
    search_heading, CLASS_LIST_HEADING,
};
use juce_docs_core::rules::ExtractionRules;
use juce_docs_core::search::filter_class_names;

pub use fetcher::{HttpFetcher, PageFetcher};

#[derive(Debug, clap::Parser)]
#[command(name = "docs")]
#[command(about = "JUCE class reference lookups")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List every documented class
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Show the documentation of one class
    #[clap(name = "get")]
    Get(get::GetOptions),

    /// Search class names by substring
    #[clap(name = "search")]
    Search(search::SearchOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("{} {}", "JUCE docs base URL:".green(), global.base_url);
        eprintln!();
    }

    let client = http_client(&global)?;

    match app.command {
        Commands::List(options) => list::run(options, &client).await,
        Commands::Get(options) => get::run(options, &client).await,
        Commands::Search(options) => search::run(options, &client).await,
    }
}

/// Build a client for the configured documentation site
pub fn http_client(global: &crate::Global) -> Result<DocsClient<HttpFetcher>> {
    let fetcher = HttpFetcher::new(Duration::from_secs(global.timeout))?;
    let rules = ExtractionRules::doxygen().map_err(Error::from)?;

    Ok(DocsClient::new(
        fetcher,
        DocsSite::new(&global.base_url),
        rules,
    ))
}

/// Retrieval and extraction pipeline for one documentation site
///
/// Holds no per-request state: every call fetches the pages it needs and
/// builds its result from scratch.
pub struct DocsClient<F> {
    fetcher: F,
    site: DocsSite,
    rules: ExtractionRules,
}

impl<F: PageFetcher> DocsClient<F> {
    pub fn new(fetcher: F, site: DocsSite, rules: ExtractionRules) -> Self {
        Self {
            fetcher,
            site,
            rules,
        }
    }

    pub fn site(&self) -> &DocsSite {
        &self.site
    }

    /// Class names from the index page, in page order
    pub async fn list_classes(&self) -> DocsResult<Vec<String>> {
        let url = self.site.index_url();
        let html = self.fetcher.fetch_text(&url).await?;
        let names = extract_class_names(&html, &self.rules);

        if names.is_empty() {
            log::warn!("No class entries found on {url}; the index layout may have changed");
        } else {
            log::debug!("Found {} classes on {url}", names.len());
        }

        Ok(names)
    }

    /// Documentation for one class, or `None` when its page cannot be fetched
    pub async fn get_class_document(&self, class_name: &str) -> Option<ClassDocument> {
        let url = self.site.class_url(class_name);

        match self.fetcher.fetch_text(&url).await {
            Ok(html) => Some(extract_class_document(
                class_name,
                &url,
                &html,
                &self.rules,
            )),
            Err(Error::Fetch {
                cause: FetchCause::Status(status),
                ..
            }) => {
                log::info!("No documentation page for '{class_name}' (HTTP {status} from {url})");
                None
            }
            Err(err) => {
                log::warn!("Could not retrieve documentation for '{class_name}': {err}");
                None
            }
        }
    }

    /// Class names containing `query`, ignoring case
    pub async fn search_classes(&self, query: &str) -> DocsResult<Vec<String>> {
        let names = self.list_classes().await?;
        Ok(filter_class_names(&names, query))
    }

    /// Markdown list of every class
    pub async fn class_list_markdown(&self) -> DocsResult<String> {
        let names = self.list_classes().await?;
        Ok(render_class_links(CLASS_LIST_HEADING, &names))
    }

    /// Markdown documentation for one class, or the not-found message
    pub async fn class_document_markdown(&self, class_name: &str) -> String {
        match self.get_class_document(class_name).await {
            Some(doc) => render_class_document(&doc),
            None => not_found_message(class_name),
        }
    }

    /// Markdown search results, or the no-results message
    pub async fn search_markdown(&self, query: &str) -> DocsResult<String> {
        let results = self.search_classes(query).await?;

        if results.is_empty() {
            return Ok(no_results_message(query));
        }

        Ok(render_class_links(&search_heading(query), &results))
    }
}
