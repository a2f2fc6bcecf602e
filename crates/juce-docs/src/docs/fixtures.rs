//! In-memory pages for exercising the pipeline without a network

use std::collections::HashMap;

use async_trait::async_trait;
use juce_docs_core::catalog::DocsSite;
use juce_docs_core::rules::ExtractionRules;

use super::fetcher::PageFetcher;
use super::DocsClient;
use crate::prelude::*;

pub const BASE_URL: &str = "https://docs.example.com/juce";

pub const INDEX_HTML: &str = r#"
<html><body>
<div class="directory"><table class="directory">
<tr class="even"><td class="entry"><a class="el" href="classAudioBuffer.html">AudioBuffer</a></td></tr>
<tr class="odd"><td class="entry"><a class="el" href="structADSR_1_1Parameters.html">Parameters</a></td></tr>
<tr class="even"><td class="entry"><a class="el" href="classMidiBuffer.html">MidiBuffer</a></td></tr>
<tr class="odd"><td class="entry"><a class="el" href="classValueTree.html">ValueTree</a></td></tr>
</table></div>
</body></html>
"#;

pub const EMPTY_INDEX_HTML: &str = "<html><body><p>Moved.</p></body></html>";

pub const VALUE_TREE_HTML: &str = r#"
<html><body><div class="contents">
<div class="textblock"><p>A powerful tree structure.</p></div>
<div class="inheritance">ValueTree</div>
<div class="memitem">
<div class="memproto"><table class="memname"><tr>
<td class="memname">int getValue</td><td>(</td><td>)</td><td> const</td>
</tr></table></div>
<div class="memdoc"><p>Returns value.</p></div>
</div>
</div></body></html>
"#;

pub const BARE_HTML: &str = "<html><body><div class=\"contents\"></div></body></html>";

/// Serves pages from a map; unknown URLs answer 404
pub struct FixtureFetcher {
    pages: HashMap<String, String>,
    offline: bool,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            offline: false,
        }
    }

    /// Every request fails at the transport level
    pub fn offline() -> Self {
        Self {
            pages: HashMap::new(),
            offline: true,
        }
    }

    pub fn with_page(mut self, path: &str, html: &str) -> Self {
        self.pages
            .insert(f!("{BASE_URL}/{path}"), html.to_string());
        self
    }
}

#[async_trait]
impl PageFetcher for FixtureFetcher {
    async fn fetch_text(&self, url: &str) -> DocsResult<String> {
        if self.offline {
            return Err(Error::fetch(
                url,
                FetchCause::Transport("connection refused".to_string()),
            ));
        }

        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| Error::fetch(url, FetchCause::Status(404)))
    }
}

/// Catalog with three classes, each with a page
pub fn catalog_fetcher() -> FixtureFetcher {
    FixtureFetcher::new()
        .with_page("annotated.html", INDEX_HTML)
        .with_page("classAudioBuffer.html", BARE_HTML)
        .with_page("classMidiBuffer.html", BARE_HTML)
        .with_page("classValueTree.html", VALUE_TREE_HTML)
}

pub fn client(fetcher: FixtureFetcher) -> DocsClient<FixtureFetcher> {
    DocsClient::new(
        fetcher,
        DocsSite::new(BASE_URL),
        ExtractionRules::doxygen().unwrap(),
    )
}
