use std::time::Duration;

use async_trait::async_trait;

use crate::prelude::*;

/// Retrieves the raw markup of a documentation page
///
/// Any non-success outcome, whether the host is unreachable or the server
/// answers with a non-2xx status, surfaces as [`Error::Fetch`]. Implementations
/// do not retry and do not look at the body.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> DocsResult<String>;
}

/// [`PageFetcher`] backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> DocsResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("juce-docs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Generic(f!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> DocsResult<String> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::fetch(url, FetchCause::Transport(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(url, FetchCause::Status(status.as_u16())));
        }

        response
            .text()
            .await
            .map_err(|e| Error::fetch(url, FetchCause::Transport(e.to_string())))
    }
}
