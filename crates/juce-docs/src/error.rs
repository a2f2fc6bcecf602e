use juce_docs_core::rules::RuleError;

pub type DocsResult<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to fetch {url}: {cause}")]
    Fetch { url: String, cause: FetchCause },

    #[error("Invalid extraction rules: {0}")]
    Rules(#[from] RuleError),

    #[error("Generic {0}")]
    Generic(String),
}

/// Why a page could not be retrieved
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchCause {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(String),
}

impl Error {
    pub fn fetch(url: &str, cause: FetchCause) -> Self {
        Self::Fetch {
            url: url.to_string(),
            cause,
        }
    }
}
