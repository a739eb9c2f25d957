use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("already visited: {0}")]
    AlreadyVisited(String),

    #[error("missing URL")]
    MissingUrl,

    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("JSON encoding failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CrawlError {
    /// Errors the link follower swallows instead of aborting the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CrawlError::AlreadyVisited(_) | CrawlError::MissingUrl)
    }
}

pub type Result<T> = std::result::Result<T, CrawlError>;
