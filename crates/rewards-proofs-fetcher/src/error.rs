use rewards_proofs_distribution::DistributionError;
use thiserror::Error;

pub type FetchResult<T> = Result<T, FetchError>;

/// Errors that can occur while fetching proof data
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Received error code '{status}' from {url}")]
    Status { url: String, status: u16 },

    #[error("Request to {url} failed after {retries} retries: {last_error}")]
    RetriesExhausted {
        url: String,
        retries: usize,
        last_error: String,
    },

    #[error("Failed to parse {what}: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("No snapshots found")]
    NoSnapshots,

    #[error(transparent)]
    Distribution(#[from] DistributionError),
}

impl FetchError {
    /// Whether another attempt at the same request could succeed
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Http(e) => !e.is_builder(),
            FetchError::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}
