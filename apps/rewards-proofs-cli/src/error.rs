use rewards_proofs_claimgen::ClaimError;
use rewards_proofs_fetcher::FetchError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("--root-index is required when claiming from a local file")]
    MissingRootIndex,

    #[error("Root {root} has not been posted on chain; pass --root-index to override")]
    RootNotPosted { root: String },

    #[error("Computed root {computed} does not match expected root {expected}")]
    RootMismatch { computed: String, expected: String },

    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
