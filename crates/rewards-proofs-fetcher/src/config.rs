use backoff::ExponentialBackoff;
use std::time::Duration;
use url::Url;

use crate::error::{FetchError, FetchResult};

pub const DEFAULT_BASE_URL: &str = "https://eigenpayments-dev.s3.us-east-2.amazonaws.com";
pub const DEFAULT_ENVIRONMENT: &str = "preprod";
pub const DEFAULT_NETWORK: &str = "holesky";

/// Where proof data is published and how hard to try fetching it
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Bucket or CDN root, without a trailing slash
    pub base_url: String,

    /// Deployment environment, e.g. `preprod` or `mainnet`
    pub environment: String,

    /// Chain name, e.g. `holesky`
    pub network: String,

    /// Timeout for a single request
    pub request_timeout: Duration,

    /// Maximum number of retries after the first attempt
    pub max_retries: usize,

    /// Backoff strategy for retry delays
    pub retry_backoff: ExponentialBackoff,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            network: DEFAULT_NETWORK.to_string(),
            request_timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_backoff: ExponentialBackoff {
                initial_interval: Duration::from_millis(500),
                max_interval: Duration::from_secs(10),
                max_elapsed_time: Some(Duration::from_secs(120)),
                multiplier: 2.0,
                ..Default::default()
            },
        }
    }
}

impl FetcherConfig {
    pub fn validate(&self) -> FetchResult<()> {
        let base = Url::parse(&self.base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(FetchError::Config(format!(
                "base URL must be http or https, got '{}'",
                self.base_url
            )));
        }
        for (name, value) in [("environment", &self.environment), ("network", &self.network)] {
            if value.is_empty() || value.contains('/') {
                return Err(FetchError::Config(format!("invalid {}: '{}'", name, value)));
            }
        }
        Ok(())
    }

    // <base>/<env>/<network>
    fn prefix(&self) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.environment,
            self.network
        )
    }

    /// `<base>/<env>/<network>/recent-snapshots.json`
    pub fn recent_snapshots_url(&self) -> FetchResult<Url> {
        Ok(Url::parse(&format!("{}/recent-snapshots.json", self.prefix()))?)
    }

    /// `<base>/<env>/<network>/<date>/claim-amounts.json`
    pub fn claim_amounts_url(&self, snapshot_date: &str) -> FetchResult<Url> {
        Ok(Url::parse(&format!(
            "{}/{}/claim-amounts.json",
            self.prefix(),
            snapshot_date
        ))?)
    }

    /// `<base>/<env>/<network>/submitted-payments.json`
    pub fn posted_rewards_url(&self) -> FetchResult<Url> {
        Ok(Url::parse(&format!("{}/submitted-payments.json", self.prefix()))?)
    }
}
