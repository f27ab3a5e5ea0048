use backoff::{backoff::Backoff, future::retry};
use rewards_proofs_distribution::{parse_earner_lines, Distribution};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use crate::{
    config::FetcherConfig,
    error::{FetchError, FetchResult},
    transport::{HttpTransport, Transport},
    types::{RewardProofData, Snapshot, SubmittedRewardRoot},
};

/// Client for the published rewards data of one environment and network
pub struct ProofDataFetcher<T: Transport = HttpTransport> {
    transport: T,
    config: FetcherConfig,
}

impl ProofDataFetcher<HttpTransport> {
    /// Create a fetcher over HTTP
    pub fn new(config: FetcherConfig) -> FetchResult<Self> {
        let transport = HttpTransport::new(config.request_timeout)?;
        Self::with_transport(transport, config)
    }
}

impl<T: Transport> ProofDataFetcher<T> {
    /// Create a fetcher over a custom transport
    pub fn with_transport(transport: T, config: FetcherConfig) -> FetchResult<Self> {
        config.validate()?;
        Ok(Self { transport, config })
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Snapshots with published claim amounts, newest first
    pub async fn fetch_recent_snapshot_list(&self) -> FetchResult<Vec<Snapshot>> {
        let url = self.config.recent_snapshots_url()?;
        let snapshots: Vec<Snapshot> = self.fetch_json(&url, "snapshots").await?;
        info!(count = snapshots.len(), "Fetched recent snapshots");
        Ok(snapshots)
    }

    pub async fn fetch_latest_snapshot(&self) -> FetchResult<Snapshot> {
        self.fetch_recent_snapshot_list()
            .await?
            .into_iter()
            .next()
            .ok_or(FetchError::NoSnapshots)
    }

    /// Fetch and merklize the claim amounts published for `snapshot_date` (`YYYY-MM-DD`)
    pub async fn fetch_claim_amounts_for_date(
        &self,
        snapshot_date: &str,
    ) -> FetchResult<RewardProofData> {
        let url = self.config.claim_amounts_url(snapshot_date)?;
        let body = self.fetch_with_retry(&url).await?;
        let data = process_claim_amounts_from_raw_body(&body)?;
        info!(
            snapshot_date,
            earners = data.distribution.num_earners(),
            root = %data.root,
            "Fetched claim amounts"
        );
        Ok(data)
    }

    /// Roots already submitted on chain
    pub async fn fetch_posted_rewards(&self) -> FetchResult<Vec<SubmittedRewardRoot>> {
        let url = self.config.posted_rewards_url()?;
        let posted: Vec<SubmittedRewardRoot> = self.fetch_json(&url, "posted rewards").await?;
        info!(count = posted.len(), "Fetched posted rewards");
        Ok(posted)
    }

    async fn fetch_json<D: DeserializeOwned>(&self, url: &Url, what: &'static str) -> FetchResult<D> {
        let body = self.fetch_with_retry(url).await?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Json { what, source })
    }

    async fn fetch_with_retry(&self, url: &Url) -> FetchResult<Vec<u8>> {
        let transport = &self.transport;
        let max_retries = self.config.max_retries;
        let mut attempt = 0usize;
        let mut backoff = self.config.retry_backoff.clone();
        backoff.reset();

        retry(backoff, || {
            attempt += 1;
            let attempt = attempt;

            async move {
                match transport.fetch(url).await {
                    Ok(body) => {
                        debug!(%url, attempt, bytes = body.len(), "Request succeeded");
                        Ok(body)
                    }
                    Err(e) if e.is_transient() && attempt <= max_retries => {
                        warn!(%url, attempt, "Request attempt failed: {}", e);
                        Err(backoff::Error::transient(e))
                    }
                    Err(e) if e.is_transient() => {
                        Err(backoff::Error::permanent(FetchError::RetriesExhausted {
                            url: url.to_string(),
                            retries: max_retries,
                            last_error: e.to_string(),
                        }))
                    }
                    Err(e) => Err(backoff::Error::permanent(e)),
                }
            }
        })
        .await
    }
}

/// Parse an NDJSON body of earner lines into merklized proof data
pub fn process_claim_amounts_from_raw_body(body: &[u8]) -> FetchResult<RewardProofData> {
    let lines = parse_earner_lines(body)?;

    let mut distribution = Distribution::new();
    distribution.load_lines(&lines)?;

    let trees = distribution.merklize()?;
    let root = trees.root();
    debug!(lines = lines.len(), %root, "Processed claim amounts");

    Ok(RewardProofData {
        distribution,
        trees,
        root,
    })
}
