/*!
# Rewards Proofs Fetcher

Reads the rewards data published per environment and network:

- `recent-snapshots.json`: snapshot dates, newest first
- `<date>/claim-amounts.json`: NDJSON earner lines, turned into a merklized [`RewardProofData`]
- `submitted-payments.json`: roots already posted on chain

```rust,no_run
use rewards_proofs_fetcher::{FetcherConfig, ProofDataFetcher};

# async fn example() -> rewards_proofs_fetcher::FetchResult<()> {
let fetcher = ProofDataFetcher::new(FetcherConfig::default())?;

let snapshot = fetcher.fetch_latest_snapshot().await?;
let data = fetcher
    .fetch_claim_amounts_for_date(&snapshot.date_string())
    .await?;

let posted = fetcher.fetch_posted_rewards().await?;
println!("root {} posted at {:?}", data.root, data.find_root_index(&posted));
# Ok(())
# }
```

Transient failures (connection errors, 5xx, 429) are retried with exponential backoff;
parse failures are not.
*/

mod config;
mod error;
mod fetcher;
mod transport;
mod types;

pub use config::{FetcherConfig, DEFAULT_BASE_URL, DEFAULT_ENVIRONMENT, DEFAULT_NETWORK};
pub use error::{FetchError, FetchResult};
pub use fetcher::{process_claim_amounts_from_raw_body, ProofDataFetcher};
pub use transport::{HttpTransport, Transport};
pub use types::{RewardProofData, Snapshot, SubmittedRewardRoot};

pub use url::Url;
