use rewards_proofs_fetcher::ProofDataFetcher;

use super::source::Source;
use crate::error::CliResult;

pub async fn execute(fetcher: &ProofDataFetcher, source: Source) -> CliResult<()> {
    let data = source.load(fetcher).await?;

    println!("Root: {}", data.root);
    println!("Earners: {}", data.distribution.num_earners());

    if source.is_remote() {
        let posted = fetcher.fetch_posted_rewards().await?;
        match data.find_root_index(&posted) {
            Some(index) => println!("Posted at root index {}", index),
            None => println!("Not posted on chain"),
        }
    }
    Ok(())
}
