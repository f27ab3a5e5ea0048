use rewards_proofs_fetcher::ProofDataFetcher;

use crate::error::CliResult;

pub async fn execute(fetcher: &ProofDataFetcher, limit: usize) -> CliResult<()> {
    let snapshots = fetcher.fetch_recent_snapshot_list().await?;
    if snapshots.is_empty() {
        println!("No snapshots found");
        return Ok(());
    }
    for snapshot in snapshots.iter().take(limit) {
        println!("{}", snapshot.date_string());
    }
    Ok(())
}
