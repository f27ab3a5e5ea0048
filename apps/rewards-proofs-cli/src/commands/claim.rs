use alloy_primitives::{Address, B256};
use rewards_proofs_claimgen::{
    format_proof_for_solidity, get_proof_for_earner, verify_claim, RewardsMerkleClaimStrings,
};
use rewards_proofs_fetcher::{ProofDataFetcher, RewardProofData};
use tracing::info;

use super::source::Source;
use crate::error::{CliError, CliResult};

pub async fn execute(
    fetcher: &ProofDataFetcher,
    source: Source,
    earner: Address,
    tokens: Vec<Address>,
    root_index: Option<u32>,
    expected_root: Option<B256>,
) -> CliResult<()> {
    let data = source.load(fetcher).await?;
    check_root(&data, expected_root)?;

    let root_index = resolve_root_index(fetcher, &source, &data, root_index).await?;

    let claim = build_claim(&data, earner, &tokens, root_index)?;
    println!("{}", serde_json::to_string_pretty(&claim)?);
    Ok(())
}

/// An explicit index wins; remote data is looked up among the posted roots, and a
/// local file has nothing to look it up in.
pub async fn resolve_root_index(
    fetcher: &ProofDataFetcher,
    source: &Source,
    data: &RewardProofData,
    root_index: Option<u32>,
) -> CliResult<u32> {
    match root_index {
        Some(index) => Ok(index),
        None if source.is_remote() => {
            let posted = fetcher.fetch_posted_rewards().await?;
            data.find_root_index(&posted)
                .ok_or_else(|| CliError::RootNotPosted {
                    root: data.root.to_string(),
                })
        }
        None => Err(CliError::MissingRootIndex),
    }
}

/// Build, self-check and format the claim for `earner`
pub fn build_claim(
    data: &RewardProofData,
    earner: Address,
    tokens: &[Address],
    root_index: u32,
) -> CliResult<RewardsMerkleClaimStrings> {
    let claim = get_proof_for_earner(&data.distribution, &data.trees, root_index, &earner, tokens)?;
    verify_claim(&claim, &data.root)?;
    info!(%earner, tokens = tokens.len(), root_index, "Generated claim");
    Ok(format_proof_for_solidity(&data.root, &claim))
}

pub fn check_root(data: &RewardProofData, expected_root: Option<B256>) -> CliResult<()> {
    match expected_root {
        Some(expected) if expected != data.root => Err(CliError::RootMismatch {
            computed: data.root.to_string(),
            expected: expected.to_string(),
        }),
        _ => Ok(()),
    }
}
