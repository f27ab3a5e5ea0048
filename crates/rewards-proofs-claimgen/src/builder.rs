use alloy_primitives::{Address, B256};
use rewards_proofs_distribution::{Distribution, MerklizedDistribution};
use rewards_proofs_merkle::flatten_hashes;
use tracing::debug;

use crate::{
    claim::{EarnerTreeMerkleLeaf, RewardsMerkleClaim, TokenTreeMerkleLeaf},
    errors::{ClaimError, ClaimResult},
};

/// Build the claim for `earner` and `tokens` from an already merklized distribution.
///
/// `trees` must come from the latest `merklize` of `distribution`. Fails on the first
/// missing earner or token; nothing is returned for tokens processed before that.
pub fn get_proof_for_earner(
    distribution: &Distribution,
    trees: &MerklizedDistribution,
    root_index: u32,
    earner: &Address,
    tokens: &[Address],
) -> ClaimResult<RewardsMerkleClaim> {
    let earner_index = distribution
        .get_account_index(earner)
        .ok_or(ClaimError::EarnerIndexNotFound { earner: *earner })?;
    let earner_index = to_u32(earner_index)?;

    let token_tree = trees
        .token_tree(earner)
        .ok_or(ClaimError::TokenTreeNotFound { earner: *earner })?;

    let mut token_indices = Vec::with_capacity(tokens.len());
    let mut token_tree_proofs = Vec::with_capacity(tokens.len());
    let mut token_leaves = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token_index = distribution
            .get_token_index(earner, token)
            .ok_or(ClaimError::TokenIndexNotFound {
                earner: *earner,
                token: *token,
            })?;
        let token_index = to_u32(token_index)?;

        let token_proof = token_tree.proof(token_index as usize)?;

        let cumulative_earnings =
            distribution
                .get(earner, token)
                .ok_or(ClaimError::AmountNotFound {
                    earner: *earner,
                    token: *token,
                })?;

        token_indices.push(token_index);
        token_tree_proofs.push(flatten_hashes(&token_proof));
        token_leaves.push(TokenTreeMerkleLeaf {
            token: *token,
            cumulative_earnings,
        });
    }

    let earner_tree_proof = flatten_hashes(&trees.account_tree.proof(earner_index as usize)?);

    debug!(
        %earner,
        earner_index,
        tokens = token_leaves.len(),
        root_index,
        "Built rewards claim"
    );

    Ok(RewardsMerkleClaim {
        root_index,
        earner_index,
        earner_tree_proof,
        earner_leaf: EarnerTreeMerkleLeaf {
            earner: *earner,
            earner_token_root: B256::from(token_tree.root()),
        },
        token_indices,
        token_tree_proofs,
        token_leaves,
    })
}

fn to_u32(index: u64) -> ClaimResult<u32> {
    u32::try_from(index).map_err(|_| ClaimError::IndexOverflow { index })
}

/// Claim generation session over a single distribution
#[derive(Debug, Clone)]
pub struct Claimgen {
    distribution: Distribution,
}

impl Claimgen {
    pub fn new(distribution: Distribution) -> Self {
        Self { distribution }
    }

    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    pub fn into_distribution(self) -> Distribution {
        self.distribution
    }

    /// Merklize the distribution, then build the claim for `earner` and `tokens`.
    ///
    /// Returns the freshly derived trees alongside the claim so the caller can compare
    /// the account root against the root published at `root_index`.
    pub fn generate_claim_proof_for_earner(
        &mut self,
        earner: &Address,
        tokens: &[Address],
        root_index: u32,
    ) -> ClaimResult<(MerklizedDistribution, RewardsMerkleClaim)> {
        let trees = self.distribution.merklize()?;
        let claim = get_proof_for_earner(&self.distribution, &trees, root_index, earner, tokens)?;
        Ok((trees, claim))
    }
}
