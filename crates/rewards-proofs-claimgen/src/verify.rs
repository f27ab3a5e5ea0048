use alloy_primitives::B256;
use rewards_proofs_merkle::process_inclusion_proof;

use crate::{
    claim::RewardsMerkleClaim,
    errors::{ClaimError, ClaimResult},
};

/// Check a claim against an account tree root the way the on-chain verifier does.
///
/// Every token leaf must hash up to `earner_leaf.earner_token_root` through its proof
/// and index, and the earner leaf must hash up to `root` through the earner proof.
pub fn verify_claim(claim: &RewardsMerkleClaim, root: &B256) -> ClaimResult<()> {
    if claim.token_indices.len() != claim.token_tree_proofs.len()
        || claim.token_indices.len() != claim.token_leaves.len()
    {
        return Err(ClaimError::InputLengthMismatch {
            token_indices: claim.token_indices.len(),
            token_tree_proofs: claim.token_tree_proofs.len(),
            token_leaves: claim.token_leaves.len(),
        });
    }

    let earner = claim.earner_leaf.earner;
    for ((index, proof), leaf) in claim
        .token_indices
        .iter()
        .zip(&claim.token_tree_proofs)
        .zip(&claim.token_leaves)
    {
        let computed = process_inclusion_proof(proof, &leaf.hash(), u64::from(*index))?;
        if computed != claim.earner_leaf.earner_token_root.0 {
            return Err(ClaimError::InvalidTokenClaimProof {
                earner,
                token: leaf.token,
            });
        }
    }

    let computed = process_inclusion_proof(
        &claim.earner_tree_proof,
        &claim.earner_leaf.hash(),
        u64::from(claim.earner_index),
    )?;
    if computed != root.0 {
        return Err(ClaimError::InvalidEarnerClaimProof { earner });
    }

    Ok(())
}
