use alloy_primitives::Address;
use rewards_proofs_distribution::DistributionError;
use rewards_proofs_merkle::MerkleError;
use thiserror::Error;

pub type ClaimResult<T> = Result<T, ClaimError>;

#[derive(Error, Debug)]
pub enum ClaimError {
    #[error("Earner index not found for earner {earner}")]
    EarnerIndexNotFound { earner: Address },

    #[error("Token index not found for token {token} and earner {earner}")]
    TokenIndexNotFound { earner: Address, token: Address },

    // Unreachable when the indices come from the same distribution state
    #[error("Amount not found for token {token} and earner {earner}")]
    AmountNotFound { earner: Address, token: Address },

    #[error("Token tree not found for earner {earner}")]
    TokenTreeNotFound { earner: Address },

    #[error("Tree index {index} does not fit in a uint32")]
    IndexOverflow { index: u64 },

    #[error(
        "Claim length mismatch: {token_indices} token indices, {token_tree_proofs} token proofs, {token_leaves} token leaves"
    )]
    InputLengthMismatch {
        token_indices: usize,
        token_tree_proofs: usize,
        token_leaves: usize,
    },

    #[error("Invalid token claim proof for token {token} and earner {earner}")]
    InvalidTokenClaimProof { earner: Address, token: Address },

    #[error("Invalid earner claim proof for earner {earner}")]
    InvalidEarnerClaimProof { earner: Address },

    #[error("Invalid hex string: {0}")]
    InvalidHex(String),

    #[error(transparent)]
    Distribution(#[from] DistributionError),

    #[error(transparent)]
    Merkle(#[from] MerkleError),
}
