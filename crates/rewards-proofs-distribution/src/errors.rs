use alloy_primitives::Address;
use rewards_proofs_merkle::MerkleError;
use thiserror::Error;

pub type DistributionResult<T> = Result<T, DistributionError>;

#[derive(Error, Debug)]
pub enum DistributionError {
    #[error("Earner {earner} is not in order: last accepted earner is {last}")]
    AddressNotInOrder { earner: Address, last: Address },

    #[error("Token {token} for earner {earner} is not in order: last accepted token is {last}")]
    TokenNotInOrder {
        earner: Address,
        token: Address,
        last: Address,
    },

    #[error("Earner {earner} has no tokens")]
    EmptyEarnerRecord { earner: Address },

    #[error("Cannot merklize an empty distribution")]
    EmptyDistribution,

    #[error("Invalid amount '{0}': expected a decimal uint256")]
    InvalidAmount(String),

    #[error("Invalid JSON on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Merkle(#[from] MerkleError),
}
