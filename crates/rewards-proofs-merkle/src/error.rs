use thiserror::Error;

pub type MerkleResult<T> = Result<T, MerkleError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    #[error("Cannot build a merkle tree over zero leaves")]
    EmptyTree,

    #[error("Leaf index {index} out of range for tree with {leaf_count} leaves")]
    LeafIndexOutOfRange { index: usize, leaf_count: usize },

    #[error("Proof length {len} is not a multiple of 32 bytes")]
    InvalidProofLength { len: usize },

    #[error("Leaf index {index} does not fit a proof of {depth} levels")]
    InvalidIndex { index: u64, depth: usize },
}
