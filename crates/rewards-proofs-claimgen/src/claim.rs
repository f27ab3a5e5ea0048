use alloy_primitives::{Address, B256, U256};
use rewards_proofs_merkle::{encode_account_leaf, encode_token_leaf, hash_leaf, Hash, LEAF_LEN};

/// Leaf of the account tree: an earner and the root of its token tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarnerTreeMerkleLeaf {
    pub earner: Address,
    pub earner_token_root: B256,
}

impl EarnerTreeMerkleLeaf {
    pub fn encode(&self) -> [u8; LEAF_LEN] {
        encode_account_leaf(&self.earner, &self.earner_token_root.0)
    }

    pub fn hash(&self) -> Hash {
        hash_leaf(&self.encode())
    }
}

/// Leaf of an earner's token tree: a token and the earner's cumulative amount of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTreeMerkleLeaf {
    pub token: Address,
    pub cumulative_earnings: U256,
}

impl TokenTreeMerkleLeaf {
    pub fn encode(&self) -> [u8; LEAF_LEN] {
        encode_token_leaf(&self.token, &self.cumulative_earnings)
    }

    pub fn hash(&self) -> Hash {
        hash_leaf(&self.encode())
    }
}

/// A claim checkable against a published account root.
///
/// Field order matches the on-chain struct:
/// `(uint32 rootIndex, uint32 earnerIndex, bytes earnerTreeProof, EarnerTreeMerkleLeaf earnerLeaf,
/// uint32[] tokenIndices, bytes[] tokenTreeProofs, TokenTreeMerkleLeaf[] tokenLeaves)`.
/// Proofs are concatenated 32-byte sibling hashes, leaf level first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardsMerkleClaim {
    pub root_index: u32,
    pub earner_index: u32,
    pub earner_tree_proof: Vec<u8>,
    pub earner_leaf: EarnerTreeMerkleLeaf,
    pub token_indices: Vec<u32>,
    pub token_tree_proofs: Vec<Vec<u8>>,
    pub token_leaves: Vec<TokenTreeMerkleLeaf>,
}
