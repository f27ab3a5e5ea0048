use rs_merkle::Hasher;
use std::fmt;

use crate::{
    error::{MerkleError, MerkleResult},
    hasher::KeccakHasher,
};

pub type Hash = [u8; 32];

/// Node used to pad the leaf layer up to a power of two
pub const EMPTY_NODE: Hash = [0u8; 32];

/// Binary keccak merkle tree over raw leaf data.
///
/// Leaves keep their insertion order, so the index of a datum equals its position in
/// the input. The leaf layer is padded with [`EMPTY_NODE`] up to the next power of two
/// before it is handed to `rs_merkle`, so every layer has an even width and every proof
/// is exactly `log2(width)` siblings long.
#[derive(Clone)]
pub struct MerkleTree {
    /// The original leaf data, in insertion order
    data: Vec<Vec<u8>>,
    tree: rs_merkle::MerkleTree<KeccakHasher>,
    root: Hash,
}

impl MerkleTree {
    /// Build a tree from encoded leaves
    pub fn from_data(data: Vec<Vec<u8>>) -> MerkleResult<Self> {
        if data.is_empty() {
            return Err(MerkleError::EmptyTree);
        }

        let width = data.len().next_power_of_two();
        let mut leaves: Vec<Hash> = data.iter().map(|datum| KeccakHasher::hash(datum)).collect();
        leaves.resize(width, EMPTY_NODE);

        let tree = rs_merkle::MerkleTree::<KeccakHasher>::from_leaves(&leaves);
        let root = tree.root().ok_or(MerkleError::EmptyTree)?;

        Ok(Self { data, tree, root })
    }

    pub fn root(&self) -> Hash {
        self.root
    }

    /// Number of real (unpadded) leaves
    pub fn leaf_count(&self) -> usize {
        self.data.len()
    }

    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    pub fn data(&self) -> &[Vec<u8>] {
        &self.data
    }

    pub fn leaf_hash(&self, index: usize) -> MerkleResult<Hash> {
        self.check_index(index)?;
        Ok(KeccakHasher::hash(&self.data[index]))
    }

    /// Sibling hashes for the leaf at `index`, leaf level first
    pub fn proof(&self, index: usize) -> MerkleResult<Vec<Hash>> {
        self.check_index(index)?;
        Ok(self.tree.proof(&[index]).proof_hashes().to_vec())
    }

    fn check_index(&self, index: usize) -> MerkleResult<()> {
        if index >= self.data.len() {
            return Err(MerkleError::LeafIndexOutOfRange {
                index,
                leaf_count: self.data.len(),
            });
        }
        Ok(())
    }
}

// The tree is a pure function of its data
impl PartialEq for MerkleTree {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root && self.data == other.data
    }
}

impl Eq for MerkleTree {}

impl fmt::Debug for MerkleTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerkleTree")
            .field("leaf_count", &self.data.len())
            .field("depth", &self.depth())
            .field("root", &hex::encode(self.root))
            .finish()
    }
}
