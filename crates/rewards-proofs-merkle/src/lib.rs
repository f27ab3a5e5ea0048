/*!
# Rewards Proofs Merkle

Keccak256 merkle trees and the salted leaf encoding shared by the earner (account)
tree and the per-earner token trees.

The byte layout produced here is consumed by the on-chain verifier, so everything in
this crate is wire-critical:

- **Leaves**: `salt(1) || address(20) || payload(32)`, hashed with keccak256
- **Internal nodes**: `keccak256(left || right)`, never sorted
- **Padding**: the leaf layer is filled with zero nodes up to the next power of two
- **Proofs**: one sibling per level, leaf level first, concatenated into a byte string

## Usage

```rust
use alloy_primitives::{Address, U256};
use rewards_proofs_merkle::{encode_token_leaf, flatten_hashes, verify_inclusion, MerkleTree};

# fn example() -> rewards_proofs_merkle::MerkleResult<()> {
let leaves = vec![
    encode_token_leaf(&Address::repeat_byte(1), &U256::from(10)).to_vec(),
    encode_token_leaf(&Address::repeat_byte(2), &U256::from(20)).to_vec(),
];
let tree = MerkleTree::from_data(leaves)?;
let proof = flatten_hashes(&tree.proof(1)?);
assert!(verify_inclusion(&proof, &tree.root(), &tree.leaf_hash(1)?, 1)?);
# Ok(())
# }
```
*/

pub mod constants;
pub mod error;
pub mod hasher;
pub mod leaf;
pub mod proof;
pub mod tree;

pub use constants::{ADDRESS_LEN, EARNER_LEAF_SALT, HASH_LEN, LEAF_LEN, TOKEN_LEAF_SALT};
pub use error::{MerkleError, MerkleResult};
pub use hasher::KeccakHasher;
pub use leaf::{encode_account_leaf, encode_token_leaf, hash_leaf};
pub use proof::{flatten_hashes, process_inclusion_proof, verify_inclusion};
pub use tree::{Hash, MerkleTree, EMPTY_NODE};

// Re-export the hasher trait so callers can hash without depending on rs_merkle
pub use rs_merkle::Hasher;
