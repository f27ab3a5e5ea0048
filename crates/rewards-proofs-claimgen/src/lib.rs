/*!
# Rewards Proofs Claim Generation

Turns a merklized [`Distribution`] into a [`RewardsMerkleClaim`]: the earner's index and
sibling path in the account tree, plus an index, sibling path and leaf for every
requested token in that earner's token tree.

```rust
use rewards_proofs_claimgen::{format_proof_for_solidity, verify_claim, Claimgen};
use rewards_proofs_distribution::{Address, Distribution, U256};

# fn example() -> rewards_proofs_claimgen::ClaimResult<()> {
let earner = Address::with_last_byte(1);
let token = Address::repeat_byte(0x11);

let mut distribution = Distribution::new();
distribution.set(earner, token, U256::from(100))?;

let mut claimgen = Claimgen::new(distribution);
let (trees, claim) = claimgen.generate_claim_proof_for_earner(&earner, &[token], 0)?;

verify_claim(&claim, &trees.root())?;
let display = format_proof_for_solidity(&trees.root(), &claim);
assert_eq!(display.token_leaves_num, 1);
# Ok(())
# }
```

The builder does not check that the computed root is the root published at
`root_index`; that is left to the caller and the on-chain verifier.
*/

pub mod builder;
pub mod claim;
pub mod errors;
pub mod formatter;
pub mod verify;

pub use builder::{get_proof_for_earner, Claimgen};
pub use claim::{EarnerTreeMerkleLeaf, RewardsMerkleClaim, TokenTreeMerkleLeaf};
pub use errors::{ClaimError, ClaimResult};
pub use formatter::{
    bytes_to_hex, format_proof_for_solidity, hex_to_bytes, EarnerTreeMerkleLeafStrings,
    RewardsMerkleClaimStrings, TokenTreeMerkleLeafStrings,
};
pub use verify::verify_claim;

pub use rewards_proofs_distribution::{Distribution, MerklizedDistribution};
