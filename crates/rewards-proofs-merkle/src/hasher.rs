use alloy_primitives::keccak256;
use rs_merkle::Hasher;

/// Keccak256 hasher matching the on-chain verifier.
///
/// Leaves carry their own domain salt (see [`crate::leaf`]) so, unlike prefix-based
/// schemes, nothing is prepended here. Internal nodes use the `rs_merkle` default of
/// `hash(left || right)`, which propagates a lone left child unchanged. The on-chain
/// verifier has no such rule, so [`crate::MerkleTree`] pads its leaf layer with
/// [`crate::EMPTY_NODE`] to a power of two; that padding is what keeps every layer even
/// and the lone-child branch unreachable.
#[derive(Clone, Debug)]
pub struct KeccakHasher;

impl Hasher for KeccakHasher {
    type Hash = [u8; 32];

    fn hash(data: &[u8]) -> [u8; 32] {
        keccak256(data).0
    }
}
