use rs_merkle::Hasher;

use crate::{
    constants::HASH_LEN,
    error::{MerkleError, MerkleResult},
    hasher::KeccakHasher,
    tree::Hash,
};

/// Concatenate sibling hashes, leaf level first, into the on-chain proof byte string
pub fn flatten_hashes(hashes: &[Hash]) -> Vec<u8> {
    hashes.concat()
}

/// Recompute a root from a leaf hash, its index, and a flattened proof.
///
/// Mirrors the on-chain verifier: an even index puts the running hash on the left, an
/// odd index on the right. Any index bits left over once the proof is exhausted mean
/// the index does not belong to a tree of this depth.
pub fn process_inclusion_proof(proof: &[u8], leaf_hash: &Hash, index: u64) -> MerkleResult<Hash> {
    if proof.len() % HASH_LEN != 0 {
        return Err(MerkleError::InvalidProofLength { len: proof.len() });
    }

    let mut computed = *leaf_hash;
    let mut position = index;
    for chunk in proof.chunks_exact(HASH_LEN) {
        let sibling: Hash = chunk
            .try_into()
            .map_err(|_| MerkleError::InvalidProofLength { len: proof.len() })?;

        computed = if position % 2 == 0 {
            KeccakHasher::concat_and_hash(&computed, Some(&sibling))
        } else {
            KeccakHasher::concat_and_hash(&sibling, Some(&computed))
        };
        position /= 2;
    }

    if position != 0 {
        return Err(MerkleError::InvalidIndex {
            index,
            depth: proof.len() / HASH_LEN,
        });
    }

    Ok(computed)
}

/// Check that `leaf_hash` at `index` is included under `root`
pub fn verify_inclusion(proof: &[u8], root: &Hash, leaf_hash: &Hash, index: u64) -> MerkleResult<bool> {
    Ok(process_inclusion_proof(proof, leaf_hash, index)? == *root)
}
