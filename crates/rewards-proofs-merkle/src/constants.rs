/// Domain separation constants for leaf encoding.
/// These must match the constants used by the on-chain verifier.
///
/// Salt prefixed to earner (account tree) leaves
pub const EARNER_LEAF_SALT: u8 = 0x00;

/// Salt prefixed to token (token tree) leaves
pub const TOKEN_LEAF_SALT: u8 = 0x01;

/// Width of an EVM address
pub const ADDRESS_LEN: usize = 20;

/// Width of a keccak256 digest, a tree node, and a leaf payload
pub const HASH_LEN: usize = 32;

/// Total encoded leaf width: salt + address + payload
pub const LEAF_LEN: usize = 1 + ADDRESS_LEN + HASH_LEN;
