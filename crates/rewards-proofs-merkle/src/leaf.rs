use alloy_primitives::{Address, U256};
use rs_merkle::Hasher;

use crate::{
    constants::{ADDRESS_LEN, EARNER_LEAF_SALT, LEAF_LEN, TOKEN_LEAF_SALT},
    hasher::KeccakHasher,
    tree::Hash,
};

/// Encode an earner leaf for the account tree.
///
/// ## ⚠️ Wire format
///
/// ```text
/// offset 0      : EARNER_LEAF_SALT (1 byte)
/// offset 1..21  : earner address   (20 bytes)
/// offset 21..53 : earner token root (32 bytes)
/// ```
///
/// This layout is `abi.encodePacked(uint8, address, bytes32)` and must never change.
pub fn encode_account_leaf(earner: &Address, earner_token_root: &Hash) -> [u8; LEAF_LEN] {
    encode_leaf(EARNER_LEAF_SALT, earner, earner_token_root)
}

/// Encode a token leaf for an earner's token tree.
///
/// Same layout as [`encode_account_leaf`] with `TOKEN_LEAF_SALT` and the cumulative
/// amount as a big-endian, zero-padded `uint256` payload.
pub fn encode_token_leaf(token: &Address, cumulative_earnings: &U256) -> [u8; LEAF_LEN] {
    encode_leaf(
        TOKEN_LEAF_SALT,
        token,
        &cumulative_earnings.to_be_bytes::<32>(),
    )
}

/// Hash an encoded leaf into its tree node.
pub fn hash_leaf(leaf: &[u8]) -> Hash {
    KeccakHasher::hash(leaf)
}

fn encode_leaf(salt: u8, address: &Address, payload: &Hash) -> [u8; LEAF_LEN] {
    let mut leaf = [0u8; LEAF_LEN];
    leaf[0] = salt;
    leaf[1..1 + ADDRESS_LEN].copy_from_slice(address.as_slice());
    leaf[1 + ADDRESS_LEN..].copy_from_slice(payload);
    leaf
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn test_address(byte: u8) -> Address {
        Address::repeat_byte(byte)
    }

    #[test]
    fn test_encode_account_leaf_layout() {
        let earner = Address::from_str("0x0D6bA28b9919CfCDb6b233469Cc5Ce30b979e08E").unwrap();
        let root = [0xabu8; 32];

        let leaf = encode_account_leaf(&earner, &root);

        assert_eq!(leaf.len(), 53);
        assert_eq!(leaf[0], EARNER_LEAF_SALT, "First byte must be the earner salt");
        assert_eq!(leaf[0], 0x00);
        assert_eq!(&leaf[1..21], earner.as_slice());
        assert_eq!(&leaf[21..], &root);
    }

    #[test]
    fn test_encode_token_leaf_layout() {
        let token = test_address(0x42);
        let amounts = [
            ("1", "0000000000000000000000000000000000000000000000000000000000000001"),
            ("69420", "0000000000000000000000000000000000000000000000000000000000010f2c"),
            (
                "115792089237316195423570985008687907853269984665640564039457584007913129639935",
                "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            ),
        ];

        for (decimal, expected_payload) in amounts {
            let amount = U256::from_str_radix(decimal, 10).unwrap();
            let leaf = encode_token_leaf(&token, &amount);

            assert_eq!(leaf[0], TOKEN_LEAF_SALT, "First byte must be the token salt");
            assert_eq!(leaf[0], 0x01);
            assert_eq!(&leaf[1..21], token.as_slice());
            assert_eq!(hex::encode(&leaf[21..]), expected_payload);
        }
    }

    #[test]
    fn test_salts_separate_domains() {
        // Same address and payload bytes in both domains must never produce the same node
        let address = test_address(9);
        let amount = U256::from(5);
        let payload = amount.to_be_bytes::<32>();

        let token_leaf = encode_token_leaf(&address, &amount);
        let account_leaf = encode_account_leaf(&address, &payload);

        assert_eq!(&token_leaf[1..], &account_leaf[1..]);
        assert_ne!(hash_leaf(&token_leaf), hash_leaf(&account_leaf));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let token = test_address(3);
        let amount = U256::from(1234u64);
        assert_eq!(
            encode_token_leaf(&token, &amount),
            encode_token_leaf(&token, &amount)
        );
    }

    #[test]
    fn test_wire_constants() {
        assert_eq!(EARNER_LEAF_SALT, 0x00);
        assert_eq!(TOKEN_LEAF_SALT, 0x01);
        assert_eq!(LEAF_LEN, 53);
    }

    #[test]
    fn test_token_leaf_known_hash() {
        let leaf = encode_token_leaf(&test_address(0x12), &U256::from(4));

        assert_eq!(
            hex::encode(leaf),
            format!("01{}{:064x}", "12".repeat(20), 4)
        );
        assert_eq!(
            hex::encode(hash_leaf(&leaf)),
            "5d3ee3d422d95ac3ba2cc28e6365e724db623ce432c626d0d9506b6177e354a3"
        );
    }
}
