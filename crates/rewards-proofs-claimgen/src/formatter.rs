/*!
# Solidity-Facing Claim Format

Display form of a [`RewardsMerkleClaim`] for RPC payloads and CLI output. Byte strings
become `0x`-prefixed lowercase hex, amounts are written as bare JSON numbers of any
size (the shape a `big.Int` unmarshaller accepts), and the token proof and leaf counts
are repeated explicitly for consumers that expect them.
*/

use alloy_primitives::{B256, U256};
use serde::{Deserialize, Serialize};

use crate::{
    claim::{RewardsMerkleClaim, TokenTreeMerkleLeaf},
    errors::{ClaimError, ClaimResult},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnerTreeMerkleLeafStrings {
    pub earner: String,
    pub earner_token_root: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTreeMerkleLeafStrings {
    pub token: String,
    #[serde(with = "json_number")]
    pub cumulative_earnings: U256,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardsMerkleClaimStrings {
    pub root: String,
    pub root_index: u32,
    pub earner_index: u32,
    pub earner_tree_proof: String,
    pub earner_leaf: EarnerTreeMerkleLeafStrings,
    pub token_indices: Vec<u32>,
    pub token_tree_proofs: Vec<String>,
    pub token_leaves: Vec<TokenTreeMerkleLeafStrings>,
    pub token_tree_proofs_num: u32,
    pub token_leaves_num: u32,
}

pub fn format_proof_for_solidity(
    account_tree_root: &B256,
    claim: &RewardsMerkleClaim,
) -> RewardsMerkleClaimStrings {
    RewardsMerkleClaimStrings {
        root: bytes_to_hex(account_tree_root.as_slice()),
        root_index: claim.root_index,
        earner_index: claim.earner_index,
        earner_tree_proof: bytes_to_hex(&claim.earner_tree_proof),
        earner_leaf: EarnerTreeMerkleLeafStrings {
            earner: bytes_to_hex(claim.earner_leaf.earner.as_slice()),
            earner_token_root: bytes_to_hex(claim.earner_leaf.earner_token_root.as_slice()),
        },
        token_indices: claim.token_indices.clone(),
        token_tree_proofs: claim
            .token_tree_proofs
            .iter()
            .map(|proof| bytes_to_hex(proof))
            .collect(),
        token_leaves: claim.token_leaves.iter().map(format_token_leaf).collect(),
        token_tree_proofs_num: claim.token_tree_proofs.len() as u32,
        token_leaves_num: claim.token_leaves.len() as u32,
    }
}

fn format_token_leaf(leaf: &TokenTreeMerkleLeaf) -> TokenTreeMerkleLeafStrings {
    TokenTreeMerkleLeafStrings {
        token: bytes_to_hex(leaf.token.as_slice()),
        cumulative_earnings: leaf.cumulative_earnings,
    }
}

/// `0x`-prefixed lowercase hex
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decode hex with or without a `0x` prefix
pub fn hex_to_bytes(s: &str) -> ClaimResult<Vec<u8>> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(digits).map_err(|e| ClaimError::InvalidHex(format!("'{}': {}", s, e)))
}

// Full-precision uint256 as an unquoted JSON number. Only meaningful with serde_json.
mod json_number {
    use alloy_primitives::U256;
    use serde::{de::Error as _, ser::Error as _, Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::value::RawValue;

    pub fn serialize<S>(amount: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RawValue::from_string(amount.to_string())
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        let digits = raw.get().trim().trim_matches('"');
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(D::Error::custom(format!(
                "invalid cumulativeEarnings '{}'",
                raw.get()
            )));
        }
        U256::from_str_radix(digits, 10).map_err(D::Error::custom)
    }
}
