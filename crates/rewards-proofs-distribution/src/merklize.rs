use alloy_primitives::{Address, B256};
use rewards_proofs_merkle::{encode_account_leaf, encode_token_leaf, MerkleTree};
use std::collections::HashMap;
use tracing::debug;

use crate::{
    distribution::Distribution,
    errors::{DistributionError, DistributionResult},
};

/// Trees derived from a distribution by [`Distribution::merklize`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerklizedDistribution {
    /// Tree over earner leaves, each embedding that earner's token root
    pub account_tree: MerkleTree,
    /// One tree per earner over its token leaves
    pub token_trees: HashMap<Address, MerkleTree>,
}

impl MerklizedDistribution {
    /// The account tree root, which is what gets published on-chain
    pub fn root(&self) -> B256 {
        B256::from(self.account_tree.root())
    }

    pub fn token_tree(&self, earner: &Address) -> Option<&MerkleTree> {
        self.token_trees.get(earner)
    }
}

impl Distribution {
    /// Build the token trees and the account tree from the current contents and record
    /// every earner and (earner, token) index.
    ///
    /// Indices equal insertion rank. The result is a pure function of the contents, so
    /// re-running on an unchanged distribution yields identical trees and indices.
    pub fn merklize(&mut self) -> DistributionResult<MerklizedDistribution> {
        if self.data.is_empty() {
            return Err(DistributionError::EmptyDistribution);
        }

        let mut token_trees = HashMap::with_capacity(self.data.len());
        let mut token_index = HashMap::new();
        let mut account_index = HashMap::with_capacity(self.data.len());
        let mut account_leaves = Vec::with_capacity(self.data.len());

        for (earner_rank, (earner, tokens)) in self.data.iter().enumerate() {
            let mut token_leaves = Vec::with_capacity(tokens.len());
            for (token_rank, (token, amount)) in tokens.iter().enumerate() {
                token_index.insert((*earner, *token), token_rank as u64);
                token_leaves.push(encode_token_leaf(token, amount).to_vec());
            }
            let token_tree = MerkleTree::from_data(token_leaves)?;

            account_index.insert(*earner, earner_rank as u64);
            account_leaves.push(encode_account_leaf(earner, &token_tree.root()).to_vec());
            token_trees.insert(*earner, token_tree);
        }
        let account_tree = MerkleTree::from_data(account_leaves)?;

        self.account_index = account_index;
        self.token_index = token_index;

        let merklized = MerklizedDistribution {
            account_tree,
            token_trees,
        };
        debug!(
            earners = self.data.len(),
            root = %merklized.root(),
            "Merklized distribution"
        );

        Ok(merklized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;

    const NUM_EARNERS: u8 = 5;
    const NUM_TOKENS: u8 = 5;

    fn test_addresses() -> Vec<Address> {
        (1..=NUM_EARNERS).map(Address::with_last_byte).collect()
    }

    fn test_tokens() -> Vec<Address> {
        (1..=NUM_TOKENS).map(|i| Address::repeat_byte(0x10 + i)).collect()
    }

    /// earner i holds the first (NUM_TOKENS - i) tokens, token j worth j + i + 1
    fn test_distribution() -> Distribution {
        let mut distribution = Distribution::new();
        let tokens = test_tokens();
        for (i, earner) in test_addresses().iter().enumerate() {
            for (j, token) in tokens.iter().enumerate().take(tokens.len() - i) {
                distribution
                    .set(*earner, *token, U256::from(j + i + 1))
                    .unwrap();
            }
        }
        distribution
    }

    #[test]
    fn test_merklize() {
        let mut distribution = test_distribution();
        let addresses = test_addresses();
        let tokens = test_tokens();

        let merklized = distribution.merklize().unwrap();

        // token trees
        assert_eq!(merklized.token_trees.len(), addresses.len());
        for (i, earner) in addresses.iter().enumerate() {
            let token_tree = merklized.token_tree(earner).unwrap();
            assert_eq!(token_tree.leaf_count(), tokens.len() - i);

            for j in 0..tokens.len() - i {
                let expected = encode_token_leaf(&tokens[j], &U256::from(j + i + 1));
                assert_eq!(token_tree.data()[j], expected.to_vec());
            }
        }

        // account tree
        assert_eq!(merklized.account_tree.leaf_count(), addresses.len());
        for (i, earner) in addresses.iter().enumerate() {
            let token_root = merklized.token_trees[earner].root();
            let expected = encode_account_leaf(earner, &token_root);
            assert_eq!(merklized.account_tree.data()[i], expected.to_vec());

            assert_eq!(distribution.get_account_index(earner), Some(i as u64));
            for (j, token) in tokens.iter().enumerate().take(tokens.len() - i) {
                assert_eq!(distribution.get_token_index(earner, token), Some(j as u64));
            }
        }

        // earner 0 has 5 token leaves, earner 4 has 1
        assert_eq!(merklized.token_trees[&addresses[0]].leaf_count(), 5);
        assert_eq!(merklized.token_trees[&addresses[4]].leaf_count(), 1);
    }

    #[test]
    fn test_missing_pairs_have_no_index() {
        let mut distribution = test_distribution();
        let addresses = test_addresses();
        let tokens = test_tokens();
        distribution.merklize().unwrap();

        // earner 4 only holds token 0
        assert_eq!(distribution.get_token_index(&addresses[4], &tokens[1]), None);
        assert_eq!(
            distribution.get_account_index(&Address::repeat_byte(0xff)),
            None
        );
    }

    #[test]
    fn test_merklize_is_idempotent() {
        let mut distribution = test_distribution();

        let first = distribution.merklize().unwrap();
        let first_indices = distribution.get_token_index(&test_addresses()[1], &test_tokens()[3]);
        let second = distribution.merklize().unwrap();
        let second_indices = distribution.get_token_index(&test_addresses()[1], &test_tokens()[3]);

        assert_eq!(first, second);
        assert_eq!(first.root(), second.root());
        assert_eq!(first_indices, Some(3));
        assert_eq!(first_indices, second_indices);
    }

    #[test]
    fn test_empty_distribution() {
        let mut distribution = Distribution::new();
        assert!(matches!(
            distribution.merklize(),
            Err(DistributionError::EmptyDistribution)
        ));
    }

    #[test]
    fn test_mutation_invalidates_indices() {
        let mut distribution = test_distribution();
        let addresses = test_addresses();
        let before = distribution.merklize().unwrap();
        assert_eq!(distribution.get_account_index(&addresses[0]), Some(0));

        distribution
            .set(Address::repeat_byte(0xee), test_tokens()[0], U256::from(1))
            .unwrap();
        assert_eq!(distribution.get_account_index(&addresses[0]), None);

        let after = distribution.merklize().unwrap();
        assert_ne!(before.root(), after.root());
        assert_eq!(after.account_tree.leaf_count(), addresses.len() + 1);
        assert_eq!(distribution.get_account_index(&addresses[0]), Some(0));
    }

    #[test]
    fn test_failed_set_keeps_indices() {
        let mut distribution = test_distribution();
        let addresses = test_addresses();
        distribution.merklize().unwrap();

        assert!(distribution
            .set(addresses[0], test_tokens()[0], U256::from(1))
            .is_err());
        assert_eq!(distribution.get_account_index(&addresses[0]), Some(0));
    }
}
