use alloy_primitives::{Address, U256};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use crate::{
    errors::{DistributionError, DistributionResult},
    records::{EarnerLine, EarnerRecord},
};

/// Cumulative amounts per earner per token.
///
/// Both levels are kept in `BTreeMap`s. Because inserts are only accepted in strictly
/// ascending order, iteration order is also insertion order, which is what the tree
/// indices are derived from.
#[derive(Debug, Clone, Default)]
pub struct Distribution {
    pub(crate) data: BTreeMap<Address, BTreeMap<Address, U256>>,

    /// Most recently accepted earner
    last_earner: Option<Address>,
    /// Most recently accepted token for `last_earner`
    last_token: Option<Address>,

    /// Populated by `merklize`, cleared by any mutation
    pub(crate) account_index: HashMap<Address, u64>,
    pub(crate) token_index: HashMap<(Address, Address), u64>,
}

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a distribution from already sorted earner records
    pub fn from_records(records: &[EarnerRecord]) -> DistributionResult<Self> {
        let mut distribution = Self::new();
        distribution.bulk_load(records)?;
        Ok(distribution)
    }

    /// Set the cumulative amount for `(earner, token)`.
    ///
    /// `None` is stored as zero. The earner must be greater than or equal to the last
    /// accepted earner; when equal, the token must be strictly greater than the last
    /// token accepted for it. A rejected call leaves the distribution untouched.
    pub fn set(
        &mut self,
        earner: Address,
        token: Address,
        amount: impl Into<Option<U256>>,
    ) -> DistributionResult<()> {
        let amount = amount.into().unwrap_or_default();

        self.check_earner_order(&earner)?;
        if let Some(last) = self.last_earner {
            if earner == last {
                if let Some(last_token) = self.last_token {
                    if token <= last_token {
                        return Err(DistributionError::TokenNotInOrder {
                            earner,
                            token,
                            last: last_token,
                        });
                    }
                }
            }
        }

        self.data.entry(earner).or_default().insert(token, amount);
        self.last_earner = Some(earner);
        self.last_token = Some(token);
        self.invalidate_indices();

        Ok(())
    }

    /// Amount for `(earner, token)`, or `None` if the pair was never set
    pub fn get(&self, earner: &Address, token: &Address) -> Option<U256> {
        self.data.get(earner)?.get(token).copied()
    }

    /// Apply earner records in order through [`Distribution::set`].
    ///
    /// Stops at the first ordering violation or at a record without tokens. Records
    /// applied before the failing entry stay applied.
    pub fn bulk_load(&mut self, records: &[EarnerRecord]) -> DistributionResult<()> {
        for record in records {
            if record.tokens.is_empty() {
                self.check_earner_order(&record.earner)?;
                return Err(DistributionError::EmptyEarnerRecord {
                    earner: record.earner,
                });
            }
            for (token, amount) in &record.tokens {
                self.set(record.earner, *token, *amount)?;
            }
        }

        debug!(
            records = records.len(),
            earners = self.num_earners(),
            "Loaded earner records"
        );
        Ok(())
    }

    /// Apply flat earner lines in order through [`Distribution::set`].
    ///
    /// Same failure semantics as [`Distribution::bulk_load`].
    pub fn load_lines(&mut self, lines: &[EarnerLine]) -> DistributionResult<()> {
        for line in lines {
            self.set(line.earner, line.token, line.cumulative_amount)?;
        }

        debug!(
            lines = lines.len(),
            earners = self.num_earners(),
            "Loaded earner lines"
        );
        Ok(())
    }

    /// Index of `earner` in the account tree. `None` until merklized.
    pub fn get_account_index(&self, earner: &Address) -> Option<u64> {
        self.account_index.get(earner).copied()
    }

    /// Index of `token` in `earner`'s token tree. `None` until merklized.
    pub fn get_token_index(&self, earner: &Address, token: &Address) -> Option<u64> {
        self.token_index.get(&(*earner, *token)).copied()
    }

    pub fn num_earners(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Earners in insertion order
    pub fn earners(&self) -> impl Iterator<Item = &Address> {
        self.data.keys()
    }

    /// Tokens and amounts for `earner` in insertion order
    pub fn tokens_for(&self, earner: &Address) -> Option<impl Iterator<Item = (&Address, &U256)>> {
        self.data.get(earner).map(|tokens| tokens.iter())
    }

    fn check_earner_order(&self, earner: &Address) -> DistributionResult<()> {
        match self.last_earner {
            Some(last) if *earner < last => Err(DistributionError::AddressNotInOrder {
                earner: *earner,
                last,
            }),
            _ => Ok(()),
        }
    }

    fn invalidate_indices(&mut self) {
        self.account_index.clear();
        self.token_index.clear();
    }
}
