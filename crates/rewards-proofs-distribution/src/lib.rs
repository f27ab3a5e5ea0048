/*!
# Rewards Proofs Distribution

The ordered `{earner -> {token -> cumulative amount}}` mapping and its two-tier
merklization.

## Ordering

Earners must be inserted in strictly ascending byte order, and each earner's tokens in
strictly ascending byte order. Input is never sorted on the caller's behalf: an
out-of-order insert is rejected with a typed error and leaves the accepted contents
unchanged.

## Merklization

[`Distribution::merklize`] builds one token tree per earner and an account tree whose
leaves embed each earner's token root, then records the earner and (earner, token)
indices. Index lookups report `None` until merklization has run, and again after any
later mutation.

## Ingestion

Two newline-delimited JSON shapes are accepted:

- [`EarnerRecord`]: `{"earner": "0x..", "tokens": {"0x..": "123", ...}}`
- [`EarnerLine`]: `{"earner": "0x..", "token": "0x..", "snapshot": 0, "cumulative_amount": "123"}`
*/

pub mod distribution;
pub mod errors;
pub mod merklize;
pub mod records;

pub use distribution::Distribution;
pub use errors::{DistributionError, DistributionResult};
pub use merklize::MerklizedDistribution;
pub use records::{parse_amount, parse_earner_lines, parse_earner_records, EarnerLine, EarnerRecord};

// Re-export the primitive types used throughout the public API
pub use alloy_primitives::{Address, B256, U256};
