use alloy_primitives::B256;
use chrono::{DateTime, NaiveDate, Utc};
use rewards_proofs_distribution::{Distribution, MerklizedDistribution};
use serde::{Deserialize, Serialize};

/// One entry of `recent-snapshots.json`, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(with = "snapshot_date")]
    pub snapshot_date: NaiveDate,
}

impl Snapshot {
    /// Path segment used in claim amount URLs
    pub fn date_string(&self) -> String {
        self.snapshot_date.format("%Y-%m-%d").to_string()
    }
}

/// A root already submitted on chain, from `submitted-payments.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedRewardRoot {
    pub root: B256,
    pub root_index: u32,
    #[serde(default)]
    pub calc_end_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub activated_at: Option<DateTime<Utc>>,
}

/// Distribution for one snapshot, merklized
#[derive(Debug, Clone)]
pub struct RewardProofData {
    pub distribution: Distribution,
    pub trees: MerklizedDistribution,
    pub root: B256,
}

impl RewardProofData {
    /// Index of this data's root among the submitted roots, if it was posted
    pub fn find_root_index(&self, posted: &[SubmittedRewardRoot]) -> Option<u32> {
        posted
            .iter()
            .find(|submitted| submitted.root == self.root)
            .map(|submitted| submitted.root_index)
    }
}

// Accepts plain dates and RFC 3339 timestamps
mod snapshot_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&value, "%Y-%m-%d")
            .or_else(|_| DateTime::parse_from_rfc3339(&value).map(|dt| dt.date_naive()))
            .map_err(|e| D::Error::custom(format!("invalid snapshot date '{}': {}", value, e)))
    }
}
