/*!
# Earner Record Schemas

Newline-delimited JSON shapes handed to the distribution in already sorted order.
Amounts travel as decimal strings so that full `uint256` values survive JSON.
*/

use alloy_primitives::{Address, U256};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::errors::{DistributionError, DistributionResult};

/// One earner and its token amounts, in the order they appeared in the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarnerRecord {
    pub earner: Address,

    /// Token -> cumulative amount. A JSON object whose key order is preserved.
    #[serde(with = "ordered_token_amounts")]
    pub tokens: Vec<(Address, U256)>,
}

/// One (earner, token) cumulative amount as emitted by the rewards pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarnerLine {
    pub earner: Address,

    pub token: Address,

    /// Snapshot the amount was calculated for. Informational only.
    #[serde(default)]
    pub snapshot: u64,

    #[serde(with = "decimal_amount")]
    pub cumulative_amount: U256,
}

/// Parse a decimal string into a `uint256` amount
pub fn parse_amount(value: &str) -> DistributionResult<U256> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DistributionError::InvalidAmount(value.to_string()));
    }
    U256::from_str_radix(trimmed, 10).map_err(|_| DistributionError::InvalidAmount(value.to_string()))
}

/// Parse newline-delimited [`EarnerLine`]s, skipping blank lines
pub fn parse_earner_lines(raw: &[u8]) -> DistributionResult<Vec<EarnerLine>> {
    parse_ndjson(raw)
}

/// Parse newline-delimited [`EarnerRecord`]s, skipping blank lines
pub fn parse_earner_records(raw: &[u8]) -> DistributionResult<Vec<EarnerRecord>> {
    parse_ndjson(raw)
}

fn parse_ndjson<T: DeserializeOwned>(raw: &[u8]) -> DistributionResult<Vec<T>> {
    let mut rows = Vec::new();
    for (i, line) in raw.split(|b| *b == b'\n').enumerate() {
        if line.iter().all(|b| b.is_ascii_whitespace()) {
            continue;
        }
        let row = serde_json::from_slice(line).map_err(|source| DistributionError::Json {
            line: i + 1,
            source,
        })?;
        rows.push(row);
    }
    Ok(rows)
}

// ================================================================================================
// Custom Serde Functions
// ================================================================================================

mod decimal_amount {
    use alloy_primitives::U256;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(amount: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&amount.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_amount(&s).map_err(serde::de::Error::custom)
    }
}

mod ordered_token_amounts {
    use alloy_primitives::{Address, U256};
    use serde::{
        de::{self, MapAccess, Visitor},
        ser::SerializeMap,
        Deserializer, Serializer,
    };
    use std::{fmt, str::FromStr};

    pub fn serialize<S>(tokens: &[(Address, U256)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(tokens.len()))?;
        for (token, amount) in tokens {
            map.serialize_entry(&token.to_string(), &amount.to_string())?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(Address, U256)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(TokenAmountsVisitor)
    }

    struct TokenAmountsVisitor;

    impl<'de> Visitor<'de> for TokenAmountsVisitor {
        type Value = Vec<(Address, U256)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of token address to decimal amount")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut tokens = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((token, amount)) = access.next_entry::<String, String>()? {
                let token = Address::from_str(&token).map_err(de::Error::custom)?;
                let amount = super::parse_amount(&amount).map_err(de::Error::custom)?;
                tokens.push((token, amount));
            }
            Ok(tokens)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const EARNER: &str = "0x0D6bA28b9919CfCDb6b233469Cc5Ce30b979e08E";
    const TOKEN_A: &str = "0x1006dd1B8C3D0eF53489beD27577C75299F71473";
    const TOKEN_B: &str = "0x94373a4919B3240D86eA41593D5eBa789FEF3848";

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("0").unwrap(), U256::ZERO);
        assert_eq!(parse_amount("69420").unwrap(), U256::from(69420));
        assert_eq!(
            parse_amount(
                "115792089237316195423570985008687907853269984665640564039457584007913129639935"
            )
            .unwrap(),
            U256::MAX
        );

        for bad in [
            "",
            "-1",
            "0x10",
            "1.5",
            "115792089237316195423570985008687907853269984665640564039457584007913129639936",
        ] {
            assert!(
                matches!(parse_amount(bad), Err(DistributionError::InvalidAmount(_))),
                "'{}' should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_earner_record_keeps_token_order() {
        // TOKEN_B sorts after TOKEN_A but appears first; it must not be re-sorted
        let json = format!(r#"{{"earner":"{EARNER}","tokens":{{"{TOKEN_B}":"2","{TOKEN_A}":"1"}}}}"#);

        let record: EarnerRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record.earner, Address::from_str(EARNER).unwrap());
        assert_eq!(
            record.tokens,
            vec![
                (Address::from_str(TOKEN_B).unwrap(), U256::from(2)),
                (Address::from_str(TOKEN_A).unwrap(), U256::from(1)),
            ]
        );
    }

    #[test]
    fn test_earner_record_serialization() {
        let record = EarnerRecord {
            earner: Address::from_str(EARNER).unwrap(),
            tokens: vec![(Address::from_str(TOKEN_A).unwrap(), U256::from(5))],
        };

        let json = serde_json::to_string(&record).unwrap();
        let parsed: EarnerRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, record);
        assert!(json.contains(r#""5""#), "amounts serialize as decimal strings");
    }

    #[test]
    fn test_parse_earner_lines_skips_blank_lines() {
        let raw = format!(
            "{{\"earner\":\"{EARNER}\",\"token\":\"{TOKEN_A}\",\"snapshot\":1718064000,\"cumulative_amount\":\"1000\"}}\n\n\
             {{\"earner\":\"{EARNER}\",\"token\":\"{TOKEN_B}\",\"cumulative_amount\":\"2000\"}}\r\n"
        );

        let lines = parse_earner_lines(raw.as_bytes()).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].snapshot, 1718064000);
        assert_eq!(lines[0].cumulative_amount, U256::from(1000));
        assert_eq!(lines[1].snapshot, 0);
        assert_eq!(lines[1].token, Address::from_str(TOKEN_B).unwrap());
    }

    #[test]
    fn test_parse_reports_line_number() {
        let raw = format!(
            "{{\"earner\":\"{EARNER}\",\"tokens\":{{\"{TOKEN_A}\":\"1\"}}}}\nnot json\n"
        );

        let result = parse_earner_records(raw.as_bytes());
        assert!(matches!(result, Err(DistributionError::Json { line: 2, .. })));
    }

    #[test]
    fn test_parse_rejects_bad_amount() {
        let raw = format!(
            "{{\"earner\":\"{EARNER}\",\"token\":\"{TOKEN_A}\",\"cumulative_amount\":\"12abc\"}}"
        );

        let result = parse_earner_lines(raw.as_bytes());
        assert!(matches!(result, Err(DistributionError::Json { line: 1, .. })));
    }
}
