use rewards_proofs_distribution::{
    parse_earner_lines, parse_earner_records, Address, Distribution, DistributionError, U256,
};
use std::str::FromStr;

const EARNER: &str = "0x0D6bA28b9919CfCDb6b233469Cc5Ce30b979e08E";
const TOKEN: &str = "0x1006dd1B8C3D0eF53489beD27577C75299F71473";

fn earner_lines(count: u8, tokens_per_earner: u8) -> String {
    let mut raw = String::new();
    for e in 1..=count {
        for t in 1..=tokens_per_earner {
            raw.push_str(&format!(
                "{{\"earner\":\"{}\",\"token\":\"{}\",\"snapshot\":1718064000,\"cumulative_amount\":\"{}\"}}\n",
                Address::with_last_byte(e),
                Address::repeat_byte(0x10 + t),
                u64::from(e) * 1_000 + u64::from(t)
            ));
        }
    }
    raw
}

/// Single earner with a single token → one leaf in each tree
#[test]
fn test_single_record_distribution() {
    let raw = format!("{{\"earner\":\"{EARNER}\",\"tokens\":{{\"{TOKEN}\":\"1000000000000000000\"}}}}\n");
    let records = parse_earner_records(raw.as_bytes()).unwrap();

    let mut distribution = Distribution::from_records(&records).unwrap();
    let merklized = distribution.merklize().unwrap();

    let earner = Address::from_str(EARNER).unwrap();
    let token = Address::from_str(TOKEN).unwrap();
    assert_eq!(merklized.account_tree.leaf_count(), 1);
    assert_eq!(merklized.token_tree(&earner).unwrap().leaf_count(), 1);
    assert_eq!(
        distribution.get(&earner, &token),
        Some(U256::from(1_000_000_000_000_000_000u64))
    );
}

/// Lines → load → merklize assigns ranks in line order
#[test]
fn test_earner_lines_to_indices() {
    let raw = earner_lines(12, 3);
    let lines = parse_earner_lines(raw.as_bytes()).unwrap();
    assert_eq!(lines.len(), 36);

    let mut distribution = Distribution::new();
    distribution.load_lines(&lines).unwrap();
    let merklized = distribution.merklize().unwrap();

    assert_eq!(merklized.account_tree.leaf_count(), 12);
    for e in 1..=12u8 {
        let earner = Address::with_last_byte(e);
        assert_eq!(distribution.get_account_index(&earner), Some(u64::from(e - 1)));
        for t in 1..=3u8 {
            let token = Address::repeat_byte(0x10 + t);
            assert_eq!(
                distribution.get_token_index(&earner, &token),
                Some(u64::from(t - 1))
            );
            assert_eq!(
                distribution.get(&earner, &token),
                Some(U256::from(u64::from(e) * 1_000 + u64::from(t)))
            );
        }
    }
}

/// Unsorted input is rejected, never re-sorted
#[test]
fn test_unsorted_lines_are_rejected() {
    let mut raw = earner_lines(3, 1);
    raw.push_str(&format!(
        "{{\"earner\":\"{}\",\"token\":\"{}\",\"cumulative_amount\":\"1\"}}\n",
        Address::with_last_byte(2),
        Address::repeat_byte(0x11)
    ));
    let lines = parse_earner_lines(raw.as_bytes()).unwrap();

    let mut distribution = Distribution::new();
    let result = distribution.load_lines(&lines);

    assert!(matches!(
        result,
        Err(DistributionError::AddressNotInOrder { earner, last })
            if earner == Address::with_last_byte(2) && last == Address::with_last_byte(3)
    ));
    assert_eq!(distribution.num_earners(), 3);
}
