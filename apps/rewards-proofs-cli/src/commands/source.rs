use rewards_proofs_fetcher::{process_claim_amounts_from_raw_body, ProofDataFetcher, RewardProofData};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

use crate::error::CliResult;

/// Where claim amounts come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Local NDJSON file of earner lines
    File(PathBuf),
    /// Published claim amounts for a snapshot date
    Snapshot(String),
    /// Published claim amounts for the newest snapshot
    Latest,
}

impl Source {
    pub fn new(file: Option<PathBuf>, snapshot_date: Option<String>) -> Self {
        match (file, snapshot_date) {
            (Some(path), _) => Source::File(path),
            (None, Some(date)) => Source::Snapshot(date),
            (None, None) => Source::Latest,
        }
    }

    pub fn is_remote(&self) -> bool {
        !matches!(self, Source::File(_))
    }

    /// Load and merklize the claim amounts
    pub async fn load(&self, fetcher: &ProofDataFetcher) -> CliResult<RewardProofData> {
        match self {
            Source::File(path) => load_file(path),
            Source::Snapshot(date) => Ok(fetcher.fetch_claim_amounts_for_date(date).await?),
            Source::Latest => {
                let snapshot = fetcher.fetch_latest_snapshot().await?;
                info!(snapshot_date = %snapshot.date_string(), "Using latest snapshot");
                Ok(fetcher
                    .fetch_claim_amounts_for_date(&snapshot.date_string())
                    .await?)
            }
        }
    }
}

pub fn load_file(path: &Path) -> CliResult<RewardProofData> {
    let raw = fs::read(path)?;
    let data = process_claim_amounts_from_raw_body(&raw)?;
    info!(
        path = %path.display(),
        earners = data.distribution.num_earners(),
        "Loaded claim amounts"
    );
    Ok(data)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    pub(crate) const EARNER_LINES: &str = r#"{"earner":"0x0000000000000000000000000000000000000001","token":"0x1111111111111111111111111111111111111111","snapshot":1720483200000,"cumulative_amount":"100"}
{"earner":"0x0000000000000000000000000000000000000001","token":"0x2222222222222222222222222222222222222222","snapshot":1720483200000,"cumulative_amount":"250"}
{"earner":"0x0000000000000000000000000000000000000002","token":"0x1111111111111111111111111111111111111111","snapshot":1720483200000,"cumulative_amount":"75"}
{"earner":"0x0000000000000000000000000000000000000003","token":"0x2222222222222222222222222222222222222222","snapshot":1720483200000,"cumulative_amount":"115792089237316195423570985008687907853269984665640564039457584007913129639935"}
"#;

    pub(crate) fn earner_lines_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(EARNER_LINES.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_source_selection() {
        assert_eq!(
            Source::new(Some(PathBuf::from("a.json")), None),
            Source::File(PathBuf::from("a.json"))
        );
        assert_eq!(
            Source::new(None, Some("2024-07-09".to_string())),
            Source::Snapshot("2024-07-09".to_string())
        );
        assert_eq!(Source::new(None, None), Source::Latest);
        assert!(Source::Latest.is_remote());
        assert!(!Source::File(PathBuf::new()).is_remote());
    }

    #[test]
    fn test_load_file() {
        let file = earner_lines_file();
        let data = load_file(file.path()).unwrap();
        assert_eq!(data.distribution.num_earners(), 3);
        assert_eq!(data.root, data.trees.root());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_file(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(crate::error::CliError::Io(_))));
    }
}
