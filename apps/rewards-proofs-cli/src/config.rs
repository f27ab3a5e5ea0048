use rewards_proofs_fetcher::FetcherConfig;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};

use crate::error::{CliError, CliResult};

/// Optional YAML config file; every field can also come from flags or the environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    pub base_url: Option<String>,
    pub environment: Option<String>,
    pub network: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub max_retries: Option<usize>,
}

impl CliConfig {
    pub fn load(path: &Path) -> CliResult<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }

    /// Fields set in `overrides` win over this file's values
    pub fn merge(self, overrides: CliConfig) -> Self {
        Self {
            base_url: overrides.base_url.or(self.base_url),
            environment: overrides.environment.or(self.environment),
            network: overrides.network.or(self.network),
            request_timeout_secs: overrides.request_timeout_secs.or(self.request_timeout_secs),
            max_retries: overrides.max_retries.or(self.max_retries),
        }
    }

    pub fn fetcher_config(&self) -> CliResult<FetcherConfig> {
        let mut config = FetcherConfig::default();
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(environment) = &self.environment {
            config.environment = environment.clone();
        }
        if let Some(network) = &self.network {
            config.network = network.clone();
        }
        if let Some(secs) = self.request_timeout_secs {
            if secs == 0 {
                return Err(CliError::InvalidConfig(
                    "request_timeout_secs must be positive".to_string(),
                ));
            }
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(max_retries) = self.max_retries {
            config.max_retries = max_retries;
        }
        config
            .validate()
            .map_err(|e| CliError::InvalidConfig(e.to_string()))?;
        Ok(config)
    }
}
