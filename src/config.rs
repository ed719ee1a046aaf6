use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::history::legacy::LegacyTimestamps;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LegacyTimestampPolicy {
    Now,
    Reject,
    Fixed,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub run_id: String,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub legacy_timestamp_policy: LegacyTimestampPolicy,
    pub legacy_fixed_timestamp_ms: Option<i64>,
    pub preview_entries: usize,
}

impl Config {
    /// Resolve the legacy timestamp policy against the run's wall-clock time.
    pub fn legacy_timestamps(&self, now_ms: i64) -> Result<LegacyTimestamps> {
        match self.legacy_timestamp_policy {
            LegacyTimestampPolicy::Now => Ok(LegacyTimestamps::Substitute(now_ms)),
            LegacyTimestampPolicy::Reject => Ok(LegacyTimestamps::Reject),
            LegacyTimestampPolicy::Fixed => match self.legacy_fixed_timestamp_ms {
                Some(ms) => Ok(LegacyTimestamps::Substitute(ms)),
                None => bail!("legacy_timestamp_policy 'fixed' needs legacy_fixed_timestamp_ms"),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub config_hash: String,
}

pub fn load_config(path: Option<&Path>) -> Result<LoadedConfig> {
    let bytes: Vec<u8> = if let Some(p) = path {
        std::fs::read(p)?
    } else {
        include_bytes!("../config/default.yml").to_vec()
    };

    let mut config: Config = serde_yaml::from_slice(&bytes)?;
    if config.run_id.trim().is_empty() {
        config.run_id = generate_run_id();
    }

    let config_hash = hash_bytes(&bytes);

    Ok(LoadedConfig { config, config_hash })
}

fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    hex::encode(digest)
}

fn generate_run_id() -> String {
    let now = chrono::Utc::now();
    format!(
        "{}_{:08x}",
        now.format("%Y%m%dT%H%M%SZ"),
        now.timestamp_subsec_nanos()
    )
}
