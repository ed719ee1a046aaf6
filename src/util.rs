//! # Utility Module
//!
//! Glue between the command line, the config layer and the file system.

use std::path::Path;

use anyhow::{Result, anyhow};
use tracing::debug;

use crate::cli::{CliOptions, LegacyTimestampMode};
use crate::config::{Config, LegacyTimestampPolicy};

/// Convert CLI legacy timestamp mode to the config enum
pub fn policy_from_cli(mode: LegacyTimestampMode) -> LegacyTimestampPolicy {
    match mode {
        LegacyTimestampMode::Now => LegacyTimestampPolicy::Now,
        LegacyTimestampMode::Reject => LegacyTimestampPolicy::Reject,
        LegacyTimestampMode::Fixed => LegacyTimestampPolicy::Fixed,
    }
}

/// Apply command-line overrides on top of the loaded config.
pub fn apply_cli_overrides(cfg: &mut Config, cli_opts: &CliOptions) {
    if let Some(input) = &cli_opts.input {
        cfg.input_path = input.clone();
    }
    if let Some(output) = &cli_opts.output {
        cfg.output_path = output.clone();
    }
    if let Some(mode) = cli_opts.legacy_timestamps {
        cfg.legacy_timestamp_policy = policy_from_cli(mode);
    }
    if let Some(ms) = cli_opts.legacy_fixed_timestamp_ms {
        cfg.legacy_fixed_timestamp_ms = Some(ms);
    }
    if let Some(preview) = cli_opts.preview {
        cfg.preview_entries = preview;
    }
}

/// Make sure the directory that will hold `path` exists and `path` itself is
/// not a directory.
pub fn ensure_output_parent(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(anyhow!(
            "output path is a directory: {}",
            path.display()
        ));
    }
    if let Some(parent) = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty() && !p.exists())
    {
        debug!("creating output directory {}", parent.display());
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
