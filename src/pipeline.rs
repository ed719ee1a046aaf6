//! # Pipeline Module
//!
//! One conversion run: load the export, convert it, write the database and
//! report. Nothing is written if conversion fails.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::convert::{self, ConvertOptions};
use crate::database;
use crate::export;
use crate::summary::{self, RunSummary};
use crate::util;

/// Per-run switches that do not live in the config file.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub dry_run: bool,
    pub verify: bool,
    pub summary_path: Option<PathBuf>,
    /// Wall-clock time of the run, epoch milliseconds.
    pub now_ms: i64,
}

pub fn run_conversion(cfg: &Config, config_hash: &str, opts: &RunOptions) -> Result<RunSummary> {
    let options = ConvertOptions {
        legacy_timestamps: cfg.legacy_timestamps(opts.now_ms)?,
    };

    let entries = export::load_export(&cfg.input_path)
        .with_context(|| format!("failed to load export {}", cfg.input_path.display()))?;

    let conversion = match convert::convert(&entries, &options) {
        Ok(conversion) => conversion,
        Err(err) => {
            if let Some(entry) = err.offending_entry() {
                error!("problematic entry: {entry}");
            }
            return Err(err.into());
        }
    };

    let mut bytes_written = 0;
    let mut verified = false;
    let output_path = if opts.dry_run {
        if opts.verify {
            warn!("--verify has no effect on a dry run");
        }
        None
    } else {
        util::ensure_output_parent(&cfg.output_path)?;
        bytes_written = database::write_database(&cfg.output_path, &conversion.records)
            .with_context(|| format!("failed to write {}", cfg.output_path.display()))?;

        if opts.verify {
            let decoded = database::read_database(&cfg.output_path)?;
            if decoded != conversion.records {
                bail!(
                    "verification failed: {} decodes to {} records, expected {}",
                    cfg.output_path.display(),
                    decoded.len(),
                    conversion.records.len()
                );
            }
            info!("verified {} records in {}", decoded.len(), cfg.output_path.display());
            verified = true;
        }
        Some(cfg.output_path.clone())
    };

    let run_summary = RunSummary {
        run_id: cfg.run_id.clone(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        config_hash: config_hash.to_string(),
        input_path: cfg.input_path.clone(),
        output_path,
        bytes_written,
        verified,
        stats: conversion.stats,
    };

    summary::log_summary(&run_summary);
    summary::log_preview(&conversion.records, cfg.preview_entries)?;

    if let Some(path) = &opts.summary_path {
        summary::write_summary(path, &run_summary)
            .with_context(|| format!("failed to write summary {}", path.display()))?;
    }

    Ok(run_summary)
}
