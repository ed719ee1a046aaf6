use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::convert::{ConvertStats, WatchRecord};
use crate::error::ConvertResult;

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub run_id: String,
    pub tool_version: String,
    pub config_hash: String,
    pub input_path: PathBuf,
    /// `None` for dry runs.
    pub output_path: Option<PathBuf>,
    pub bytes_written: u64,
    pub verified: bool,
    pub stats: ConvertStats,
}

pub fn log_summary(summary: &RunSummary) {
    let stats = &summary.stats;
    info!("-----------------------------------");
    info!("Original: {} entries", stats.total_entries);
    info!(
        "Skipped: {} entries ({} ad views, {} community posts, {} website visits)",
        stats.skipped.total(),
        stats.skipped.ad_views,
        stats.skipped.community_posts,
        stats.skipped.website_visits
    );
    if stats.legacy_entries > 0 {
        info!(
            "Legacy: {} entries without watch time",
            stats.legacy_entries
        );
    }
    info!(
        "Converted: {} unique videos (and {} re-watches)",
        stats.unique_videos, stats.rewatches
    );
    match &summary.output_path {
        Some(path) => info!("Wrote {} bytes to {}", summary.bytes_written, path.display()),
        None => info!("Dry run: no database written"),
    }
}

/// Pretty JSON of the first `limit` records, or `None` unless more than one
/// record was produced.
pub fn render_preview(records: &[WatchRecord], limit: usize) -> ConvertResult<Option<String>> {
    if records.len() <= 1 || limit == 0 {
        return Ok(None);
    }
    let shown = &records[..limit.min(records.len())];
    Ok(Some(serde_json::to_string_pretty(shown)?))
}

pub fn log_preview(records: &[WatchRecord], limit: usize) -> ConvertResult<()> {
    if let Some(preview) = render_preview(records, limit)? {
        info!(
            "Preview of first {} converted entries:\n{preview}",
            limit.min(records.len())
        );
    }
    Ok(())
}

pub fn write_summary(path: &Path, summary: &RunSummary) -> ConvertResult<()> {
    let json = serde_json::to_vec_pretty(summary)?;
    std::fs::write(path, json)?;
    Ok(())
}
