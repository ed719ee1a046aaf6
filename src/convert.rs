//! # Convert Module
//!
//! Turns raw export entries into deduplicated [`WatchRecord`]s.
//!
//! [`convert`] is a pure function of its input and [`ConvertOptions`]: it
//! returns the records in first-seen order together with [`ConvertStats`],
//! or stops at the first entry no known export format produces.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{ConvertError, ConvertResult};
use crate::history::legacy::{self, LegacyTimestamps};
use crate::history::{self, EntryKind, ParsedEntry, RawEntry, SkipReason, standard};

/// One video in the Watchmarker database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchRecord {
    #[serde(rename = "strIdent")]
    pub identifier: String,
    #[serde(rename = "intTimestamp")]
    pub timestamp: i64,
    #[serde(rename = "strTitle")]
    pub title: String,
    #[serde(rename = "intCount")]
    pub count: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct ConvertOptions {
    pub legacy_timestamps: LegacyTimestamps,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkipCounts {
    pub ad_views: u64,
    pub community_posts: u64,
    pub website_visits: u64,
}

impl SkipCounts {
    pub fn total(&self) -> u64 {
        self.ad_views + self.community_posts + self.website_visits
    }

    fn record(&mut self, reason: &SkipReason) {
        match reason {
            SkipReason::AdView => self.ad_views += 1,
            SkipReason::CommunityPost => self.community_posts += 1,
            SkipReason::WebsiteVisit { .. } => self.website_visits += 1,
        }
    }
}

/// Counters collected during a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConvertStats {
    pub total_entries: u64,
    pub skipped: SkipCounts,
    pub legacy_entries: u64,
    pub unique_videos: u64,
    pub rewatches: u64,
}

#[derive(Debug, Clone)]
pub struct Conversion {
    pub records: Vec<WatchRecord>,
    pub stats: ConvertStats,
}

/// Outcome of adding one watch to the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fold {
    Inserted,
    Rewatch,
}

/// Identifier-keyed merge of watch events that remembers first-insertion order.
#[derive(Debug, Default)]
pub struct WatchAggregator {
    index: HashMap<String, usize>,
    records: Vec<WatchRecord>,
    rewatches: u64,
}

impl WatchAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record, or bump the count of an existing one and keep the
    /// later timestamp. The first title seen for an id is kept.
    pub fn add(&mut self, entry: ParsedEntry) -> Fold {
        if let Some(&slot) = self.index.get(&entry.video_id) {
            let record = &mut self.records[slot];
            record.count += 1;
            record.timestamp = record.timestamp.max(entry.timestamp_ms);
            self.rewatches += 1;
            return Fold::Rewatch;
        }

        self.index.insert(entry.video_id.clone(), self.records.len());
        self.records.push(WatchRecord {
            identifier: entry.video_id,
            timestamp: entry.timestamp_ms,
            title: entry.title,
            count: 1,
        });
        Fold::Inserted
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn rewatches(&self) -> u64 {
        self.rewatches
    }

    pub fn into_records(self) -> Vec<WatchRecord> {
        self.records
    }
}

pub fn convert(entries: &[Value], options: &ConvertOptions) -> ConvertResult<Conversion> {
    info!("processing {} entries", entries.len());

    let mut aggregator = WatchAggregator::new();
    let mut stats = ConvertStats {
        total_entries: entries.len() as u64,
        ..ConvertStats::default()
    };

    for (index, value) in entries.iter().enumerate() {
        let unsupported = |violation| ConvertError::unsupported(index, violation, value);

        let raw = RawEntry::from_value(value).map_err(unsupported)?;
        let parsed = match history::classify(&raw).map_err(unsupported)? {
            EntryKind::Skip(reason) => {
                info!("skipping {reason} entry on {}", raw.time_label());
                stats.skipped.record(&reason);
                continue;
            }
            EntryKind::Legacy => {
                stats.legacy_entries += 1;
                legacy::parse(&raw, options.legacy_timestamps).map_err(unsupported)?
            }
            EntryKind::Watch => standard::parse(&raw).map_err(unsupported)?,
        };

        let video_id = parsed.video_id.clone();
        if aggregator.add(parsed) == Fold::Rewatch {
            debug!("folded rewatch of {video_id}");
        }
    }

    stats.unique_videos = aggregator.len() as u64;
    stats.rewatches = aggregator.rewatches();

    Ok(Conversion {
        records: aggregator.into_records(),
        stats,
    })
}
