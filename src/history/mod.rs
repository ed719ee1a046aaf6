//! # History Module
//!
//! Raw watch-history entries as found in an export, and the classifier that
//! decides which parser (if any) handles each one.

pub mod legacy;
pub mod standard;

use std::fmt;

use serde::Deserialize;

use crate::error::FormatViolation;

/// Title YouTube uses for homepage ad impressions.
pub const AD_VIEW_TITLE: &str = "Viewed Ads On YouTube Homepage";
/// URL fragment of community post views.
pub const COMMUNITY_POST_URL: &str = "https://www.youtube.com/post/";
pub const VISITED_PREFIX: &str = "Visited ";
pub const WATCHED_PREFIX: &str = "Watched ";

/// One element of the exported JSON array. Both export shapes share this
/// struct; which fields are populated decides the shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    pub title: Option<String>,
    pub title_url: Option<String>,
    pub time: Option<String>,
    pub content_details: Option<ContentDetails>,
    pub snippet: Option<Snippet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetails {
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snippet {
    pub title: Option<String>,
}

impl RawEntry {
    pub fn from_value(value: &serde_json::Value) -> Result<Self, FormatViolation> {
        if !value.is_object() {
            return Err(FormatViolation::Malformed(format!(
                "expected an object, found {}",
                crate::export::json_kind(value)
            )));
        }
        Self::deserialize(value).map_err(|err| FormatViolation::Malformed(err.to_string()))
    }

    /// The `time` field for log messages.
    pub fn time_label(&self) -> &str {
        self.time.as_deref().unwrap_or("unknown time")
    }
}

/// A watch event pulled out of one raw entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub video_id: String,
    pub timestamp_ms: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    AdView,
    CommunityPost,
    WebsiteVisit { domain: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::AdView => write!(f, "ad view"),
            SkipReason::CommunityPost => write!(f, "community post view"),
            SkipReason::WebsiteVisit { domain } => write!(f, "website visit (to {domain})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Old playlist-style export with `contentDetails`/`snippet`.
    Legacy,
    /// New-format "Watched ..." entry.
    Watch,
    Skip(SkipReason),
}

/// Classify an entry. Rules are checked in order; the first match wins.
pub fn classify(entry: &RawEntry) -> Result<EntryKind, FormatViolation> {
    if entry.content_details.is_some() {
        return Ok(EntryKind::Legacy);
    }

    let title = entry.title.as_deref();
    if title == Some(AD_VIEW_TITLE) {
        return Ok(EntryKind::Skip(SkipReason::AdView));
    }

    if entry
        .title_url
        .as_deref()
        .is_some_and(|url| url.contains(COMMUNITY_POST_URL))
    {
        return Ok(EntryKind::Skip(SkipReason::CommunityPost));
    }

    let Some(title) = title else {
        return Err(FormatViolation::MissingTitle);
    };

    if title.starts_with(VISITED_PREFIX) {
        let domain = entry
            .title_url
            .as_deref()
            .and_then(visited_domain)
            .unwrap_or("unknown")
            .to_string();
        return Ok(EntryKind::Skip(SkipReason::WebsiteVisit { domain }));
    }

    if !title.starts_with(WATCHED_PREFIX) {
        return Err(FormatViolation::UnexpectedTitle(title.to_string()));
    }

    Ok(EntryKind::Watch)
}

/// Host part of a URL: everything between `://` and the next `/`.
fn visited_domain(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    rest.split('/').next()
}
