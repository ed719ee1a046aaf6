//! Parser for the old playlist-style export (seen in 2016 Takeout archives).
//!
//! Entries look like `{"contentDetails": {"videoId": ...}, "snippet": {"title": ...}}`
//! and carry no watch time, so the timestamp comes from [`LegacyTimestamps`].

use crate::error::FormatViolation;
use crate::history::{ParsedEntry, RawEntry};

/// Timestamp source for legacy entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyTimestamps {
    /// Stamp every legacy entry with this epoch-millisecond value
    /// (usually the time of the conversion run).
    Substitute(i64),
    /// Refuse legacy entries.
    Reject,
}

pub fn parse(entry: &RawEntry, timestamps: LegacyTimestamps) -> Result<ParsedEntry, FormatViolation> {
    let video_id = entry
        .content_details
        .as_ref()
        .and_then(|details| details.video_id.as_deref())
        .filter(|id| !id.trim().is_empty())
        .ok_or(FormatViolation::MissingLegacyVideoId)?;
    let title = entry
        .snippet
        .as_ref()
        .and_then(|snippet| snippet.title.as_deref())
        .ok_or(FormatViolation::MissingLegacyTitle)?;

    let timestamp_ms = match timestamps {
        LegacyTimestamps::Substitute(ms) => ms,
        LegacyTimestamps::Reject => return Err(FormatViolation::LegacyTimestampRejected),
    };

    Ok(ParsedEntry {
        video_id: video_id.to_string(),
        timestamp_ms,
        title: title.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawEntry {
        RawEntry::from_value(&value).expect("raw entry")
    }

    #[test]
    fn substitutes_the_supplied_timestamp() {
        let entry = raw(json!({
            "contentDetails": {"videoId": "dQw4w9WgXcQ"},
            "snippet": {"title": "Never Gonna Give You Up"}
        }));
        let parsed = parse(&entry, LegacyTimestamps::Substitute(1_665_544_742_774)).expect("parse");
        assert_eq!(parsed.video_id, "dQw4w9WgXcQ");
        assert_eq!(parsed.title, "Never Gonna Give You Up");
        assert_eq!(parsed.timestamp_ms, 1_665_544_742_774);
    }

    #[test]
    fn reject_policy_refuses_legacy_entries() {
        let entry = raw(json!({
            "contentDetails": {"videoId": "abc"},
            "snippet": {"title": "t"}
        }));
        assert_eq!(
            parse(&entry, LegacyTimestamps::Reject),
            Err(FormatViolation::LegacyTimestampRejected)
        );
    }

    #[test]
    fn missing_nested_fields_are_violations() {
        let no_id = raw(json!({"contentDetails": {}, "snippet": {"title": "t"}}));
        assert_eq!(
            parse(&no_id, LegacyTimestamps::Substitute(0)),
            Err(FormatViolation::MissingLegacyVideoId)
        );

        let no_snippet = raw(json!({"contentDetails": {"videoId": "abc"}}));
        assert_eq!(
            parse(&no_snippet, LegacyTimestamps::Substitute(0)),
            Err(FormatViolation::MissingLegacyTitle)
        );
    }
}
