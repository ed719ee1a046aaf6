//! Parser for the current Takeout export format:
//! `{"title": "Watched ...", "titleUrl": "https://www.youtube.com/watch?v=...", "time": "..."}`.

use chrono::DateTime;

use crate::error::FormatViolation;
use crate::history::{ParsedEntry, RawEntry, WATCHED_PREFIX};

const WATCH_URL_PREFIXES: [&str; 2] = [
    "https://www.youtube.com/watch?v=",
    "https://music.youtube.com/watch?v=",
];

pub fn parse(entry: &RawEntry) -> Result<ParsedEntry, FormatViolation> {
    let title = entry.title.as_deref().ok_or(FormatViolation::MissingTitle)?;
    let url = entry
        .title_url
        .as_deref()
        .ok_or(FormatViolation::MissingTitleUrl)?;

    let title = title
        .strip_prefix(WATCHED_PREFIX)
        .ok_or_else(|| FormatViolation::UnexpectedTitle(title.to_string()))?;
    let video_id =
        video_id_from_url(url).ok_or_else(|| FormatViolation::VideoIdNotFound(url.to_string()))?;

    if title.trim().is_empty() || video_id.trim().is_empty() {
        return Err(FormatViolation::EmptyTitleOrVideoId);
    }

    let time = entry.time.as_deref().ok_or(FormatViolation::MissingTime)?;
    let timestamp_ms = parse_time_ms(time)?;

    Ok(ParsedEntry {
        video_id: video_id.to_string(),
        timestamp_ms,
        title: title.to_string(),
    })
}

/// Video id from a watch URL: the `v` value up to the next `&`.
pub fn video_id_from_url(url: &str) -> Option<&str> {
    WATCH_URL_PREFIXES.iter().find_map(|prefix| {
        let (_, rest) = url.split_once(prefix)?;
        rest.split('&').next()
    })
}

/// RFC 3339 time to epoch milliseconds. Sub-millisecond digits are truncated
/// toward zero, also for times before 1970.
pub fn parse_time_ms(time: &str) -> Result<i64, FormatViolation> {
    DateTime::parse_from_rfc3339(time)
        .map(|dt| {
            let nanos = i128::from(dt.timestamp()) * 1_000_000_000
                + i128::from(dt.timestamp_subsec_nanos());
            (nanos / 1_000_000) as i64
        })
        .map_err(|err| FormatViolation::InvalidTime {
            value: time.to_string(),
            reason: err.to_string(),
        })
}
