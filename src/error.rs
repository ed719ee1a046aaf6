use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

/// An entry shape that no known export variant produces.
///
/// These are never skipped: they mean the export format has changed and the
/// converter needs a code change.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatViolation {
    #[error("entry is not a JSON object with the expected fields: {0}")]
    Malformed(String),

    #[error("title not in entry")]
    MissingTitle,

    #[error("titleUrl not in entry")]
    MissingTitleUrl,

    #[error("unexpected value for key 'title', expected it to begin with 'Watched': {0:?}")]
    UnexpectedTitle(String),

    #[error("video id couldn't be parsed from URL {0:?}")]
    VideoIdNotFound(String),

    #[error("title or video id is empty")]
    EmptyTitleOrVideoId,

    #[error("time not in entry")]
    MissingTime,

    #[error("invalid time {value:?}: {reason}")]
    InvalidTime { value: String, reason: String },

    #[error("contentDetails.videoId not in legacy entry")]
    MissingLegacyVideoId,

    #[error("snippet.title not in legacy entry")]
    MissingLegacyTitle,

    #[error("legacy entries carry no watch time and the legacy timestamp policy is 'reject'")]
    LegacyTimestampRejected,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("json failure: {0}")]
    Json(#[from] serde_json::Error),

    #[error("base64 failure: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("export root is not a JSON array (found {0})")]
    NotAnArray(&'static str),

    #[error("unsupported entry at index {index}: {violation}. Please file a bug report!")]
    UnsupportedEntry {
        index: usize,
        violation: FormatViolation,
        entry: Box<serde_json::Value>,
    },
}

impl ConvertError {
    #[must_use]
    pub fn unsupported(index: usize, violation: FormatViolation, entry: &serde_json::Value) -> Self {
        Self::UnsupportedEntry {
            index,
            violation,
            entry: Box::new(entry.clone()),
        }
    }

    /// The raw entry that caused a format violation, if any.
    pub fn offending_entry(&self) -> Option<&serde_json::Value> {
        match self {
            Self::UnsupportedEntry { entry, .. } => Some(entry),
            _ => None,
        }
    }
}
