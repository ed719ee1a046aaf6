//! # Database Module
//!
//! Watchmarker database files are a base64 (standard alphabet, padded)
//! encoding of a compact JSON array of [`WatchRecord`]s.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::convert::WatchRecord;
use crate::error::ConvertResult;

pub fn encode_records(records: &[WatchRecord]) -> ConvertResult<String> {
    let json = serde_json::to_vec(records)?;
    Ok(STANDARD.encode(json))
}

pub fn decode_records(encoded: &str) -> ConvertResult<Vec<WatchRecord>> {
    let json = STANDARD.decode(encoded.trim())?;
    Ok(serde_json::from_slice(&json)?)
}

/// Encode `records` and write them to `path`, replacing any existing file.
/// Returns the number of bytes written.
pub fn write_database(path: &Path, records: &[WatchRecord]) -> ConvertResult<u64> {
    let encoded = encode_records(records)?;
    std::fs::write(path, encoded.as_bytes())?;
    Ok(encoded.len() as u64)
}

pub fn read_database(path: &Path) -> ConvertResult<Vec<WatchRecord>> {
    let encoded = std::fs::read_to_string(path)?;
    decode_records(&encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use tempfile::tempdir;

    fn record(id: &str, ts: i64, title: &str, count: u64) -> WatchRecord {
        WatchRecord {
            identifier: id.to_string(),
            timestamp: ts,
            title: title.to_string(),
            count,
        }
    }

    #[test]
    fn encodes_the_expected_payload() {
        let encoded = encode_records(&[record("abc123", 1_700_340_664_917, "X", 1)]).expect("encode");
        let json = STANDARD.decode(&encoded).expect("base64");
        assert_eq!(
            String::from_utf8(json).expect("utf8"),
            r#"[{"strIdent":"abc123","intTimestamp":1700340664917,"strTitle":"X","intCount":1}]"#
        );
    }

    #[test]
    fn non_ascii_titles_are_utf8_encoded() {
        let encoded = encode_records(&[record("v", 1, "Café ☕", 1)]).expect("encode");
        let json = STANDARD.decode(&encoded).expect("base64");
        assert!(String::from_utf8(json).expect("utf8").contains("Café ☕"));
    }

    #[test]
    fn write_overwrites_and_reads_back_in_order() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("watch-history.converted.database");
        std::fs::write(&path, "stale contents that are much longer than the new file").expect("seed");

        let records = vec![record("b", 2, "second", 3), record("a", 1, "first", 1)];
        let written = write_database(&path, &records).expect("write");
        assert_eq!(written, std::fs::metadata(&path).expect("meta").len());
        assert_eq!(read_database(&path).expect("read"), records);
    }

    #[test]
    fn empty_history_encodes_an_empty_array() {
        let encoded = encode_records(&[]).expect("encode");
        assert_eq!(encoded, STANDARD.encode("[]"));
        assert!(decode_records(&encoded).expect("decode").is_empty());
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = decode_records("not base64!").expect_err("invalid");
        assert!(matches!(err, ConvertError::Decode(_)));
    }
}
