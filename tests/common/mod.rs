//! Shared helpers for conversion integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use watchmark_convert::config::{self, Config};
use watchmark_convert::pipeline::RunOptions;

/// Wall-clock time handed to runs that need one.
pub const NOW_MS: i64 = 1_700_000_000_000;

pub fn watched(id: &str, title: &str, time: &str) -> Value {
    json!({
        "header": "YouTube",
        "title": format!("Watched {title}"),
        "titleUrl": format!("https://www.youtube.com/watch?v={id}"),
        "subtitles": [{"name": "Some Channel", "url": "https://www.youtube.com/channel/UC123"}],
        "time": time,
        "products": ["YouTube"],
        "activityControls": ["YouTube watch history"]
    })
}

pub fn music(id: &str, title: &str, time: &str) -> Value {
    json!({
        "header": "YouTube Music",
        "title": format!("Watched {title}"),
        "titleUrl": format!("https://music.youtube.com/watch?v={id}&list=RDAMVM{id}"),
        "time": time
    })
}

pub fn ad_view(time: &str) -> Value {
    json!({
        "header": "YouTube",
        "title": "Viewed Ads On YouTube Homepage",
        "time": time
    })
}

pub fn legacy(id: &str, title: &str) -> Value {
    json!({
        "kind": "youtube#playlistItem",
        "snippet": {"title": title, "playlistId": "HL"},
        "contentDetails": {"videoId": id}
    })
}

pub fn write_export(dir: &Path, entries: &[Value]) -> PathBuf {
    let path = dir.join("watch-history.json");
    fs::write(&path, serde_json::to_vec_pretty(entries).expect("json")).expect("write export");
    path
}

/// Default config pointed at files inside `dir`.
pub fn config_in(dir: &Path) -> (Config, String) {
    let loaded = config::load_config(None).expect("config");
    let mut cfg = loaded.config;
    cfg.run_id = "integration".to_string();
    cfg.input_path = dir.join("watch-history.json");
    cfg.output_path = dir.join("watch-history.converted.database");
    (cfg, loaded.config_hash)
}

pub fn run_options() -> RunOptions {
    RunOptions {
        now_ms: NOW_MS,
        ..RunOptions::default()
    }
}
