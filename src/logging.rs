//! Tracing subscriber setup.
//!
//! `RUST_LOG` filters as usual (default `info`); `RUST_LOG_FORMAT=json`
//! switches to one JSON object per line. Output goes to stderr.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber. Later calls are no-ops.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let is_json = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if is_json {
        let _ = subscriber.json().try_init();
    } else {
        let _ = subscriber.try_init();
    }
}
