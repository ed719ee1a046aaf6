//! Converts a YouTube watch-history export into a Watchmarker database.

pub mod cli;
pub mod config;
pub mod convert;
pub mod database;
pub mod error;
pub mod export;
pub mod history;
pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod util;
