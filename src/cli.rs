use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyTimestampMode {
    /// Stamp legacy entries with the time of the run
    Now,
    /// Abort on legacy entries
    Reject,
    /// Stamp legacy entries with --legacy-fixed-timestamp-ms
    Fixed,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliOptions {
    /// Watch-history export (JSON array)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Database file to write (overwritten if it exists)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Optional path to config file (YAML)
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// How to timestamp legacy entries, which carry no watch time
    #[arg(long, value_enum)]
    pub legacy_timestamps: Option<LegacyTimestampMode>,

    /// Epoch milliseconds used with --legacy-timestamps fixed
    #[arg(long)]
    pub legacy_fixed_timestamp_ms: Option<i64>,

    /// Write the run summary as JSON to this path
    #[arg(long)]
    pub summary_path: Option<PathBuf>,

    /// Number of converted records to echo after the run
    #[arg(long)]
    pub preview: Option<usize>,

    /// Convert and report without writing the database
    #[arg(long)]
    pub dry_run: bool,

    /// Read the written database back and check it decodes to the converted records
    #[arg(long)]
    pub verify: bool,
}

pub fn parse() -> CliOptions {
    CliOptions::parse()
}
