//! Command-line arguments for the trend report.
//!
//! This module defines the CLI interface using `clap`. Every option can also be
//! supplied through a `TREND_*` environment variable. See `main` for end-to-end usage.
use clap::{Parser, ValueEnum};
use strum_macros::Display;
use trend_common::params::DEFAULT_DAYS;

/// How summaries are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report, one block per symbol.
    Text,
    /// One JSON object per line.
    Json,
}

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Symbol to analyze. Repeat the flag or separate with commas.
    /// A blank symbol means the default demo symbol.
    #[clap(long, env = "TREND_SYMBOL", value_delimiter = ',')]
    pub symbol: Vec<String>,

    /// Path to a text file with more symbols.
    /// Symbols may be separated by commas, spaces, or new lines.
    #[clap(long)]
    pub path: Option<String>,

    /// Number of daily quotes to generate per symbol.
    #[clap(long, env = "TREND_DAYS", default_value_t = DEFAULT_DAYS, allow_negative_numbers = true)]
    pub days: i64,

    /// Output format.
    #[clap(long, env = "TREND_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Seed for the random walk; omit for a different series on every run.
    #[clap(long, env = "TREND_SEED")]
    pub seed: Option<u64>,
}
