//! Trend CLI — prints an educational trend report for one or more symbols.
//!
//! Each symbol gets its own synthetic daily series from the demo quote source
//! and its own indicator summary; symbols are never compared with each other.
//!
//! Usage example (CLI):
//! ```bash
//! trend_cli --symbol aapl,msft --days 260 --format json --seed 7
//! trend_cli --path ./symbols.txt
//! ```
//!
//! The symbol file should contain symbols separated by commas, spaces, or new lines.
//! Output is advisory only; nothing here is investment advice.
#![warn(missing_docs)]
mod args;
mod render;

use crate::args::{Args, OutputFormat};
use clap::Parser;
use log::{info, warn};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use trend_common::params::DEFAULT_SYMBOL;
use trend_common::symbol::{normalize_symbol, parse_symbols};
use trend_common::{Result, TrendError};
use trend_engine::{DemoQuoteGenerator, QuoteSource, summarize};

fn main() -> Result<(), TrendError> {
    init_logger();
    let args = Args::parse();

    let symbols = collect_symbols(&args.symbol, args.path.as_deref())?;
    info!("Writing {} report for {} symbol(s)", args.format, symbols.len());
    if args.days <= 0 {
        warn!("--days={} requests no history; every indicator will be absent", args.days);
    }

    let mut source = match args.seed {
        Some(seed) => DemoQuoteGenerator::with_seed(seed),
        None => DemoQuoteGenerator::new(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report(&mut source, &symbols, args.days, args.format, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Fetch, summarize and render every symbol in order.
fn report<S: QuoteSource, W: Write>(
    source: &mut S,
    symbols: &[String],
    days: i64,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    for (i, symbol) in symbols.iter().enumerate() {
        let quotes = source.get_quotes(symbol, days)?;
        info!("Fetched {} quotes for {}", quotes.len(), symbol);
        let summary = summarize(symbol, &quotes);
        match format {
            OutputFormat::Text => {
                if i > 0 {
                    writeln!(out)?;
                }
                render::write_text(out, &summary)?;
            }
            OutputFormat::Json => render::write_json(out, &summary)?,
        }
    }
    Ok(())
}

/// Normalized symbols from the flags and the optional file, first occurrence wins.
fn collect_symbols(flags: &[String], path: Option<&str>) -> Result<Vec<String>> {
    let mut symbols: Vec<String> = flags.iter().map(|s| normalize_symbol(s)).collect();

    if let Some(raw) = path {
        let file_path = normalize_path(raw);
        if !is_file_exist(&file_path) {
            return Err(TrendError::Format(format!(
                "symbols file not found: {}",
                file_path.display()
            )));
        }
        let file = File::open(&file_path)?;
        let from_file = parse_symbols(BufReader::new(file))?;
        info!("Symbols from {}: {:?}", file_path.display(), from_file);
        symbols.extend(from_file);
    }

    if symbols.is_empty() {
        symbols.push(DEFAULT_SYMBOL.to_string());
    }
    let mut seen = HashSet::new();
    symbols.retain(|s| seen.insert(s.clone()));
    Ok(symbols)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Returns `true` if the provided path exists and is a regular file.
fn is_file_exist(path: &PathBuf) -> bool {
    path.exists() && path.is_file()
}
