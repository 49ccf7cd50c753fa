//! Error types shared between the engine and its front ends.
//!
//! Indicator computations never fail: missing history is reported as an absent
//! value. `TrendError` covers the edges around them, namely acquiring quotes,
//! reading symbol files and writing reports.
use std::io;

use thiserror::Error;

/// Unified error type shared by every crate in the workspace.
#[derive(Error, Debug)]
pub enum TrendError {
    /// I/O error while reading input files or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Error while parsing a symbols file.
    #[error("Parse symbols file error: {0}")]
    ParseSymbolsFile(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The quote source could not deliver a series for the symbol.
    #[error("Data unavailable for {symbol}: {reason}")]
    DataUnavailable {
        /// Symbol that was requested.
        symbol: String,
        /// Source-specific explanation (network failure, unknown symbol, ...).
        reason: String,
    },
}
