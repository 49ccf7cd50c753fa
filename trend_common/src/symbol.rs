//! Symbol normalization and symbol-file parsing.
//!
//! Front ends accept symbols typed by users or read from files; both paths end
//! in `normalize_symbol` so the engine always sees the same canonical form.

use log::warn;
use std::io::BufRead;

use crate::error::TrendError;
use crate::params::DEFAULT_SYMBOL;

/// Canonical form of a user-supplied symbol.
///
/// Surrounding whitespace and a pair of matching quotes are stripped, the rest
/// is uppercased. A blank input maps to [`DEFAULT_SYMBOL`].
pub fn normalize_symbol(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
        .trim();
    if unquoted.is_empty() {
        return DEFAULT_SYMBOL.to_string();
    }
    unquoted.to_uppercase()
}

/// Parses symbols from a buffered reader.
///
/// Symbols may be separated by commas, whitespace or new lines; empty tokens
/// are skipped. A token containing anything but ASCII alphanumerics, `.`, `-`
/// or `^` is rejected.
pub fn parse_symbols<R: BufRead>(reader: R) -> Result<Vec<String>, TrendError> {
    let mut symbols = Vec::new();

    for (line_no, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(TrendError::Io)?;
        for token in line.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            let symbol = normalize_symbol(token);
            if !symbol
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^'))
            {
                return Err(TrendError::ParseSymbolsFile(format!(
                    "line {}: invalid symbol {:?}",
                    line_no + 1,
                    token
                )));
            }
            if symbol == DEFAULT_SYMBOL && !token.eq_ignore_ascii_case(DEFAULT_SYMBOL) {
                warn!("Token {:?} on line {} normalized to {}", token, line_no + 1, symbol);
            }
            symbols.push(symbol);
        }
    }
    Ok(symbols)
}
