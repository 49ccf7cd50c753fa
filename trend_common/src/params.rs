//! Fixed parameters of the indicators and of the recommendation heuristic.
//!
//! These are constants of the model, not settings: changing one changes what
//! the summary means.

/// Symbol used when the caller supplies a blank one.
pub const DEFAULT_SYMBOL: &str = "DEMO";
/// Number of daily quotes requested by default (enough history for MA200).
pub const DEFAULT_DAYS: i64 = 260;

/// Short moving-average period.
pub const SHORT_PERIOD: usize = 50;
/// Long moving-average period.
pub const LONG_PERIOD: usize = 200;

/// Number of daily returns the volatility is measured over.
pub const VOLATILITY_WINDOW: usize = 14;
/// Approximate trading days per year, used to annualize volatility.
pub const TRADING_DAYS_PER_YEAR: u32 = 252;
/// Annualized volatility (percent) below which a trend counts as calm.
pub const VOLATILITY_CEILING: u32 = 40;

/// Distance, in entries, between the two MA50 values compared by the slope.
pub const SLOPE_LOOKBACK: usize = 10;

/// Number of most recent closes scanned for support and resistance.
pub const RANGE_WINDOW: usize = 30;

/// Placeholder shown for a value that cannot be computed.
pub const ABSENT: &str = "—";
