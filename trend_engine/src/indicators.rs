//! Trend indicators over a daily quote series.
//!
//! Every function sorts its input by date first, so callers may pass quotes in
//! any order. Nothing here fails: a value that needs more history than the
//! series holds is `None`, and so is any value whose computation would divide
//! by zero.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal_macros::dec;
use serde::Serialize;
use trend_common::Quote;
use trend_common::params::{RANGE_WINDOW, SLOPE_LOOKBACK, TRADING_DAYS_PER_YEAR, VOLATILITY_WINDOW};

/// Lowest and highest close over the most recent window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecentRange {
    /// Support: lowest recent close.
    pub low: Decimal,
    /// Resistance: highest recent close.
    pub high: Decimal,
}

/// Copy of `quotes` sorted by ascending date.
pub fn sorted_by_date(quotes: &[Quote]) -> Vec<Quote> {
    let mut sorted = quotes.to_vec();
    sorted.sort_by_key(|q| q.date);
    sorted
}

fn sorted_closes(quotes: &[Quote]) -> Vec<Decimal> {
    sorted_by_date(quotes).into_iter().map(|q| q.close).collect()
}

/// Checked sum; `None` on overflow.
fn checked_sum(values: &[Decimal]) -> Option<Decimal> {
    values
        .iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))
}

/// Mean rounded to two decimals; `None` on overflow.
fn window_mean(window: &[Decimal]) -> Option<Decimal> {
    let mean = checked_sum(window)?.checked_div(Decimal::from(window.len()))?;
    Some(mean.round_dp(2))
}

/// Close of the most recent quote.
pub fn latest_close(quotes: &[Quote]) -> Option<Decimal> {
    quotes.iter().max_by_key(|q| q.date).map(|q| q.close)
}

/// Mean of the last `period` closes, rounded to two decimals.
///
/// `None` when the series is shorter than `period`, `period` is zero, or the
/// window sum overflows.
pub fn sma(quotes: &[Quote], period: usize) -> Option<Decimal> {
    let closes = sorted_closes(quotes);
    if period == 0 || closes.len() < period {
        return None;
    }
    window_mean(&closes[closes.len() - period..])
}

/// Moving average for every day of the series, aligned with the input.
///
/// Entry `i` is the mean of closes `i + 1 - period ..= i`, or `None` while
/// fewer than `period` closes are available.
pub fn rolling_sma(quotes: &[Quote], period: usize) -> Vec<Option<Decimal>> {
    let closes = sorted_closes(quotes);
    (0..closes.len())
        .map(|i| {
            if period == 0 || i + 1 < period {
                None
            } else {
                window_mean(&closes[i + 1 - period..=i])
            }
        })
        .collect()
}

/// Annualized volatility in percent.
///
/// Sample standard deviation of the last 14 daily simple returns, scaled by
/// `sqrt(252) * 100`. Needs 15 closes.
pub fn volatility(quotes: &[Quote]) -> Option<Decimal> {
    let closes = sorted_closes(quotes);
    if closes.len() < VOLATILITY_WINDOW + 1 {
        return None;
    }

    let recent = &closes[closes.len() - VOLATILITY_WINDOW - 1..];
    let returns = recent
        .windows(2)
        .map(|pair| {
            let (prev, cur) = (pair[0], pair[1]);
            if prev.is_zero() {
                None
            } else {
                cur.checked_sub(prev)?.checked_div(prev)
            }
        })
        .collect::<Option<Vec<Decimal>>>()?;

    let mean = checked_sum(&returns)?.checked_div(Decimal::from(returns.len()))?;
    let sum_sq = returns
        .iter()
        .map(|r| r.checked_sub(mean)?.to_f64().map(|d| d * d))
        .sum::<Option<f64>>()?;
    let stdev = (sum_sq / (returns.len() - 1) as f64).sqrt();
    let annualized = stdev * f64::from(TRADING_DAYS_PER_YEAR).sqrt() * 100.0;

    Decimal::from_f64(annualized).map(|v| v.round_dp(2))
}

/// Percent change of a rolling MA50 over the last ten entries.
///
/// `None` with fewer than 11 entries, when either compared value is absent,
/// or when the earlier one is zero.
pub fn ma50_slope(rolling_ma50: &[Option<Decimal>]) -> Option<Decimal> {
    if rolling_ma50.len() < SLOPE_LOOKBACK + 1 {
        return None;
    }
    let last = rolling_ma50.len() - 1;
    let current = rolling_ma50[last]?;
    let earlier = rolling_ma50[last.saturating_sub(SLOPE_LOOKBACK)]?;
    if earlier.is_zero() {
        return None;
    }
    let change = current.checked_sub(earlier)?.checked_div(earlier)?;
    Some(change.checked_mul(dec!(100))?.round_dp(2))
}

/// Support and resistance over the last 30 closes.
pub fn recent_range(quotes: &[Quote]) -> Option<RecentRange> {
    let closes = sorted_closes(quotes);
    if closes.len() < RANGE_WINDOW {
        return None;
    }
    let recent = &closes[closes.len() - RANGE_WINDOW..];
    let low = recent.iter().min().copied()?;
    let high = recent.iter().max().copied()?;
    Some(RecentRange { low, high })
}
