//! One-pass assembly of every indicator into a presentation-ready summary.

use log::debug;
use rust_decimal::Decimal;
use serde::Serialize;
use trend_common::Quote;
use trend_common::params::{ABSENT, LONG_PERIOD, SHORT_PERIOD};

use crate::indicators::{
    latest_close, ma50_slope, recent_range, rolling_sma, sma, sorted_by_date, volatility,
};
use crate::signal::{Recommendation, Signal};

/// Chart label format for a quote date.
const LABEL_FORMAT: &str = "%m-%d";

/// Everything the dashboard shows for one symbol.
///
/// Optional fields are `None` when the series is too short to compute them;
/// the series fields are aligned with `labels`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSummary {
    /// Normalized symbol the series belongs to.
    pub symbol: String,
    /// Close of the most recent quote.
    pub latest_close: Option<Decimal>,
    /// 50-day simple moving average.
    pub ma50: Option<Decimal>,
    /// 200-day simple moving average.
    pub ma200: Option<Decimal>,
    /// Crossover label (`BUY`, `HOLD`, `NEUTRAL`) or the placeholder.
    pub signal_label: String,
    /// Presentation class of the crossover.
    pub signal_class: String,
    /// Annualized 14-day volatility, percent.
    pub volatility_percent: Option<Decimal>,
    /// Change of MA50 over the last ten days, percent.
    pub ma50_slope_percent: Option<Decimal>,
    /// Lowest close of the last 30 days.
    pub recent_low: Option<Decimal>,
    /// Highest close of the last 30 days.
    pub recent_high: Option<Decimal>,
    /// Educational recommendation or the placeholder.
    pub recommendation_text: String,
    /// Presentation class of the recommendation.
    pub recommendation_class: String,
    /// `MM-dd` date labels, oldest first.
    pub labels: Vec<String>,
    /// Closes aligned with `labels`.
    pub prices: Vec<Decimal>,
    /// Rolling MA50 aligned with `labels`.
    pub ma50_series: Vec<Option<Decimal>>,
    /// Rolling MA200 aligned with `labels`.
    pub ma200_series: Vec<Option<Decimal>>,
}

/// Compute the full summary for `symbol` from its quote series.
pub fn summarize(symbol: &str, quotes: &[Quote]) -> IndicatorSummary {
    let quotes = sorted_by_date(quotes);

    let ma50 = sma(&quotes, SHORT_PERIOD);
    let ma200 = sma(&quotes, LONG_PERIOD);
    let ma50_series = rolling_sma(&quotes, SHORT_PERIOD);
    let ma200_series = rolling_sma(&quotes, LONG_PERIOD);
    let volatility_percent = volatility(&quotes);
    let ma50_slope_percent = ma50_slope(&ma50_series);
    let range = recent_range(&quotes);

    let signal = Signal::classify(ma50, ma200);
    let recommendation =
        Recommendation::assess(ma50, ma200, ma50_slope_percent, volatility_percent);

    debug!(
        "Summary for {}: {} quotes, signal {:?}, recommendation {:?}",
        symbol,
        quotes.len(),
        signal,
        recommendation
    );

    IndicatorSummary {
        symbol: symbol.to_string(),
        latest_close: latest_close(&quotes),
        ma50,
        ma200,
        signal_label: signal.map_or_else(|| ABSENT.to_string(), |s| s.to_string()),
        signal_class: signal
            .map_or(Signal::ABSENT_CLASS, |s| s.class())
            .to_string(),
        volatility_percent,
        ma50_slope_percent,
        recent_low: range.map(|r| r.low),
        recent_high: range.map(|r| r.high),
        recommendation_text: recommendation.map_or(ABSENT, |r| r.text()).to_string(),
        recommendation_class: recommendation
            .map_or(Recommendation::ABSENT_CLASS, |r| r.class())
            .to_string(),
        labels: quotes
            .iter()
            .map(|q| q.date.format(LABEL_FORMAT).to_string())
            .collect(),
        prices: quotes.iter().map(|q| q.close).collect(),
        ma50_series,
        ma200_series,
    }
}
