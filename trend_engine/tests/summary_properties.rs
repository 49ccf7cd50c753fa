use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use trend_common::Quote;
use trend_common::params::ABSENT;
use trend_engine::indicators::{rolling_sma, sma};
use trend_engine::{DemoQuoteGenerator, QuoteSource, summarize};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
}

fn linear(len: usize, start: Decimal, step: Decimal) -> Vec<Quote> {
    let first = today() - Days::new(len as u64 - 1);
    (0..len)
        .map(|i| Quote::new(first + Days::new(i as u64), start + step * Decimal::from(i)))
        .collect()
}

#[test]
fn generated_series_satisfies_quote_invariants() {
    let mut generator = DemoQuoteGenerator::with_seed(2024);
    for days in [1, 2, 15, 260] {
        let quotes = generator.generate("AAPL", days, today());
        assert_eq!(quotes.len(), days as usize);
        assert_eq!(quotes.last().unwrap().date, today());
        assert!(quotes.windows(2).all(|p| p[0].date < p[1].date));
        assert!(quotes.iter().all(|q| q.close > Decimal::ZERO));
    }
}

#[test]
fn default_history_fills_every_field() {
    let quotes = DemoQuoteGenerator::with_seed(11)
        .get_quotes("DEMO", 260)
        .unwrap();
    let summary = summarize("DEMO", &quotes);

    assert!(summary.latest_close.is_some());
    assert!(summary.ma50.is_some());
    assert!(summary.ma200.is_some());
    assert!(summary.volatility_percent.is_some());
    assert!(summary.ma50_slope_percent.is_some());
    assert!(summary.recent_low <= summary.recent_high);
    assert_ne!(summary.signal_label, ABSENT);
    assert_ne!(summary.recommendation_text, ABSENT);
    assert_eq!(summary.labels.len(), 260);
    assert_eq!(summary.ma50_series.len(), 260);
    assert_eq!(summary.ma200_series.iter().filter(|v| v.is_none()).count(), 199);
}

#[test]
fn short_history_leaves_long_indicators_absent() {
    let quotes = DemoQuoteGenerator::with_seed(5).generate("DEMO", 60, today());
    let summary = summarize("DEMO", &quotes);

    assert!(summary.ma50.is_some());
    assert_eq!(summary.ma200, None);
    assert_eq!(summary.signal_label, ABSENT);
    assert_eq!(summary.signal_class, "neutral");
    assert_eq!(summary.recommendation_text, ABSENT);
    assert_eq!(summary.recommendation_class, "muted");
    assert!(summary.volatility_percent.is_some());
    assert!(summary.recent_low.is_some());
}

#[test]
fn empty_request_flows_through_as_absent() {
    let quotes = DemoQuoteGenerator::with_seed(5).get_quotes("DEMO", 0).unwrap();
    let summary = summarize("DEMO", &quotes);
    assert_eq!(summary.latest_close, None);
    assert_eq!(summary.volatility_percent, None);
    assert_eq!(summary.recent_low, None);
    assert!(summary.prices.is_empty());
}

#[test]
fn rolling_average_starts_where_the_single_average_does() {
    let quotes = DemoQuoteGenerator::with_seed(8).generate("MSFT", 120, today());
    let rolling = rolling_sma(&quotes, 50);
    assert!(rolling[..49].iter().all(Option::is_none));
    assert_eq!(rolling[49], sma(&quotes[..50], 50));
    assert_eq!(*rolling.last().unwrap(), sma(&quotes, 50));
}

#[test]
fn steady_climb_reads_as_strong_uptrend() {
    let summary = summarize("UP", &linear(260, dec!(100), dec!(0.10)));
    assert_eq!(summary.signal_label, "BUY");
    assert_eq!(summary.signal_class, "buy");
    assert!(summary.ma50_slope_percent.unwrap() > Decimal::ZERO);
    assert!(summary.volatility_percent.unwrap() < dec!(40));
    assert_eq!(summary.recommendation_class, "success");
}

#[test]
fn steady_decline_reads_as_downtrend() {
    let summary = summarize("DOWN", &linear(260, dec!(200), dec!(-0.50)));
    assert_eq!(summary.signal_label, "HOLD");
    assert_eq!(summary.signal_class, "hold");
    assert_eq!(summary.recommendation_class, "warning");
}

#[test]
fn flat_series_is_neutral_and_mixed() {
    let summary = summarize("FLAT", &linear(260, dec!(50), Decimal::ZERO));
    assert_eq!(summary.signal_label, "NEUTRAL");
    assert_eq!(summary.volatility_percent, Some(dec!(0)));
    assert_eq!(summary.ma50_slope_percent, Some(dec!(0)));
    assert_eq!(summary.recommendation_class, "muted");
    assert_ne!(summary.recommendation_text, ABSENT);
    assert_eq!(summary.recent_low, Some(dec!(50)));
    assert_eq!(summary.recent_high, Some(dec!(50)));
}

#[test]
fn summarize_is_idempotent() {
    let quotes = DemoQuoteGenerator::with_seed(99).generate("IDEM", 260, today());
    assert_eq!(summarize("IDEM", &quotes), summarize("IDEM", &quotes));
}

#[test]
fn summary_serializes_absent_values_as_null() {
    let quotes = linear(3, dec!(10), dec!(1));
    let json = serde_json::to_value(summarize("TINY", &quotes)).unwrap();
    assert_eq!(json["symbol"], "TINY");
    assert!(json["ma50"].is_null());
    assert!(json["ma50Series"][0].is_null());
    assert_eq!(json["labels"][2], "06-30");
    assert_eq!(json["latestClose"], 12.0);
}
