//! Text and JSON rendering of indicator summaries.
//!
//! Absent values are always printed as the placeholder, never as zero.
use rust_decimal::Decimal;
use std::io::Write;
use trend_common::Result;
use trend_common::params::ABSENT;
use trend_engine::IndicatorSummary;

fn value(v: Option<Decimal>) -> String {
    v.map_or_else(|| ABSENT.to_string(), |d| format!("{:.2}", d))
}

fn percent(v: Option<Decimal>, signed: bool) -> String {
    match v {
        Some(d) if signed => format!("{:+.2}%", d),
        Some(d) => format!("{:.2}%", d),
        None => ABSENT.to_string(),
    }
}

/// Write a human-readable block for `summary`.
pub fn write_text<W: Write>(out: &mut W, summary: &IndicatorSummary) -> Result<()> {
    let period = match (summary.labels.first(), summary.labels.last()) {
        (Some(first), Some(last)) => format!("{} .. {}", first, last),
        _ => "no data".to_string(),
    };
    let range = match (summary.recent_low, summary.recent_high) {
        (Some(low), Some(high)) => format!("{:.2} - {:.2}", low, high),
        _ => ABSENT.to_string(),
    };

    writeln!(out, "{} ({} days, {})", summary.symbol, summary.prices.len(), period)?;
    writeln!(out, "  Latest close    {}", value(summary.latest_close))?;
    writeln!(out, "  MA50            {}", value(summary.ma50))?;
    writeln!(out, "  MA200           {}", value(summary.ma200))?;
    writeln!(out, "  Signal          {} [{}]", summary.signal_label, summary.signal_class)?;
    writeln!(out, "  Volatility      {}", percent(summary.volatility_percent, false))?;
    writeln!(out, "  MA50 slope      {}", percent(summary.ma50_slope_percent, true))?;
    writeln!(out, "  30-day range    {}", range)?;
    writeln!(
        out,
        "  Recommendation  [{}] {}",
        summary.recommendation_class, summary.recommendation_text
    )?;
    Ok(())
}

/// Write `summary` as a single JSON line.
pub fn write_json<W: Write>(out: &mut W, summary: &IndicatorSummary) -> Result<()> {
    serde_json::to_writer(&mut *out, summary)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use rust_decimal_macros::dec;
    use trend_common::Quote;
    use trend_engine::summarize;

    fn rendered(summary: &IndicatorSummary) -> String {
        let mut buf = Vec::new();
        write_text(&mut buf, summary).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn absent_values_render_as_placeholder() {
        let text = rendered(&summarize("DEMO", &[]));
        assert!(text.starts_with("DEMO (0 days, no data)"));
        assert!(text.contains("MA200           —"));
        assert!(text.contains("Volatility      —"));
        assert!(text.contains("30-day range    —"));
        assert!(text.contains("[muted] —"));
    }

    #[test]
    fn present_values_render_with_two_decimals() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let quotes: Vec<Quote> = (0..30)
            .map(|i| Quote::new(start + Days::new(i), dec!(10) + Decimal::from(i)))
            .collect();
        let text = rendered(&summarize("ABC", &quotes));
        assert!(text.starts_with("ABC (30 days, 01-01 .. 01-30)"));
        assert!(text.contains("Latest close    39.00"));
        assert!(text.contains("30-day range    10.00 - 39.00"));
        assert!(text.contains("MA50            —"));
    }

    #[test]
    fn json_is_one_line() {
        let mut buf = Vec::new();
        write_json(&mut buf, &summarize("DEMO", &[])).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert_eq!(line.matches('\n').count(), 1);
        assert!(line.contains(r#""signalLabel":"—""#));
    }
}
