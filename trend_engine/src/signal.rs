//! Moving-average crossover signal and the educational recommendation.
//!
//! Both are classifications of already computed indicators; neither looks at
//! quotes directly. When an input is missing the classification is `None`,
//! and presentation falls back to the placeholder label and neutral styling.

use rust_decimal::Decimal;
use strum_macros::Display;
use trend_common::params::VOLATILITY_CEILING;

/// MA50 versus MA200 crossover state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Signal {
    /// Short average above the long one.
    #[strum(serialize = "BUY")]
    Buy,
    /// Short average below the long one.
    #[strum(serialize = "HOLD")]
    Hold,
    /// Both averages equal.
    #[strum(serialize = "NEUTRAL")]
    Neutral,
}

impl Signal {
    /// Class name used when no signal can be computed.
    pub const ABSENT_CLASS: &'static str = "neutral";

    /// Classify the crossover; `None` unless both averages are known.
    pub fn classify(ma50: Option<Decimal>, ma200: Option<Decimal>) -> Option<Signal> {
        let (short, long) = (ma50?, ma200?);
        Some(match short.cmp(&long) {
            std::cmp::Ordering::Greater => Signal::Buy,
            std::cmp::Ordering::Less => Signal::Hold,
            std::cmp::Ordering::Equal => Signal::Neutral,
        })
    }

    /// Presentation class of the signal.
    pub fn class(&self) -> &'static str {
        match self {
            Signal::Buy => "buy",
            Signal::Hold => "hold",
            Signal::Neutral => "neutral",
        }
    }
}

/// Heuristic reading of trend, slope and volatility together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    /// MA50 above MA200, rising, with moderate volatility.
    StrongUptrend,
    /// MA50 below MA200 and falling.
    Downtrend,
    /// Anything else.
    Mixed,
}

impl Recommendation {
    /// Class name used when no recommendation can be made.
    pub const ABSENT_CLASS: &'static str = "muted";

    /// Assess the four inputs; `None` unless all of them are known.
    ///
    /// An uptrend that is flat, falling or too volatile is `Mixed`.
    pub fn assess(
        ma50: Option<Decimal>,
        ma200: Option<Decimal>,
        slope: Option<Decimal>,
        volatility: Option<Decimal>,
    ) -> Option<Recommendation> {
        let (short, long, slope, volatility) = (ma50?, ma200?, slope?, volatility?);

        let recommendation = if short > long
            && slope > Decimal::ZERO
            && volatility < Decimal::from(VOLATILITY_CEILING)
        {
            Recommendation::StrongUptrend
        } else if short < long && slope < Decimal::ZERO {
            Recommendation::Downtrend
        } else {
            Recommendation::Mixed
        };
        Some(recommendation)
    }

    /// Educational text shown to the user.
    pub fn text(&self) -> &'static str {
        match self {
            Recommendation::StrongUptrend => {
                "Trend appears strong: MA50 above MA200 with positive slope and moderate \
                 volatility. Educational only: study position sizing and risk management \
                 before taking action."
            }
            Recommendation::Downtrend => {
                "Downtrend: MA50 below MA200 and slope negative. Educational only: this \
                 typically argues against initiating long positions; watch for trend \
                 reversal signals."
            }
            Recommendation::Mixed => {
                "Neutral or mixed signals: combine this with other indicators (volume, \
                 momentum) and fundamental research before acting."
            }
        }
    }

    /// Presentation class of the recommendation.
    pub fn class(&self) -> &'static str {
        match self {
            Recommendation::StrongUptrend => "success",
            Recommendation::Downtrend => "warning",
            Recommendation::Mixed => "muted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn crossover_labels() {
        let buy = Signal::classify(Some(dec!(105)), Some(dec!(100))).unwrap();
        assert_eq!(buy.to_string(), "BUY");
        assert_eq!(buy.class(), "buy");

        let hold = Signal::classify(Some(dec!(95)), Some(dec!(100))).unwrap();
        assert_eq!(hold.to_string(), "HOLD");
        assert_eq!(hold.class(), "hold");

        let neutral = Signal::classify(Some(dec!(100.00)), Some(dec!(100))).unwrap();
        assert_eq!(neutral.to_string(), "NEUTRAL");
        assert_eq!(neutral.class(), "neutral");
    }

    #[test]
    fn crossover_needs_both_averages() {
        assert_eq!(Signal::classify(None, Some(dec!(100))), None);
        assert_eq!(Signal::classify(Some(dec!(100)), None), None);
    }

    #[test]
    fn strong_uptrend() {
        let rec = Recommendation::assess(
            Some(dec!(105)),
            Some(dec!(100)),
            Some(dec!(5)),
            Some(dec!(20)),
        );
        assert_eq!(rec, Some(Recommendation::StrongUptrend));
        assert_eq!(rec.unwrap().class(), "success");
    }

    #[test]
    fn downtrend() {
        let rec = Recommendation::assess(
            Some(dec!(95)),
            Some(dec!(100)),
            Some(dec!(-3)),
            Some(dec!(20)),
        );
        assert_eq!(rec, Some(Recommendation::Downtrend));
        assert_eq!(rec.unwrap().class(), "warning");
    }

    #[test]
    fn everything_else_is_mixed() {
        let cases = [
            // uptrend but too volatile
            (dec!(105), dec!(100), dec!(5), dec!(40)),
            // uptrend but flat
            (dec!(105), dec!(100), dec!(0), dec!(20)),
            // uptrend but falling
            (dec!(105), dec!(100), dec!(-1), dec!(20)),
            // below but rising
            (dec!(95), dec!(100), dec!(2), dec!(20)),
            // equal averages
            (dec!(100), dec!(100), dec!(-2), dec!(20)),
        ];
        for (ma50, ma200, slope, vol) in cases {
            let rec = Recommendation::assess(Some(ma50), Some(ma200), Some(slope), Some(vol));
            assert_eq!(rec, Some(Recommendation::Mixed), "{ma50} {ma200} {slope} {vol}");
            assert_eq!(rec.unwrap().class(), "muted");
        }
    }

    #[test]
    fn recommendation_needs_all_inputs() {
        let v = Some(dec!(1));
        assert_eq!(Recommendation::assess(None, v, v, v), None);
        assert_eq!(Recommendation::assess(v, None, v, v), None);
        assert_eq!(Recommendation::assess(v, v, None, v), None);
        assert_eq!(Recommendation::assess(v, v, v, None), None);
    }
}
