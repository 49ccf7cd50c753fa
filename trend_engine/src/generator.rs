//! Synthetic daily quote series.
//!
//! `QuoteSource` is the only way the rest of the system acquires quotes. The
//! demo implementation walks a price randomly from a starting point derived
//! from the symbol itself:
//!
//! - the base price is `|fnv1a(symbol)| % 500 + 20`, so a symbol always starts
//!   from the same price;
//! - each day moves the previous price by a uniform change in `[-1%, +1%]` and
//!   floors it at `1`;
//! - stored closes are rounded to two decimals while the walk itself keeps full
//!   precision;
//! - the last quote is dated "today" and the series is emitted oldest first.

use chrono::{Days, NaiveDate, Utc};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use trend_common::{Quote, Result, TrendError};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Lowest price the walk may reach.
const PRICE_FLOOR: Decimal = dec!(1);
/// Daily change bound in units of 1e-8, i.e. one percent.
const MAX_CHANGE_UNITS: i64 = 1_000_000;
const CHANGE_SCALE: u32 = 8;

/// Provider of daily quote series.
///
/// A real market-data source would report its failures as
/// `TrendError::DataUnavailable`; the demo generator only rejects spans that
/// reach past the earliest representable date.
pub trait QuoteSource {
    /// Return `days` daily quotes for `symbol`, oldest first, ending today.
    ///
    /// `days <= 0` yields an empty series.
    fn get_quotes(&mut self, symbol: &str, days: i64) -> Result<Vec<Quote>>;
}

/// 64-bit FNV-1a over the UTF-8 bytes of `symbol`.
fn fnv1a(symbol: &str) -> u64 {
    symbol.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Starting price of the walk for `symbol`, in `[20, 520)`.
pub fn base_price(symbol: &str) -> Decimal {
    let hash = fnv1a(symbol) as i64;
    Decimal::from(hash.unsigned_abs() % 500 + 20)
}

/// Random-walk quote generator.
pub struct DemoQuoteGenerator {
    rng: StdRng,
}

impl DemoQuoteGenerator {
    /// Create a generator seeded from OS entropy; every run walks differently.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a generator whose walks are fully reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Next walk price: apply a uniform change in `[-1%, +1%]` to `price`.
    fn next_price(&mut self, price: Decimal) -> Decimal {
        let units = self.rng.random_range(-MAX_CHANGE_UNITS..=MAX_CHANGE_UNITS);
        walk_step(price, units)
    }

    /// Generate `days` quotes for `symbol` with the last one dated `today`.
    ///
    /// Empty when `days <= 0` or when the first date would fall outside the
    /// calendar `NaiveDate` can represent.
    pub fn generate(&mut self, symbol: &str, days: i64, today: NaiveDate) -> Vec<Quote> {
        let Some((first, count)) = span(today, days) else {
            if days > 0 {
                warn!("{} days before {} is not a representable date", days, today);
            }
            return Vec::new();
        };
        let start = base_price(symbol);
        let mut quotes = Vec::new();

        let mut price = start;
        for date in first.iter_days().take(count) {
            price = self.next_price(price);
            quotes.push(Quote::new(date, price.round_dp(2)));
        }

        debug!(
            "Generated {} quotes for {} (base {}, last {:?})",
            quotes.len(),
            symbol,
            start,
            quotes.last().map(|q| q.close)
        );
        quotes
    }
}

/// Move `price` by `units` * 1e-8, floored at [`PRICE_FLOOR`].
fn walk_step(price: Decimal, units: i64) -> Decimal {
    let change = Decimal::new(units, CHANGE_SCALE);
    (price + price * change).max(PRICE_FLOOR)
}

/// First date and length of a `days`-long series ending on `today`.
fn span(today: NaiveDate, days: i64) -> Option<(NaiveDate, usize)> {
    let count = u64::try_from(days).ok().filter(|&n| n > 0)?;
    let first = today.checked_sub_days(Days::new(count - 1))?;
    Some((first, usize::try_from(count).ok()?))
}

impl Default for DemoQuoteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteSource for DemoQuoteGenerator {
    fn get_quotes(&mut self, symbol: &str, days: i64) -> Result<Vec<Quote>> {
        let today = Utc::now().date_naive();
        if days > 0 && span(today, days).is_none() {
            return Err(TrendError::Format(format!(
                "cannot generate {} days of quotes ending {}",
                days, today
            )));
        }
        Ok(self.generate(symbol, days, today))
    }
}
