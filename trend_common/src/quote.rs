//! Daily closing quote shared by every component.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Closing price of a symbol on one trading day.
///
/// A series holds at most one quote per date; analytics treat it in ascending
/// date order whatever order it arrives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Trading day.
    pub date: NaiveDate,
    /// Closing price, two decimal places, always positive.
    pub close: Decimal,
}

impl Quote {
    /// Create a quote for `date` closing at `close`.
    pub fn new(date: NaiveDate, close: Decimal) -> Self {
        Quote { date, close }
    }
}
