//! Synthetic quote generation and trend indicators.
//!
//! - `generator` — the `QuoteSource` boundary and the seeded random-walk
//!   `DemoQuoteGenerator` behind it.
//! - `indicators` — moving averages, volatility, slope and recent range.
//! - `signal` — MA crossover signal and the educational recommendation.
//! - `summary` — `summarize`, which assembles everything into an
//!   `IndicatorSummary` for presentation.
#![warn(missing_docs)]
pub mod generator;
pub mod indicators;
pub mod signal;
pub mod summary;

pub use generator::{DemoQuoteGenerator, QuoteSource};
pub use summary::{IndicatorSummary, summarize};
