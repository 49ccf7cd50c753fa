//!
//! Common types and utilities shared by the trend engine and its front ends.
//!
//! This crate aggregates:
//! - `error` — unified error type `TrendError` used across the workspace.
//! - `result` — handy `Result<T, TrendError>` alias.
//! - `quote` — the daily closing `Quote` value every component exchanges.
//! - `symbol` — symbol normalization and symbol-file parsing helpers.
//! - `params` — fixed parameters of the indicators and the recommendation heuristic.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod quote;
pub mod symbol;
pub mod params;

pub use error::TrendError;
pub use result::Result;
pub use quote::Quote;
