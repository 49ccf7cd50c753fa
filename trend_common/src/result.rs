//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `TrendError`, so functions can simply return `Result<T>`.
use crate::error::TrendError;

/// Workspace-wide `Result` alias with `TrendError` as the default error.
pub type Result<T, E = TrendError> = std::result::Result<T, E>;
