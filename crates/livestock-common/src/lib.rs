//! Shared utilities for the livestock preprocessing crates.
//!
//! This crate provides common helpers used across the workspace,
//! mostly for pulling typed values out of Polars frames.

pub mod polars;

pub use polars::{any_to_f64, any_to_string, format_numeric, normalize_key, parse_f64};
