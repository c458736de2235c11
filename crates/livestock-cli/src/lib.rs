//! CLI library components for the livestock preprocessor.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
