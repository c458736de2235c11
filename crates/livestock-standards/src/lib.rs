#![deny(unsafe_code)]

//! Versioned reference data for livestock preprocessing.
//!
//! The taxonomy lists, the exclusion list and the regional memberships are
//! kept in one TOML artifact (`standards/livestock.toml`) that is embedded
//! at compile time and can be overridden from a file. Every consumer (the
//! preprocessing core, reports, dashboards) reads the same [`Standards`].

pub mod error;
pub mod hash;
pub mod manifest;
pub mod registry;

pub use crate::error::StandardsError;
pub use crate::registry::{
    Region, Standards, StandardsSource, TaxonomyLists, load_default_standards,
    load_standards_from_path, parse_standards,
};
