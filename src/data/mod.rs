//! Data loading and external game content
//!
//! Loads the rules table from an external RON file, allowing balance
//! tweaks without recompiling.

pub mod loader;

pub use loader::{export_default_rules, load_rules, DataError};
