//! Export module for FinanceFlow
//!
//! - CSV: transaction list (spreadsheet-compatible, re-importable)
//! - JSON: machine-readable snapshot of transactions and metrics
//! - YAML: human-readable snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{export_json, import_from_json, Snapshot, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_yaml, import_from_yaml};
