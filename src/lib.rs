//! FinanceFlow - personal finance dashboard for the terminal
//!
//! The core of the crate is the financial metrics engine in
//! [`services::metrics`]: pure functions that turn an ordered list of
//! transactions into totals, a balance, same-day spending against a daily
//! goal, and a ranked breakdown of expenses by category.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings (daily goal, currency)
//! - `error`: Custom error types
//! - `models`: Money, transactions, category styles
//! - `services`: Metrics engine, ingestion validation, transactions, CSV import
//! - `storage`: JSON file storage and the sample dataset
//! - `reports`: Dashboard and category breakdown presenters
//! - `display`: Terminal formatting helpers
//! - `export`: JSON/YAML/CSV export
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```
//! use financeflow::models::Money;
//! use financeflow::services::metrics::{balance, expense_breakdown_by_category};
//! use financeflow::storage::sample_transactions;
//!
//! let txns = sample_transactions();
//! assert_eq!(balance(&txns), Money::from_units(2162));
//!
//! let breakdown = expense_breakdown_by_category(&txns);
//! assert_eq!(breakdown[0].category, "Housing");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FlowError, FlowResult};
