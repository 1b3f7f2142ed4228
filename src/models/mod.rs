//! Core data models for FinanceFlow
//!
//! Transactions, the money type they are measured in, and the category
//! style table used by presenters.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::{style_for, CategoryStyle, FALLBACK_STYLE};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind, MAX_AMOUNT};
