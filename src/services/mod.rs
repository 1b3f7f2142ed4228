//! Business logic layer for FinanceFlow
//!
//! - `metrics`: the financial metrics engine (pure functions)
//! - `ingest`: validation at the data-ingestion boundary
//! - `transaction`: creating and listing stored transactions
//! - `import`: CSV import

pub mod import;
pub mod ingest;
pub mod metrics;
pub mod transaction;

pub use import::{import_csv, parse_csv, ImportOptions, ImportResult, RowError};
pub use ingest::{ingest_records, validate_record, TransactionRecord};
pub use metrics::{
    balance, daily_goal_progress, expense_breakdown_by_category, is_over_daily_goal,
    largest_expense_category, same_day_expense_total, total_by_kind, CategoryTotal,
    DashboardMetrics,
};
pub use transaction::{CreateTransactionInput, TransactionFilter, TransactionService};
