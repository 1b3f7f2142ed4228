//! Reports module for FinanceFlow
//!
//! Presenters over the metrics engine: the full dashboard and the ranked
//! category breakdown.

pub mod breakdown;
pub mod dashboard;

pub use breakdown::{BreakdownReport, BreakdownRow};
pub use dashboard::{format_daily_goal, DashboardReport};
