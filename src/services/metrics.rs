//! Financial metrics engine
//!
//! Pure functions over an ordered slice of transactions. Nothing here
//! allocates state that outlives a call, mutates its input, or fails:
//! an empty slice simply yields zero totals and an empty breakdown.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Money, Transaction, TransactionKind};

/// Expense total for one category, with its share of all expenses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// Category label as found on the transactions
    pub category: String,
    /// Sum of expense amounts in this category
    pub total: Money,
    /// `total / total expenses`, or 0.0 when there are no expenses
    pub share: f64,
    /// Number of expense transactions in this category
    pub transaction_count: usize,
}

impl CategoryTotal {
    /// Share expressed as a percentage
    pub fn percentage(&self) -> f64 {
        self.share * 100.0
    }
}

/// Sum of amounts over the transactions of one kind
pub fn total_by_kind(transactions: &[Transaction], kind: TransactionKind) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Total income minus total expenses; may be negative
pub fn balance(transactions: &[Transaction]) -> Money {
    transactions.iter().map(Transaction::signed_amount).sum()
}

/// Sum of expenses that occurred on `reference_date`
///
/// Comparison is by calendar day. Callers wanting "today" pass the local
/// date, e.g. `chrono::Local::now().date_naive()`.
pub fn same_day_expense_total(transactions: &[Transaction], reference_date: NaiveDate) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense() && t.occurred_on_day(reference_date))
        .map(|t| t.amount)
        .sum()
}

/// Whether a day's spending exceeds the goal (strictly greater)
pub fn is_over_daily_goal(same_day_total: Money, daily_goal: Money) -> bool {
    same_day_total > daily_goal
}

/// Percentage of the daily goal consumed, clamped to `0..=100`
///
/// A zero goal counts as fully consumed as soon as anything is spent.
pub fn daily_goal_progress(same_day_total: Money, daily_goal: Money) -> f64 {
    if !daily_goal.is_positive() {
        return if same_day_total.is_positive() { 100.0 } else { 0.0 };
    }

    let pct = same_day_total.cents() as f64 / daily_goal.cents() as f64 * 100.0;
    pct.clamp(0.0, 100.0)
}

/// Expense totals grouped by category, largest first
///
/// Grouping is by exact (case-sensitive) category label. Entries are sorted
/// by total descending; equal totals are ordered by category name ascending.
/// Every share is 0.0 when total expenses are zero.
pub fn expense_breakdown_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut groups: HashMap<&str, (Money, usize)> = HashMap::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        let entry = groups
            .entry(txn.category.as_str())
            .or_insert((Money::zero(), 0));
        entry.0 += txn.amount;
        entry.1 += 1;
    }

    let total_expenses: Money = groups.values().map(|(total, _)| *total).sum();

    let mut breakdown: Vec<CategoryTotal> = groups
        .into_iter()
        .map(|(category, (total, count))| CategoryTotal {
            category: category.to_string(),
            total,
            share: share_of(total, total_expenses),
            transaction_count: count,
        })
        .collect();

    breakdown.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.category.cmp(&b.category))
    });

    breakdown
}

/// The category with the highest expense total, if any
pub fn largest_expense_category(breakdown: &[CategoryTotal]) -> Option<&CategoryTotal> {
    breakdown.first()
}

fn share_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        part.cents() as f64 / whole.cents() as f64
    }
}

/// Every dashboard figure derived from one transaction slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub reference_date: NaiveDate,
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
    pub same_day_expenses: Money,
    pub daily_goal: Money,
    pub over_daily_goal: bool,
    pub daily_goal_progress: f64,
    pub breakdown: Vec<CategoryTotal>,
}

impl DashboardMetrics {
    /// Recompute all metrics for a reference day and goal
    pub fn compute(
        transactions: &[Transaction],
        reference_date: NaiveDate,
        daily_goal: Money,
    ) -> Self {
        let total_income = total_by_kind(transactions, TransactionKind::Income);
        let total_expenses = total_by_kind(transactions, TransactionKind::Expense);
        let same_day_expenses = same_day_expense_total(transactions, reference_date);
        let over_daily_goal = is_over_daily_goal(same_day_expenses, daily_goal);

        if over_daily_goal {
            tracing::debug!(
                spent = %same_day_expenses,
                goal = %daily_goal,
                date = %reference_date,
                "Daily goal exceeded"
            );
        }

        Self {
            reference_date,
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            same_day_expenses,
            daily_goal,
            over_daily_goal,
            daily_goal_progress: daily_goal_progress(same_day_expenses, daily_goal),
            breakdown: expense_breakdown_by_category(transactions),
        }
    }

    /// The category driving the "largest expense" warning
    pub fn largest_expense_category(&self) -> Option<&CategoryTotal> {
        largest_expense_category(&self.breakdown)
    }
}
