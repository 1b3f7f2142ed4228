//! Category Breakdown Report
//!
//! Ranks expense categories by total ("where you are losing money").

use std::io::Write;

use serde::Serialize;

use crate::config::Settings;
use crate::error::{FlowError, FlowResult};
use crate::models::{style_for, CategoryStyle, Money, Transaction, TransactionKind};
use crate::services::metrics::{expense_breakdown_by_category, total_by_kind, CategoryTotal};

/// One ranked category with its presentation style
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownRow {
    /// 1-based rank
    pub rank: usize,
    #[serde(flatten)]
    pub total: CategoryTotal,
    pub style: CategoryStyle,
}

impl BreakdownRow {
    /// The top-ranked row carries the "largest expense" warning
    pub fn is_largest(&self) -> bool {
        self.rank == 1
    }
}

/// Ranked breakdown of expenses by category
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownReport {
    pub rows: Vec<BreakdownRow>,
    pub total_expenses: Money,
}

impl BreakdownReport {
    /// Build the report from a transaction slice
    pub fn generate(transactions: &[Transaction]) -> Self {
        Self::from_breakdown(
            expense_breakdown_by_category(transactions),
            total_by_kind(transactions, TransactionKind::Expense),
        )
    }

    /// Wrap an already computed breakdown
    pub fn from_breakdown(breakdown: Vec<CategoryTotal>, total_expenses: Money) -> Self {
        let rows = breakdown
            .into_iter()
            .enumerate()
            .map(|(i, total)| BreakdownRow {
                rank: i + 1,
                style: style_for(&total.category),
                total,
            })
            .collect();

        Self {
            rows,
            total_expenses,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn largest(&self) -> Option<&BreakdownRow> {
        self.rows.first()
    }

    /// Keep only the `limit` highest-ranked rows
    ///
    /// `total_expenses` still covers every category, so shares are unchanged.
    pub fn top(mut self, limit: usize) -> Self {
        self.rows.truncate(limit);
        self
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        if self.rows.is_empty() {
            return "No expenses recorded.\n".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!(
            "{:<4} {:<20} {:>14} {:>7} {:>6}  {}\n",
            "#", "Category", "Amount", "Share", "Count", "Bar"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<4} {:<20} {:>14} {:>6.1}% {:>6}  {}\n",
                row.rank,
                crate::display::transaction::truncate(&row.total.category, 20),
                settings.format_money(row.total.total),
                row.total.percentage(),
                row.total.transaction_count,
                bar(row.total.share, 15)
            ));
            if row.is_largest() {
                output.push_str("     ! Your largest expense!\n");
            }
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<4} {:<20} {:>14}\n",
            "",
            "TOTAL",
            settings.format_money(self.total_expenses)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> FlowResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(["rank", "category", "amount", "share", "transaction_count"])
            .map_err(|e| FlowError::Export(e.to_string()))?;

        for row in &self.rows {
            csv_writer
                .write_record([
                    row.rank.to_string(),
                    row.total.category.clone(),
                    row.total.total.to_string(),
                    format!("{:.4}", row.total.share),
                    row.total.transaction_count.to_string(),
                ])
                .map_err(|e| FlowError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| FlowError::Export(e.to_string()))?;
        Ok(())
    }
}

/// Horizontal bar for a share in `0..=1`
fn bar(share: f64, width: usize) -> String {
    let filled = ((share.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}
