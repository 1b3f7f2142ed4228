//! Dashboard Report
//!
//! Everything the dashboard screen shows: balance, income, expenses, the
//! daily goal card and alert, the category breakdown and recent activity.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::Settings;
use crate::display::format_transaction_list;
use crate::models::{Money, Transaction};
use crate::services::metrics::DashboardMetrics;

use super::breakdown::BreakdownReport;

/// Dashboard snapshot for one reference day
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub metrics: DashboardMetrics,
    pub breakdown: BreakdownReport,
    /// The first `recent_limit` transactions in input order
    pub recent: Vec<Transaction>,
}

impl DashboardReport {
    /// Generate the dashboard for `reference_date` using the configured goal
    pub fn generate(
        transactions: &[Transaction],
        reference_date: NaiveDate,
        settings: &Settings,
    ) -> Self {
        let metrics = DashboardMetrics::compute(transactions, reference_date, settings.daily_goal);
        let breakdown =
            BreakdownReport::from_breakdown(metrics.breakdown.clone(), metrics.total_expenses);
        let recent = transactions
            .iter()
            .take(settings.recent_limit)
            .cloned()
            .collect();

        Self {
            metrics,
            breakdown,
            recent,
        }
    }

    /// Whether the balance is zero or positive
    pub fn is_balance_positive(&self) -> bool {
        !self.metrics.balance.is_negative()
    }

    /// The over-goal alert text, if the goal was exceeded
    pub fn daily_goal_alert(&self, settings: &Settings) -> Option<String> {
        if !self.metrics.over_daily_goal {
            return None;
        }

        Some(format!(
            "Warning! You went over your daily goal: spent {} of {} on {}",
            settings.format_money(self.metrics.same_day_expenses),
            settings.format_money(self.metrics.daily_goal),
            self.metrics
                .reference_date
                .format(&settings.date_format)
        ))
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let m = &self.metrics;
        let mut output = String::new();

        output.push_str("FinanceFlow - Dashboard\n");
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if let Some(alert) = self.daily_goal_alert(settings) {
            output.push_str(&format!("!! {}\n\n", alert));
        }

        output.push_str(&format!(
            "{:<16} {:>16}  ({})\n",
            "Balance:",
            settings.format_money(m.balance),
            if self.is_balance_positive() { "positive" } else { "negative" }
        ));
        output.push_str(&format!(
            "{:<16} {:>16}\n",
            "Income:",
            settings.format_money(m.total_income)
        ));
        output.push_str(&format!(
            "{:<16} {:>16}\n",
            "Expenses:",
            settings.format_money(m.total_expenses)
        ));
        output.push_str(&format!(
            "{:<16} {:>16}  of {} ({:.0}%)\n",
            "Spent today:",
            settings.format_money(m.same_day_expenses),
            settings.format_money(m.daily_goal),
            m.daily_goal_progress
        ));

        output.push_str("\nWhere you are losing money\n");
        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&self.breakdown.format_terminal(settings));

        output.push_str("\nRecent transactions\n");
        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format_transaction_list(&self.recent, settings));

        output
    }
}

/// Daily goal card on its own, for the `today` command
pub fn format_daily_goal(
    spent: Money,
    goal: Money,
    reference_date: NaiveDate,
    settings: &Settings,
) -> String {
    let progress = crate::services::metrics::daily_goal_progress(spent, goal);
    let over = crate::services::metrics::is_over_daily_goal(spent, goal);

    let mut output = format!(
        "{}: spent {} of {} ({:.0}%)\n",
        reference_date.format(&settings.date_format),
        settings.format_money(spent),
        settings.format_money(goal),
        progress
    );

    if over {
        output.push_str(&format!(
            "Over the daily goal by {}\n",
            settings.format_money(spent - goal)
        ));
    } else {
        output.push_str(&format!(
            "Within the daily goal ({} left)\n",
            settings.format_money(goal - spent)
        ));
    }

    output
}
