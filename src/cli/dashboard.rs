//! Dashboard CLI commands
//!
//! `dashboard`, `summary`, `breakdown` and `today`: read-only views over the
//! stored transactions.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{FlowError, FlowResult};
use crate::models::{Money, TransactionKind};
use crate::reports::{format_daily_goal, BreakdownReport, DashboardReport};
use crate::services::{metrics, TransactionService};
use crate::storage::Storage;

use super::{parse_amount, parse_date_or_today};

/// Settings with an optional one-off goal override applied
fn effective_settings(settings: &Settings, goal: Option<&str>) -> FlowResult<Settings> {
    match goal {
        Some(goal) => Ok(settings.clone().with_daily_goal(parse_amount(goal)?)),
        None => Ok(settings.clone()),
    }
}

/// Print the full dashboard
pub fn handle_dashboard(
    storage: &Storage,
    settings: &Settings,
    date: Option<String>,
    goal: Option<String>,
) -> FlowResult<()> {
    let reference_date = parse_date_or_today(date.as_deref())?;
    let settings = effective_settings(settings, goal.as_deref())?;
    let transactions = TransactionService::new(storage).all()?;

    let report = DashboardReport::generate(&transactions, reference_date, &settings);
    print!("{}", report.format_terminal(&settings));
    Ok(())
}

/// Print the headline totals only
pub fn handle_summary(storage: &Storage, settings: &Settings) -> FlowResult<()> {
    let transactions = TransactionService::new(storage).all()?;

    let income = metrics::total_by_kind(&transactions, TransactionKind::Income);
    let expenses = metrics::total_by_kind(&transactions, TransactionKind::Expense);
    let balance = metrics::balance(&transactions);

    println!("Income:   {:>16}", settings.format_money(income));
    println!("Expenses: {:>16}", settings.format_money(expenses));
    println!("Balance:  {:>16}", settings.format_money(balance));
    Ok(())
}

/// Print or export the category breakdown
pub fn handle_breakdown(
    storage: &Storage,
    settings: &Settings,
    top: Option<usize>,
    output: Option<PathBuf>,
) -> FlowResult<()> {
    let transactions = TransactionService::new(storage).all()?;
    let mut report = BreakdownReport::generate(&transactions);

    if let Some(limit) = top {
        report = report.top(limit);
    }

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            FlowError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        report.export_csv(BufWriter::new(file))?;
        println!("Breakdown exported to: {}", path.display());
    } else {
        print!("{}", report.format_terminal(settings));
    }

    Ok(())
}

/// Print today's spending against the daily goal
pub fn handle_today(
    storage: &Storage,
    settings: &Settings,
    date: Option<String>,
    goal: Option<String>,
) -> FlowResult<()> {
    let reference_date = parse_date_or_today(date.as_deref())?;
    let goal: Money = match goal {
        Some(goal) => parse_amount(&goal)?,
        None => settings.daily_goal,
    };

    let transactions = TransactionService::new(storage).all()?;
    let spent = metrics::same_day_expense_total(&transactions, reference_date);

    print!("{}", format_daily_goal(spent, goal, reference_date, settings));
    Ok(())
}
