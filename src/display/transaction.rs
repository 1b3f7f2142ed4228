//! Transaction display formatting
//!
//! Register-style rows with signed amounts and the category style shown
//! next to each entry.

use crate::config::Settings;
use crate::models::{style_for, Transaction};

/// Format a single transaction as one line
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    let style = style_for(&txn.category);
    let amount = format!(
        "{}{}",
        txn.kind.sign(),
        settings.format_money(txn.amount)
    );

    format!(
        "{:10}  {:24} {:14} {:>14}  [{}]",
        txn.occurred_on.format(&settings.date_format).to_string(),
        truncate(display_description(txn), 24),
        truncate(&txn.category, 14),
        amount,
        style.icon
    )
}

/// Format a list of transactions with a header
pub fn format_transaction_list(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10}  {:24} {:14} {:>14}\n",
        "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }

    output
}

fn display_description(txn: &Transaction) -> &str {
    if txn.description.is_empty() {
        "(no description)"
    } else {
        &txn.description
    }
}

/// Truncate to `max_len` characters, marking the cut with an ellipsis
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
