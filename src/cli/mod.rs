//! CLI command handlers
//!
//! Bridges clap argument parsing with the services and reports.

pub mod config;
pub mod dashboard;
pub mod export;
pub mod transaction;

pub use config::{handle_config_command, ConfigCommands};
pub use dashboard::{handle_breakdown, handle_dashboard, handle_summary, handle_today};
pub use export::{handle_export_command, ExportFormat};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{FlowError, FlowResult};
use crate::models::Money;

/// Parse a YYYY-MM-DD argument, defaulting to today's local date
pub(crate) fn parse_date_or_today(date_str: Option<&str>) -> FlowResult<NaiveDate> {
    match date_str {
        Some(date_str) => NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
            FlowError::Validation(format!(
                "Invalid date format: '{}'. Use YYYY-MM-DD",
                date_str
            ))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parse a non-negative amount argument
pub(crate) fn parse_amount(amount_str: &str) -> FlowResult<Money> {
    let amount = Money::parse(amount_str)?;

    if amount.is_negative() {
        return Err(FlowError::Validation(format!(
            "Amount cannot be negative: {}",
            amount_str
        )));
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date_or_today(Some("2024-01-05")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
        assert!(parse_date_or_today(Some("05/01/2024")).is_err());
        assert_eq!(
            parse_date_or_today(None).unwrap(),
            chrono::Local::now().date_naive()
        );
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("19.90").unwrap(), Money::from_cents(1990));
        assert!(parse_amount("-5").unwrap_err().is_validation());
        assert!(parse_amount("five").is_err());
    }
}
