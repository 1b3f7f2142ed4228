//! Storage initialization
//!
//! First-run setup and the sample dataset shown by a fresh dashboard.

use chrono::NaiveDate;

use crate::config::paths::FlowPaths;
use crate::error::FlowError;
use crate::models::{Money, Transaction};

use super::transactions::TransactionRepository;

const fn january_2024(day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(2024, 1, day) {
        Some(date) => date,
        None => panic!("sample day outside January 2024"),
    }
}

// Evaluated at compile time, so a bad day fails the build
const SAMPLE_DAYS: [NaiveDate; 5] = [
    january_2024(1),
    january_2024(2),
    january_2024(3),
    january_2024(4),
    january_2024(5),
];

/// The seven sample transactions of January 2024
pub fn sample_transactions() -> Vec<Transaction> {
    let jan = |day: usize| SAMPLE_DAYS[day - 1];

    vec![
        Transaction::income("1", Money::from_units(3500), "Salary", "Monthly salary", jan(1)),
        Transaction::expense("2", Money::from_units(850), "Housing", "Rent", jan(2)),
        Transaction::expense("3", Money::from_units(120), "Food", "Supermarket", jan(3)),
        Transaction::expense("4", Money::from_units(45), "Transport", "Ride share", jan(3)),
        Transaction::expense("5", Money::from_units(89), "Leisure", "Movies and dinner", jan(4)),
        Transaction::expense("6", Money::from_units(35), "Food", "Breakfast", jan(5)),
        Transaction::expense("7", Money::from_units(199), "Shopping", "Clothes", jan(5)),
    ]
}

/// Initialize storage for a fresh installation
///
/// Creates the directory layout. With `with_sample`, an absent
/// transactions.json is seeded with [`sample_transactions`]; an existing
/// file is never overwritten. Returns whether sample data was written.
pub fn initialize_storage(paths: &FlowPaths, with_sample: bool) -> Result<bool, FlowError> {
    paths.ensure_directories()?;

    if with_sample && !paths.transactions_file().exists() {
        let repo = TransactionRepository::new(paths.transactions_file());
        repo.replace_all(sample_transactions())?;
        repo.save()?;
        tracing::info!(path = %paths.transactions_file().display(), "Seeded sample transactions");
        return Ok(true);
    }

    Ok(false)
}
