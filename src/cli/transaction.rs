//! Transaction CLI commands

use std::fs::File;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_transaction_list;
use crate::error::{FlowError, FlowResult};
use crate::models::{TransactionId, TransactionKind};
use crate::services::{
    import_csv, CreateTransactionInput, ImportOptions, TransactionFilter, TransactionService,
};
use crate::storage::Storage;

use super::{parse_amount, parse_date_or_today};

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// "income" or "expense"
        kind: String,
        /// Amount (e.g., "19.90"); never negative
        amount: String,
        /// Category label (e.g., "Food")
        category: String,
        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions, most recent first
    List {
        /// Filter by kind ("income" or "expense")
        #[arg(short, long)]
        kind: Option<String>,
        /// Filter by category label
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Import transactions from CSV
    Import {
        /// Path to CSV file
        file: PathBuf,
        /// Date format of the date column
        #[arg(long, default_value = "%Y-%m-%d")]
        date_format: String,
        /// Field delimiter
        #[arg(long, default_value = ",")]
        delimiter: char,
    },
    /// Delete a transaction by id
    Delete {
        id: String,
    },
}

/// Handle transaction commands
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FlowResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            description,
            date,
        } => {
            let txn = service.create(CreateTransactionInput {
                kind: kind.parse::<TransactionKind>()?,
                amount: parse_amount(&amount)?,
                category,
                description,
                date: parse_date_or_today(date.as_deref())?,
            })?;

            println!("Created transaction {}", txn.id);
            println!(
                "  {} {}{} in {}",
                txn.occurred_on.format(&settings.date_format),
                txn.kind.sign(),
                settings.format_money(txn.amount),
                txn.category
            );
        }

        TransactionCommands::List {
            kind,
            category,
            from,
            to,
            limit,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);
            if let Some(kind) = kind {
                filter = filter.kind(kind.parse::<TransactionKind>()?);
            }
            if let Some(category) = category {
                filter = filter.category(category);
            }
            filter.start_date = from.as_deref().map(|d| parse_date_or_today(Some(d))).transpose()?;
            filter.end_date = to.as_deref().map(|d| parse_date_or_today(Some(d))).transpose()?;

            let transactions = service.list(filter)?;
            print!("{}", format_transaction_list(&transactions, settings));
        }

        TransactionCommands::Import {
            file,
            date_format,
            delimiter,
        } => {
            if !delimiter.is_ascii() {
                return Err(FlowError::Validation(format!(
                    "Delimiter must be a single ASCII character, got '{}'",
                    delimiter
                )));
            }

            let reader = File::open(&file).map_err(|e| {
                FlowError::Import(format!("Failed to open {}: {}", file.display(), e))
            })?;
            let options = ImportOptions::default()
                .with_date_format(&date_format)
                .with_delimiter(delimiter as u8);

            let result = import_csv(storage, reader, &options)?;

            println!("Imported {} transaction(s)", result.imported_count());
            if !result.duplicates.is_empty() {
                println!("Skipped {} duplicate(s)", result.duplicates.len());
            }
            if result.has_errors() {
                println!("Skipped {} invalid row(s):", result.errors.len());
                for error in &result.errors {
                    println!("  Row {}: {}", error.row, error.message);
                }
            }
        }

        TransactionCommands::Delete { id } => {
            let removed = service.delete(&TransactionId::new(id))?;
            println!("Deleted transaction {}", removed.id);
        }
    }

    Ok(())
}
