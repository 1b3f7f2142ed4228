//! CSV import service
//!
//! Reads transactions from a CSV file with a header row naming the columns
//! `date`, `kind`, `amount`, `category`, `description` and optionally `id`.
//! Every row passes through ingestion validation; bad rows are reported and
//! skipped, good rows are appended in file order.

use std::collections::HashSet;
use std::io::Read;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};

use crate::error::{FlowError, FlowResult};
use crate::models::{Money, Transaction, TransactionId, TransactionKind};
use crate::services::ingest::{validate_record, TransactionRecord};
use crate::storage::Storage;

/// How to read the CSV file
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Date format string (e.g., "%Y-%m-%d", "%d/%m/%Y")
    pub date_format: String,
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            delimiter: b',',
        }
    }
}

impl ImportOptions {
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// A row that could not be imported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based data row number (header excluded)
    pub row: usize,
    pub message: String,
}

/// Outcome of an import
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    pub imported: Vec<Transaction>,
    /// Ids skipped because they already exist
    pub duplicates: Vec<TransactionId>,
    pub errors: Vec<RowError>,
}

impl ImportResult {
    pub fn imported_count(&self) -> usize {
        self.imported.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Column positions resolved from the header
#[derive(Debug, Clone, Copy)]
struct Columns {
    date: usize,
    kind: usize,
    amount: usize,
    category: usize,
    description: Option<usize>,
    id: Option<usize>,
}

impl Columns {
    fn from_header(header: &StringRecord) -> FlowResult<Self> {
        let find = |name: &str| {
            header
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let require = |name: &str| {
            find(name).ok_or_else(|| {
                FlowError::Import(format!("CSV header is missing the '{}' column", name))
            })
        };

        Ok(Self {
            date: require("date")?,
            kind: require("kind")?,
            amount: require("amount")?,
            category: require("category")?,
            description: find("description"),
            id: find("id"),
        })
    }
}

/// Turn one CSV row into a record; unparsable fields become `None`
/// so that ingestion reports them
fn row_to_record(
    row: &StringRecord,
    columns: Columns,
    options: &ImportOptions,
) -> Result<TransactionRecord, String> {
    let field = |i: usize| row.get(i).map(str::trim).filter(|s| !s.is_empty());

    let kind = match field(columns.kind) {
        Some(text) => Some(text.parse::<TransactionKind>().map_err(|e| e.to_string())?),
        None => None,
    };

    let amount = match field(columns.amount) {
        Some(text) => Some(Money::parse(text).map_err(|e| e.to_string())?),
        None => None,
    };

    let date = match field(columns.date) {
        Some(text) => Some(
            NaiveDate::parse_from_str(text, &options.date_format)
                .map_err(|e| format!("Invalid date '{}': {}", text, e))?,
        ),
        None => None,
    };

    let id = columns
        .id
        .and_then(field)
        .map(str::to_string)
        .unwrap_or_else(|| TransactionId::generate().to_string());

    Ok(TransactionRecord {
        id: Some(id),
        kind,
        amount,
        category: field(columns.category).map(str::to_string),
        description: columns.description.and_then(field).map(str::to_string),
        date,
    })
}

/// Parse and validate CSV rows without touching storage
///
/// Returns the valid transactions in file order plus the per-row errors.
/// Fails outright only if the file cannot be read or lacks a usable header.
pub fn parse_csv<R: Read>(
    reader: R,
    options: &ImportOptions,
) -> FlowResult<(Vec<Transaction>, Vec<RowError>)> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header = csv_reader
        .headers()
        .map_err(|e| FlowError::Import(format!("Failed to read CSV header: {}", e)))?
        .clone();
    let columns = Columns::from_header(&header)?;

    let mut transactions = Vec::new();
    let mut errors = Vec::new();

    for (index, result) in csv_reader.records().enumerate() {
        let row_number = index + 1;
        let outcome = result
            .map_err(|e| e.to_string())
            .and_then(|row| row_to_record(&row, columns, options))
            .and_then(|record| validate_record(record).map_err(|e| e.to_string()));

        match outcome {
            Ok(txn) => transactions.push(txn),
            Err(message) => {
                tracing::warn!(row = row_number, %message, "Skipping CSV row");
                errors.push(RowError {
                    row: row_number,
                    message,
                });
            }
        }
    }

    Ok((transactions, errors))
}

/// Import CSV rows into storage
///
/// Rows whose id already exists (in storage or earlier in the file) are
/// reported as duplicates and skipped.
pub fn import_csv<R: Read>(
    storage: &Storage,
    reader: R,
    options: &ImportOptions,
) -> FlowResult<ImportResult> {
    let (parsed, errors) = parse_csv(reader, options)?;

    let mut result = ImportResult {
        errors,
        ..Default::default()
    };
    let mut seen = HashSet::new();

    for txn in parsed {
        if !seen.insert(txn.id.clone()) || storage.transactions.contains(&txn.id)? {
            result.duplicates.push(txn.id.clone());
            continue;
        }
        storage.transactions.append(txn.clone())?;
        result.imported.push(txn);
    }

    if !result.imported.is_empty() {
        storage.transactions.save()?;
    }

    tracing::info!(
        imported = result.imported.len(),
        duplicates = result.duplicates.len(),
        errors = result.errors.len(),
        "CSV import finished"
    );

    Ok(result)
}
