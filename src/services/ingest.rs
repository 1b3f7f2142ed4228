//! Ingestion boundary
//!
//! Records coming from a data source (JSON file, CSV import, command line)
//! are checked here before they become [`Transaction`]s. Malformed records
//! are rejected with a validation error and never coerced.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{FlowError, FlowResult};
use crate::models::{Money, Transaction, TransactionId, TransactionKind};

/// A transaction as delivered by a data source, every field optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub kind: Option<TransactionKind>,
    #[serde(default)]
    pub amount: Option<Money>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl From<&Transaction> for TransactionRecord {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: Some(txn.id.to_string()),
            kind: Some(txn.kind),
            amount: Some(txn.amount),
            category: Some(txn.category.clone()),
            description: Some(txn.description.clone()),
            date: Some(txn.occurred_on),
        }
    }
}

/// Validate a single record and build the transaction
pub fn validate_record(record: TransactionRecord) -> FlowResult<Transaction> {
    let id = match record.id {
        Some(id) if !id.trim().is_empty() => id.trim().to_string(),
        _ => return Err(FlowError::Validation("Transaction is missing an id".into())),
    };

    let kind = record
        .kind
        .ok_or_else(|| FlowError::Validation(format!("Transaction {} is missing a kind", id)))?;

    let amount = record.amount.ok_or_else(|| {
        FlowError::Validation(format!("Transaction {} is missing an amount", id))
    })?;

    let category = match record.category {
        Some(c) if !c.trim().is_empty() => c.trim().to_string(),
        _ => {
            return Err(FlowError::Validation(format!(
                "Transaction {} is missing a category",
                id
            )))
        }
    };

    let date = record
        .date
        .ok_or_else(|| FlowError::Validation(format!("Transaction {} is missing a date", id)))?;

    let txn = Transaction::new(
        TransactionId::new(id),
        kind,
        amount,
        category,
        record.description.unwrap_or_default().trim(),
        date,
    );
    txn.validate()?;
    Ok(txn)
}

/// Validate a batch, preserving order and rejecting duplicate ids
///
/// The first invalid record aborts the whole batch.
pub fn ingest_records<I>(records: I) -> FlowResult<Vec<Transaction>>
where
    I: IntoIterator<Item = TransactionRecord>,
{
    let mut seen = HashSet::new();
    let mut transactions = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        let txn = validate_record(record).map_err(|e| match e {
            FlowError::Validation(msg) => {
                FlowError::Validation(format!("record {}: {}", index + 1, msg))
            }
            other => other,
        })?;

        if !seen.insert(txn.id.clone()) {
            tracing::warn!(id = %txn.id, "Rejected duplicate transaction id");
            return Err(FlowError::duplicate_transaction(txn.id.to_string()));
        }

        transactions.push(txn);
    }

    tracing::debug!(count = transactions.len(), "Ingested transaction records");
    Ok(transactions)
}

/// Validate an already-built collection (unique ids, record invariants)
pub fn validate_collection(transactions: &[Transaction]) -> FlowResult<()> {
    let mut seen = HashSet::new();
    for txn in transactions {
        txn.validate()?;
        if !seen.insert(&txn.id) {
            return Err(FlowError::duplicate_transaction(txn.id.to_string()));
        }
    }
    Ok(())
}
