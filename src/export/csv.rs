//! CSV Export functionality
//!
//! Writes transactions in the same column layout the importer reads.

use std::io::Write;

use crate::error::{FlowError, FlowResult};
use crate::models::Transaction;

/// Export transactions to CSV (`date,kind,amount,category,description,id`)
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> FlowResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["date", "kind", "amount", "category", "description", "id"])
        .map_err(|e| FlowError::Export(e.to_string()))?;

    for txn in transactions {
        csv_writer
            .write_record([
                txn.occurred_on.format("%Y-%m-%d").to_string(),
                txn.kind.to_string(),
                txn.amount.to_string(),
                txn.category.clone(),
                txn.description.clone(),
                txn.id.to_string(),
            ])
            .map_err(|e| FlowError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FlowError::Export(e.to_string()))?;
    Ok(())
}
