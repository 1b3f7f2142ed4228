//! Transaction service
//!
//! Creating and listing transactions on top of the repository.

use chrono::NaiveDate;

use crate::error::{FlowError, FlowResult};
use crate::models::{Money, Transaction, TransactionId, TransactionKind};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
    /// Exact category label
    pub category: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Inclusive date range
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |k| txn.kind == k)
            && self.category.as_ref().map_or(true, |c| &txn.category == c)
            && self.start_date.map_or(true, |d| txn.occurred_on >= d)
            && self.end_date.map_or(true, |d| txn.occurred_on <= d)
    }
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionKind,
    pub amount: Money,
    pub category: String,
    pub description: Option<String>,
    pub date: NaiveDate,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a transaction with a generated id and persist it
    pub fn create(&self, input: CreateTransactionInput) -> FlowResult<Transaction> {
        let category = input.category.trim();
        if category.is_empty() {
            return Err(FlowError::Validation("Category cannot be empty".into()));
        }

        if input.amount.is_negative() {
            return Err(FlowError::Validation(format!(
                "Amount cannot be negative ({}); use the kind for direction",
                input.amount
            )));
        }

        let txn = Transaction::new(
            TransactionId::generate(),
            input.kind,
            input.amount,
            category,
            input.description.unwrap_or_default().trim(),
            input.date,
        );

        self.storage.transactions.append(txn.clone())?;
        if let Err(e) = self.storage.transactions.save() {
            if let Err(rollback) = self.storage.transactions.delete(&txn.id) {
                tracing::error!(id = %txn.id, error = %rollback, "Failed to roll back unsaved transaction");
            }
            return Err(e);
        }

        tracing::info!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, "Created transaction");
        Ok(txn)
    }

    /// All transactions in stored order
    pub fn all(&self) -> FlowResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// Filtered transactions, most recent date first
    ///
    /// Transactions on the same day keep their stored order.
    pub fn list(&self, filter: TransactionFilter) -> FlowResult<Vec<Transaction>> {
        let mut transactions: Vec<Transaction> = self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect();

        transactions.sort_by(|a, b| b.occurred_on.cmp(&a.occurred_on));

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    pub fn get(&self, id: &TransactionId) -> FlowResult<Transaction> {
        self.storage
            .transactions
            .get(id)?
            .ok_or_else(|| FlowError::transaction_not_found(id.to_string()))
    }

    /// Delete a transaction and persist
    pub fn delete(&self, id: &TransactionId) -> FlowResult<Transaction> {
        let removed = self.storage.transactions.delete(id)?;
        self.storage.transactions.save()?;
        tracing::info!(id = %removed.id, "Deleted transaction");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FlowPaths;
    use crate::storage::sample_transactions;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FlowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        storage
            .transactions
            .replace_all(sample_transactions())
            .unwrap();
        (temp_dir, storage)
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_create_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .create(CreateTransactionInput {
                kind: TransactionKind::Expense,
                amount: Money::from_units(30),
                category: " Health ".into(),
                description: Some("Pharmacy".into()),
                date: day(6),
            })
            .unwrap();

        assert!(txn.id.is_generated());
        assert_eq!(txn.category, "Health");
        assert_eq!(service.all().unwrap().len(), 8);
        assert!(storage.paths().transactions_file().exists());
    }

    #[test]
    fn test_create_rolls_back_when_save_fails() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        // A directory in place of the data file makes the final rename fail
        std::fs::create_dir_all(storage.paths().transactions_file()).unwrap();

        let result = service.create(CreateTransactionInput {
            kind: TransactionKind::Expense,
            amount: Money::from_units(30),
            category: "Health".into(),
            description: None,
            date: day(6),
        });

        assert!(matches!(result, Err(FlowError::Storage(_))));
        assert_eq!(storage.transactions.count().unwrap(), 7);
    }

    #[test]
    fn test_create_rejects_bad_input() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let negative = service.create(CreateTransactionInput {
            kind: TransactionKind::Expense,
            amount: Money::from_cents(-100),
            category: "Food".into(),
            description: None,
            date: day(6),
        });
        assert!(negative.unwrap_err().is_validation());

        let blank = service.create(CreateTransactionInput {
            kind: TransactionKind::Income,
            amount: Money::from_units(1),
            category: "   ".into(),
            description: None,
            date: day(6),
        });
        assert!(blank.unwrap_err().is_validation());
    }

    #[test]
    fn test_list_most_recent_first() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let listed = service.list(TransactionFilter::new().limit(3)).unwrap();
        let ids: Vec<&str> = listed.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["6", "7", "5"]);
    }

    #[test]
    fn test_list_filters() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let food = service.list(TransactionFilter::new().category("Food")).unwrap();
        assert_eq!(food.len(), 2);

        let income = service
            .list(TransactionFilter::new().kind(TransactionKind::Income))
            .unwrap();
        assert_eq!(income.len(), 1);

        let third = service
            .list(TransactionFilter::new().date_range(day(3), day(3)))
            .unwrap();
        assert_eq!(third.len(), 2);
    }

    #[test]
    fn test_get_and_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let id = TransactionId::from("4");
        assert_eq!(service.get(&id).unwrap().category, "Transport");
        service.delete(&id).unwrap();
        assert!(service.get(&id).unwrap_err().is_not_found());
    }
}
