//! Transaction repository for JSON storage
//!
//! Keeps the ordered transaction sequence in memory and persists it to
//! transactions.json. Records read from disk pass through ingestion
//! validation, so a hand-edited file with a bad record fails to load.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FlowError;
use crate::models::{Transaction, TransactionId};
use crate::services::ingest::{ingest_records, TransactionRecord};

use super::file_io::{read_json, write_json_atomic};

/// On-disk layout of transactions.json
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    #[serde(default)]
    transactions: Vec<TransactionRecord>,
}

/// Repository for transaction persistence, preserving insertion order
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load and validate transactions from disk
    pub fn load(&self) -> Result<(), FlowError> {
        let file_data: TransactionData = read_json(&self.path)?;
        let transactions = ingest_records(file_data.transactions).map_err(|e| {
            FlowError::Storage(format!("{} is invalid: {}", self.path.display(), e))
        })?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        tracing::debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "Loaded transactions"
        );
        *data = transactions;
        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), FlowError> {
        let data = self
            .data
            .read()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = TransactionData {
            transactions: data.iter().map(TransactionRecord::from).collect(),
        };

        write_json_atomic(&self.path, &file_data)?;
        tracing::debug!(
            path = %self.path.display(),
            count = file_data.transactions.len(),
            "Saved transactions"
        );
        Ok(())
    }

    /// Snapshot of all transactions in stored order
    pub fn get_all(&self) -> Result<Vec<Transaction>, FlowError> {
        let data = self
            .data
            .read()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    pub fn get(&self, id: &TransactionId) -> Result<Option<Transaction>, FlowError> {
        let data = self
            .data
            .read()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.iter().find(|t| &t.id == id).cloned())
    }

    pub fn contains(&self, id: &TransactionId) -> Result<bool, FlowError> {
        Ok(self.get(id)?.is_some())
    }

    /// Append a transaction; ids must be unique
    pub fn append(&self, txn: Transaction) -> Result<(), FlowError> {
        txn.validate()?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if data.iter().any(|t| t.id == txn.id) {
            return Err(FlowError::duplicate_transaction(txn.id.to_string()));
        }

        data.push(txn);
        Ok(())
    }

    /// Replace the whole sequence
    pub fn replace_all(&self, transactions: Vec<Transaction>) -> Result<(), FlowError> {
        crate::services::ingest::validate_collection(&transactions)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = transactions;
        Ok(())
    }

    /// Remove a transaction by id
    pub fn delete(&self, id: &TransactionId) -> Result<Transaction, FlowError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let index = data
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| FlowError::transaction_not_found(id.to_string()))?;

        Ok(data.remove(index))
    }

    pub fn count(&self) -> Result<usize, FlowError> {
        let data = self
            .data
            .read()
            .map_err(|e| FlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::sample_transactions;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let repo = TransactionRepository::new(path);
        (temp_dir, repo)
    }

    fn expense(id: &str) -> Transaction {
        Transaction::expense(
            id,
            Money::from_units(45),
            "Transport",
            "Ride",
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_append_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(expense("a")).unwrap();
        let retrieved = repo.get(&TransactionId::from("a")).unwrap().unwrap();
        assert_eq!(retrieved.category, "Transport");
        assert!(repo.contains(&TransactionId::from("a")).unwrap());
        assert!(!repo.contains(&TransactionId::from("b")).unwrap());
    }

    #[test]
    fn test_append_rejects_duplicates_and_invalid() {
        let (_temp_dir, repo) = create_test_repo();
        repo.append(expense("a")).unwrap();
        assert!(repo.append(expense("a")).unwrap_err().is_duplicate());

        let mut bad = expense("b");
        bad.amount = Money::from_cents(-1);
        assert!(repo.append(bad).unwrap_err().is_validation());
    }

    #[test]
    fn test_save_and_reload_preserves_order() {
        let (temp_dir, repo) = create_test_repo();
        repo.replace_all(sample_transactions()).unwrap();
        repo.save().unwrap();

        let repo2 = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        repo2.load().unwrap();

        let ids: Vec<String> = repo2
            .get_all()
            .unwrap()
            .into_iter()
            .map(|t| t.id.to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7"]);
    }

    #[test]
    fn test_load_rejects_negative_amount() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(
            temp_dir.path().join("transactions.json"),
            r#"{"transactions":[{"id":"1","kind":"expense","amount":-100,"category":"Food","date":"2024-01-03"}]}"#,
        )
        .unwrap();

        assert!(matches!(repo.load().unwrap_err(), FlowError::Storage(_)));
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.append(expense("a")).unwrap();
        repo.append(expense("b")).unwrap();

        let removed = repo.delete(&TransactionId::from("a")).unwrap();
        assert_eq!(removed.id.as_str(), "a");
        assert_eq!(repo.count().unwrap(), 1);
        assert!(repo.delete(&TransactionId::from("a")).unwrap_err().is_not_found());
    }
}
