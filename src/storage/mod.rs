//! Storage layer for FinanceFlow
//!
//! JSON file storage with atomic writes. This is the data source adapter:
//! the metrics engine never sees where transactions came from.

pub mod file_io;
pub mod init;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use init::{initialize_storage, sample_transactions};
pub use transactions::TransactionRepository;

use crate::config::paths::FlowPaths;
use crate::error::FlowError;

/// Main storage coordinator
pub struct Storage {
    paths: FlowPaths,
    pub transactions: TransactionRepository,
}

impl Storage {
    /// Create a new Storage instance, ensuring directories exist
    pub fn new(paths: FlowPaths) -> Result<Self, FlowError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &FlowPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FlowError> {
        self.transactions.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FlowError> {
        self.transactions.save()
    }
}
