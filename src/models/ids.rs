//! Transaction identifiers
//!
//! Ids are free-form strings supplied by the data source ("1", "txn-3f2a...").
//! Transactions created locally get a generated id derived from a UUID v4.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Display prefix for generated ids
const GENERATED_PREFIX: &str = "txn-";

/// Identifier of a transaction, unique within a collection
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh random id
    pub fn generate() -> Self {
        let uuid = Uuid::new_v4().simple().to_string();
        Self(format!("{}{}", GENERATED_PREFIX, &uuid[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id was minted by [`TransactionId::generate`]
    pub fn is_generated(&self) -> bool {
        self.0.starts_with(GENERATED_PREFIX)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TransactionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for TransactionId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_shape() {
        let id = TransactionId::generate();
        assert!(id.is_generated());
        assert_eq!(id.as_str().len(), 12); // "txn-" + 8 chars
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(TransactionId::generate(), TransactionId::generate());
    }

    #[test]
    fn test_plain_id() {
        let id = TransactionId::from("1");
        assert_eq!(id.to_string(), "1");
        assert!(!id.is_generated());
    }

    #[test]
    fn test_id_serialization() {
        let id = TransactionId::new("abc");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc\"");
        let deserialized: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
