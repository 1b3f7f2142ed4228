//! Transaction model
//!
//! A transaction is an immutable record of one money movement. The direction
//! lives in [`TransactionKind`]; `amount` is never negative.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::FlowError;

/// Largest amount a single transaction may carry
///
/// One billion currency units. Summing even tens of millions of transactions
/// at this ceiling stays far inside `i64` cents, so totals cannot overflow.
pub const MAX_AMOUNT: Money = Money::from_units(1_000_000_000);

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Sign used when displaying an amount of this kind
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "inflow" => Ok(Self::Income),
            "expense" | "out" | "outflow" => Ok(Self::Expense),
            other => Err(FlowError::Validation(format!(
                "Unknown transaction kind '{}'. Use 'income' or 'expense'",
                other
            ))),
        }
    }
}

/// A recorded money movement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier within the collection
    pub id: TransactionId,

    /// Income or expense
    pub kind: TransactionKind,

    /// Non-negative amount
    pub amount: Money,

    /// Free-text category label
    pub category: String,

    /// Informational description
    #[serde(default)]
    pub description: String,

    /// Calendar day the transaction occurred on
    #[serde(rename = "date")]
    pub occurred_on: NaiveDate,
}

impl Transaction {
    /// Create a transaction
    ///
    /// Callers taking data from outside the process should go through
    /// [`crate::services::ingest`] instead, which rejects malformed input.
    pub fn new(
        id: impl Into<TransactionId>,
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        occurred_on: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            amount,
            category: category.into(),
            description: description.into(),
            occurred_on,
        }
    }

    /// Shorthand for an income transaction
    pub fn income(
        id: impl Into<TransactionId>,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        occurred_on: NaiveDate,
    ) -> Self {
        Self::new(id, TransactionKind::Income, amount, category, description, occurred_on)
    }

    /// Shorthand for an expense transaction
    pub fn expense(
        id: impl Into<TransactionId>,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        occurred_on: NaiveDate,
    ) -> Self {
        Self::new(id, TransactionKind::Expense, amount, category, description, occurred_on)
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Amount with the sign implied by the kind (income positive)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Whether the transaction falls on the given calendar day
    pub fn occurred_on_day(&self, day: NaiveDate) -> bool {
        self.occurred_on == day
    }

    /// Check the record invariants
    pub fn validate(&self) -> Result<(), FlowError> {
        if self.id.as_str().trim().is_empty() {
            return Err(FlowError::Validation("Transaction id cannot be empty".into()));
        }

        if self.amount.is_negative() {
            return Err(FlowError::Validation(format!(
                "Transaction {} has a negative amount ({}); use the kind for direction",
                self.id, self.amount
            )));
        }

        if self.amount > MAX_AMOUNT {
            return Err(FlowError::Validation(format!(
                "Transaction {} amount {} exceeds the maximum of {}",
                self.id, self.amount, MAX_AMOUNT
            )));
        }

        if self.category.trim().is_empty() {
            return Err(FlowError::Validation(format!(
                "Transaction {} has no category",
                self.id
            )));
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{} {} ({})",
            self.occurred_on,
            self.kind.sign(),
            self.amount,
            self.category,
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let txn = Transaction::expense("2", Money::from_units(850), "Housing", "Rent", day(2));
        assert!(txn.is_expense());
        assert!(!txn.is_income());
        assert_eq!(txn.signed_amount().cents(), -85_000);
        assert!(txn.occurred_on_day(day(2)));
        assert!(!txn.occurred_on_day(day(3)));
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("EXPENSE".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert_eq!("out".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_validation() {
        let mut txn = Transaction::income("1", Money::from_units(3500), "Salary", "Pay", day(1));
        assert!(txn.validate().is_ok());

        txn.amount = Money::from_cents(-1);
        assert!(txn.validate().unwrap_err().is_validation());

        txn.amount = Money::zero();
        assert!(txn.validate().is_ok());

        txn.amount = MAX_AMOUNT;
        assert!(txn.validate().is_ok());

        txn.amount = MAX_AMOUNT + Money::from_cents(1);
        assert!(txn.validate().unwrap_err().is_validation());
        txn.amount = Money::zero();

        txn.category = "  ".into();
        assert!(txn.validate().is_err());
    }

    #[test]
    fn test_serialization_shape() {
        let txn = Transaction::expense("3", Money::from_units(120), "Food", "Groceries", day(3));
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["kind"], "expense");
        assert_eq!(json["amount"], 12_000);
        assert_eq!(json["date"], "2024-01-03");

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, txn);
    }
}
