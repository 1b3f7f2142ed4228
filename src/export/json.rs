//! JSON Export functionality
//!
//! Exports the transactions together with the metrics computed over them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{FlowError, FlowResult};
use crate::models::{Money, Transaction};
use crate::services::ingest::{ingest_records, TransactionRecord};
use crate::services::metrics::{CategoryTotal, DashboardMetrics};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Metrics section of a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub reference_date: NaiveDate,
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
    pub same_day_expenses: Money,
    pub daily_goal: Money,
    pub over_daily_goal: bool,
    pub breakdown: Vec<CategoryShare>,
}

/// Breakdown entry as exported
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub total: Money,
    pub share: f64,
}

impl From<&CategoryTotal> for CategoryShare {
    fn from(total: &CategoryTotal) -> Self {
        Self {
            category: total.category.clone(),
            total: total.total,
            share: total.share,
        }
    }
}

impl From<&DashboardMetrics> for MetricsSnapshot {
    fn from(m: &DashboardMetrics) -> Self {
        Self {
            reference_date: m.reference_date,
            total_income: m.total_income,
            total_expenses: m.total_expenses,
            balance: m.balance,
            same_day_expenses: m.same_day_expenses,
            daily_goal: m.daily_goal,
            over_daily_goal: m.over_daily_goal,
            breakdown: m.breakdown.iter().map(CategoryShare::from).collect(),
        }
    }
}

/// Full snapshot: transactions plus derived metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub transactions: Vec<TransactionRecord>,

    pub metrics: MetricsSnapshot,
}

impl Snapshot {
    /// Build a snapshot for a reference day and goal
    pub fn new(transactions: &[Transaction], reference_date: NaiveDate, daily_goal: Money) -> Self {
        let metrics = DashboardMetrics::compute(transactions, reference_date, daily_goal);
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions: transactions.iter().map(TransactionRecord::from).collect(),
            metrics: MetricsSnapshot::from(&metrics),
        }
    }

    /// Check the snapshot can be read back by this version
    pub fn validate(&self) -> Result<(), String> {
        let major = self.schema_version.split('.').next().unwrap_or_default();
        let ours = EXPORT_SCHEMA_VERSION.split('.').next().unwrap_or_default();
        if major != ours {
            return Err(format!(
                "Incompatible schema version {} (expected {}.x)",
                self.schema_version, ours
            ));
        }
        Ok(())
    }

    /// Validated transactions contained in the snapshot
    pub fn into_transactions(self) -> FlowResult<Vec<Transaction>> {
        ingest_records(self.transactions)
    }
}

/// Export a snapshot as pretty JSON
pub fn export_json<W: Write>(snapshot: &Snapshot, writer: &mut W) -> FlowResult<()> {
    serde_json::to_writer_pretty(&mut *writer, snapshot)
        .map_err(|e| FlowError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FlowError::Export(e.to_string()))?;
    Ok(())
}

/// Read a JSON snapshot back
pub fn import_from_json(json: &str) -> FlowResult<Snapshot> {
    let snapshot: Snapshot =
        serde_json::from_str(json).map_err(|e| FlowError::Import(e.to_string()))?;
    snapshot.validate().map_err(FlowError::Import)?;
    Ok(snapshot)
}
