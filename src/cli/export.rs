//! Export CLI command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::Settings;
use crate::error::{FlowError, FlowResult};
use crate::export::{export_json, export_transactions_csv, export_yaml, Snapshot};
use crate::services::TransactionService;
use crate::storage::Storage;

use super::parse_date_or_today;

/// Export output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Snapshot of transactions and metrics as JSON
    Json,
    /// Snapshot of transactions and metrics as YAML
    Yaml,
    /// Transaction list as CSV
    Csv,
}

/// Export to a file, or stdout when no path is given
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    format: ExportFormat,
    output: Option<PathBuf>,
    date: Option<String>,
) -> FlowResult<()> {
    let transactions = TransactionService::new(storage).all()?;
    let reference_date = parse_date_or_today(date.as_deref())?;

    let mut writer: Box<dyn Write> = match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FlowError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match format {
        ExportFormat::Json => {
            let snapshot = Snapshot::new(&transactions, reference_date, settings.daily_goal);
            export_json(&snapshot, &mut writer)?;
        }
        ExportFormat::Yaml => {
            let snapshot = Snapshot::new(&transactions, reference_date, settings.daily_goal);
            export_yaml(&snapshot, &mut writer)?;
        }
        ExportFormat::Csv => export_transactions_csv(&transactions, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| FlowError::Export(e.to_string()))?;

    if let Some(path) = output {
        tracing::info!(path = %path.display(), count = transactions.len(), "Exported transactions");
        eprintln!("Exported {} transaction(s) to {}", transactions.len(), path.display());
    }

    Ok(())
}
