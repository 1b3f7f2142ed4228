//! YAML Export functionality
//!
//! Human-readable variant of the JSON snapshot.

use std::io::Write;

use crate::error::{FlowError, FlowResult};
use crate::export::json::Snapshot;

/// Export a snapshot as YAML, preceded by a comment header
pub fn export_yaml<W: Write>(snapshot: &Snapshot, writer: &mut W) -> FlowResult<()> {
    writeln!(writer, "# FinanceFlow Export").map_err(|e| FlowError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", snapshot.exported_at)
        .map_err(|e| FlowError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", snapshot.app_version)
        .map_err(|e| FlowError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FlowError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, snapshot).map_err(|e| FlowError::Export(e.to_string()))?;

    Ok(())
}

/// Read a YAML snapshot back
pub fn import_from_yaml(yaml: &str) -> FlowResult<Snapshot> {
    let snapshot: Snapshot =
        serde_yaml::from_str(yaml).map_err(|e| FlowError::Import(e.to_string()))?;
    snapshot.validate().map_err(FlowError::Import)?;
    Ok(snapshot)
}
