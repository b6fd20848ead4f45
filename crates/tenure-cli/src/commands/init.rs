// Rust guideline compliant 2026-10-12

//! Implementation of the `tenure init` command.
//!
//! Creates the `.tenure` directory with empty tables and a default
//! configuration.

use crate::commands::Context;
use anyhow::Result;
use serde_json::json;
use tenure_app::Workspace;
use tenure_core::Table;

/// Initializes a new Tenure workspace.
///
/// Existing tables and configuration are kept.
///
/// # Errors
///
/// Returns an error if:
/// - The `.tenure` directory cannot be created
/// - A table file or the configuration cannot be written
pub fn execute(ctx: &Context) -> Result<()> {
    let workspace = Workspace::init(ctx.root.as_deref())?;
    let dir = workspace.dir().display().to_string();

    let tables = [Table::Contracts, Table::Minutes, Table::Amendments, Table::Audit];
    let mut message = format!("✓ Tenure workspace initialized at {}", dir);
    for table in tables {
        message.push_str(&format!("\n  - {}", table.file_name()));
    }
    message.push_str("\n  - config.toml");

    let value = json!({
        "path": dir,
        "tables": tables.iter().map(|t| t.file_name()).collect::<Vec<_>>(),
    });
    ctx.emit(&ctx.formatter.format_message(&message, &value));
    Ok(())
}
