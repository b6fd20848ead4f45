// Rust guideline compliant 2026-10-12

//! Implementation of the `tenure audit` command.

use crate::commands::Context;
use anyhow::Result;
use clap::Args;
use tenure_app::AuditQuery;
use tenure_core::{AuditAction, Table};

/// Filters for `tenure audit`.
#[derive(Debug, Clone, Default, Args)]
pub struct AuditArgs {
    /// Only entries for this table (contracts, minutes, amendments)
    #[arg(long)]
    pub table: Option<Table>,

    /// Only entries for this record ID or ID prefix
    #[arg(long, value_name = "ID")]
    pub record: Option<String>,

    /// Only entries of this action (create, update, delete)
    #[arg(long)]
    pub action: Option<AuditAction>,

    /// Maximum number of entries
    #[arg(long, default_value_t = 50)]
    pub limit: usize,
}

/// Shows the audit log, newest first.
///
/// # Errors
///
/// Returns an error if the workspace is not initialized or the log cannot be
/// read.
pub fn execute(ctx: &Context, args: AuditArgs) -> Result<()> {
    let query = AuditQuery {
        table: args.table,
        record_id: args.record,
        action: args.action,
        limit: Some(args.limit),
    };

    let entries = ctx.service()?.audit_log(&query)?;
    ctx.emit(&ctx.formatter.format_audit(&entries));
    Ok(())
}
