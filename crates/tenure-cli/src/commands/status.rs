// Rust guideline compliant 2026-10-12

//! Implementation of the `tenure status` command.
//!
//! Displays status counts per record kind and the records ending soon.

use crate::commands::Context;
use anyhow::Result;

/// Executes the status command.
///
/// # Errors
///
/// Returns an error if:
/// - The workspace is not initialized
/// - A table cannot be read
pub fn execute(ctx: &Context) -> Result<()> {
    let summary = ctx.service()?.summary()?;
    ctx.emit(&ctx.formatter.format_summary(&summary));
    Ok(())
}
