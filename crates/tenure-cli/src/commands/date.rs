// Rust guideline compliant 2026-10-12

//! Implementation of the `tenure date` helpers.
//!
//! These run without a workspace and expose the date conversions directly.

use crate::commands::Context;
use anyhow::Result;
use clap::Subcommand;
use serde_json::json;
use tenure_app::AppError;
use tenure_core::dates::{self, parse_date};
use tenure_core::{resolve_status_within, status::DEFAULT_WARNING_DAYS, ManualStatus};

/// Date helper subcommands.
#[derive(Debug, Subcommand)]
pub enum DateAction {
    /// Signed days from today until a date, and the status it implies
    Days {
        /// Date as DD/MM/YYYY or YYYY-MM-DD
        date: String,

        /// Reference date instead of the local current date
        #[arg(long, value_name = "DATE")]
        today: Option<String>,

        /// Warning window in days
        #[arg(long, default_value_t = DEFAULT_WARNING_DAYS)]
        warning_days: u32,
    },

    /// Convert YYYY-MM-DD to DD/MM/YYYY
    Display {
        /// Storage date
        date: String,
    },

    /// Convert DD/MM/YYYY to YYYY-MM-DD
    Storage {
        /// Display date
        date: String,
    },
}

/// Runs a date helper.
///
/// # Errors
///
/// Returns an error if `--today` is not a date or a storage conversion is not
/// possible.
pub fn execute(ctx: &Context, action: DateAction) -> Result<()> {
    match action {
        DateAction::Days {
            date,
            today,
            warning_days,
        } => {
            let today = match today {
                Some(value) => parse_date(&value).ok_or_else(|| {
                    AppError::InvalidInput(format!("Invalid reference date: {}", value))
                })?,
                None => dates::today(),
            };
            let days = dates::days_until(&date, today);
            let status = resolve_status_within(days, ManualStatus::Automatic, warning_days);

            let message = format!("{} ({})", days, status);
            let value = json!({
                "date": date,
                "today": dates::format_display(today),
                "days": days,
                "status": status,
            });
            ctx.emit(&ctx.formatter.format_message(&message, &value));
        }
        DateAction::Display { date } => {
            let display = dates::to_display(&date);
            let value = json!({ "input": date, "display": display });
            ctx.emit(&ctx.formatter.format_message(&display, &value));
        }
        DateAction::Storage { date } => {
            let storage = dates::to_storage(&date).ok_or_else(|| {
                AppError::InvalidInput(format!("Cannot convert '{}' to storage form", date))
            })?;
            let value = json!({ "input": date, "storage": storage });
            ctx.emit(&ctx.formatter.format_message(&storage, &value));
        }
    }
    Ok(())
}
