// Rust guideline compliant 2026-10-12

//! Implementation of the record commands: `tenure contract`, `tenure minute`
//! and `tenure amendment`.
//!
//! All three kinds share one set of subcommands; fields that do not apply to
//! a kind are ignored by it.

use crate::commands::Context;
use crate::output::{Detail, Listing, Tabular};
use crate::terminal::print_warning;
use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::json;
use tenure_app::{AppError, JsonlBackend, ListOptions, RecordService, SortField};
use tenure_core::dates::parse_date;
use tenure_core::{AmendmentKind, Contract, ManualStatus, RecordInput, Status};

/// Subcommands shared by every record kind.
#[derive(Debug, Subcommand)]
pub enum RecordAction {
    /// List records with derived status
    List(ListArgs),

    /// Show one record
    Show {
        /// Record ID (full or partial)
        id: String,
    },

    /// Add a record
    Add(RecordArgs),

    /// Update fields of a record
    Update {
        /// Record ID (full or partial)
        id: String,

        #[command(flatten)]
        fields: RecordArgs,
    },

    /// Delete a record
    Delete {
        /// Record ID (full or partial)
        id: String,
    },
}

/// Filters and ordering for `list`.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Filter by derived status (active, warning, expired, executed, rescinded)
    #[arg(long)]
    pub status: Option<Status>,

    /// Case-insensitive text search
    #[arg(long)]
    pub search: Option<String>,

    /// Only records still running that end within this many days
    #[arg(long, value_name = "DAYS")]
    pub ending_within: Option<u32>,

    /// Only amendments of this contract
    #[arg(long, value_name = "ID")]
    pub contract: Option<String>,

    /// Sort by days, end, number or updated
    #[arg(long)]
    pub sort: Option<SortField>,

    /// Reverse the sort order
    #[arg(long)]
    pub reverse: bool,

    /// Maximum number of records
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Record fields accepted by `add` and `update`.
#[derive(Debug, Clone, Default, Args)]
pub struct RecordArgs {
    /// Record number, e.g. 012/2030
    #[arg(long)]
    pub number: Option<String>,

    /// Supplier name
    #[arg(long)]
    pub supplier: Option<String>,

    /// Object of the record
    #[arg(long)]
    pub object: Option<String>,

    /// Responsible department (contracts)
    #[arg(long)]
    pub department: Option<String>,

    /// Description (amendments)
    #[arg(long)]
    pub description: Option<String>,

    /// Monetary value
    #[arg(long)]
    pub value: Option<f64>,

    /// Reference to an attached document (contracts)
    #[arg(long)]
    pub attachment: Option<String>,

    /// Amended contract ID (amendments)
    #[arg(long, value_name = "ID")]
    pub contract: Option<String>,

    /// Amendment kind: term, value, term-and-value, other
    #[arg(long)]
    pub kind: Option<AmendmentKind>,

    /// Start date
    #[arg(long, value_name = "DD/MM/YYYY")]
    pub start: Option<String>,

    /// End date
    #[arg(long, value_name = "DD/MM/YYYY")]
    pub end: Option<String>,

    /// Manual status override: executed, rescinded or automatic
    #[arg(long = "override", value_name = "STATUS")]
    pub manual_status: Option<ManualStatus>,
}

fn check_date(label: &str, value: Option<String>) -> tenure_app::Result<Option<String>> {
    match value {
        Some(value) => {
            let value = value.trim().to_string();
            if !value.contains('/') || parse_date(&value).is_none() {
                return Err(AppError::InvalidInput(format!(
                    "Invalid {} date '{}': expected DD/MM/YYYY",
                    label, value
                )));
            }
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

fn check_value(value: Option<f64>) -> tenure_app::Result<Option<f64>> {
    match value {
        Some(value) if !value.is_finite() => Err(AppError::InvalidInput(format!(
            "Invalid value '{}': must be a finite number",
            value
        ))),
        other => Ok(other),
    }
}

impl RecordArgs {
    /// Converts the arguments into service input.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a date is not a valid `DD/MM/YYYY` date or
    /// the value is not a finite number.
    pub fn into_input(self) -> tenure_app::Result<RecordInput> {
        Ok(RecordInput {
            number: self.number,
            supplier: self.supplier,
            object: self.object,
            department: self.department,
            description: self.description,
            value: check_value(self.value)?,
            attachment: self.attachment,
            contract_id: self.contract,
            kind: self.kind,
            start_date: check_date("start", self.start)?,
            end_date: check_date("end", self.end)?,
            manual_status: self.manual_status,
        })
    }
}

/// Runs a record subcommand for the kind `T`.
///
/// # Errors
///
/// Returns an error if:
/// - The workspace is not initialized
/// - An ID does not resolve to exactly one record
/// - Input fails validation or a write fails
pub fn execute<T: Tabular>(ctx: &Context, action: RecordAction) -> Result<()> {
    let service = ctx.service()?;

    match action {
        RecordAction::List(args) => list::<T>(ctx, &service, args),
        RecordAction::Show { id } => {
            let record: T = service.get(&id)?;
            ctx.emit(&ctx.formatter.format_detail(&Detail::from_record(&record)));
            Ok(())
        }
        RecordAction::Add(fields) => {
            let record: T = service.create(&fields.into_input()?)?;
            warn_if_ending(&record);
            ctx.emit(&ctx.formatter.format_detail(&Detail::from_record(&record)));
            Ok(())
        }
        RecordAction::Update { id, fields } => {
            let record: T = service.update(&id, &fields.into_input()?)?;
            warn_if_ending(&record);
            ctx.emit(&ctx.formatter.format_detail(&Detail::from_record(&record)));
            Ok(())
        }
        RecordAction::Delete { id } => {
            let record: T = service.delete(&id)?;
            let message = format!("✓ Deleted {}", record.label());
            let value = json!({ "deleted": record.id() });
            ctx.emit(&ctx.formatter.format_message(&message, &value));
            Ok(())
        }
    }
}

fn list<T: Tabular>(
    ctx: &Context,
    service: &RecordService<JsonlBackend>,
    args: ListArgs,
) -> Result<()> {
    let parent_id = match args.contract.as_deref() {
        Some(partial) => Some(service.get::<Contract>(partial)?.id),
        None => None,
    };

    let options = ListOptions {
        status: args.status,
        search: args.search,
        ending_within: args.ending_within,
        parent_id,
        sort: args.sort.unwrap_or_default(),
        reverse: args.reverse,
        limit: args.limit,
    };

    let records: Vec<T> = service.list(&options)?;
    ctx.emit(&ctx.formatter.format_list(&Listing::from_records(&records)));
    Ok(())
}

fn warn_if_ending<T: Tabular>(record: &T) {
    let lifecycle = record.lifecycle();
    match lifecycle.status {
        Status::Warning => print_warning(&format!(
            "{} ends in {} day(s)",
            record.label(),
            lifecycle.days_remaining
        )),
        Status::Expired => print_warning(&format!(
            "{} ended {} day(s) ago",
            record.label(),
            -lifecycle.days_remaining
        )),
        _ => {}
    }
}
