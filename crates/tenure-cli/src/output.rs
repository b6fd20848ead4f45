// Rust guideline compliant 2026-10-12

//! Output formatting module for the Tenure CLI.
//!
//! This module provides functionality for formatting records, the dashboard
//! summary and the audit log in various output formats (JSON, table, plain
//! text).

use crate::terminal::{paint, status_label};
use serde::Serialize;
use serde_json::{json, Value};
use tabled::{builder::Builder, settings::Style};
use tenure_app::{AppError, ErrorEnvelope, SuccessEnvelope, Summary};
use tenure_core::{
    Amendment, AuditEntry, Contract, Minute, OutputFormat, Record, Row, Status, Table,
};
use termcolor::Color;

/// Per-kind columns and fields for human-readable output.
pub trait Tabular: Record {
    /// Leading list columns; lifecycle columns are appended.
    fn headers() -> &'static [&'static str];

    /// Cells matching [`Tabular::headers`].
    fn cells(&self) -> Vec<String>;

    /// Kind-specific labelled fields for the detail view.
    fn fields(&self) -> Vec<(&'static str, String)>;
}

fn money(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn timestamp(seconds: i64) -> String {
    chrono::DateTime::from_timestamp(seconds, 0)
        .map_or_else(|| seconds.to_string(), |t| t.format("%Y-%m-%d %H:%M UTC").to_string())
}

impl Tabular for Contract {
    fn headers() -> &'static [&'static str] {
        &["ID", "Number", "Supplier", "Department"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.number.clone(),
            self.supplier.clone(),
            self.department.clone(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Supplier", or_dash(&self.supplier)),
            ("Object", or_dash(&self.object)),
            ("Department", or_dash(&self.department)),
            ("Value", money(self.value)),
            ("Attachment", or_dash(self.attachment.as_deref().unwrap_or_default())),
        ]
    }
}

impl Tabular for Minute {
    fn headers() -> &'static [&'static str] {
        &["ID", "Number", "Supplier", "Object"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.number.clone(),
            self.supplier.clone(),
            self.object.clone(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Supplier", or_dash(&self.supplier)),
            ("Object", or_dash(&self.object)),
            ("Value", money(self.value)),
        ]
    }
}

impl Tabular for Amendment {
    fn headers() -> &'static [&'static str] {
        &["ID", "Contract", "Number", "Kind"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.contract_id.clone(),
            self.number.clone(),
            self.kind.to_string(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Contract", self.contract_id.clone()),
            ("Kind", self.kind.to_string()),
            ("Description", or_dash(&self.description)),
            ("Value", money(self.value)),
        ]
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value)
        .unwrap_or_else(|_| json!({ "error": "Failed to serialize value" }))
}

/// One row of a record listing.
#[derive(Debug, Clone)]
pub struct ListRow {
    /// Cells before the status column.
    pub cells: Vec<String>,
    /// Derived status.
    pub status: Status,
}

/// A list of records prepared for formatting.
#[derive(Debug, Clone)]
pub struct Listing {
    /// Table the records come from.
    pub table: Table,
    /// Column headers, status last.
    pub headers: Vec<&'static str>,
    /// Rows in display order.
    pub rows: Vec<ListRow>,
    /// Domain JSON of the records.
    pub json: Value,
}

impl Listing {
    /// Prepares records for formatting.
    pub fn from_records<T: Tabular>(records: &[T]) -> Self {
        let mut headers = T::headers().to_vec();
        headers.extend(["End", "Days", "Status"]);

        let rows = records
            .iter()
            .map(|record| {
                let lifecycle = record.lifecycle();
                let mut cells = record.cells();
                cells.push(or_dash(&lifecycle.end_date));
                cells.push(lifecycle.days_remaining.to_string());
                ListRow {
                    cells,
                    status: lifecycle.status,
                }
            })
            .collect();

        Self {
            table: T::Row::TABLE,
            headers,
            rows,
            json: to_json(records),
        }
    }
}

/// A single record prepared for formatting.
#[derive(Debug, Clone)]
pub struct Detail {
    /// Human-readable label.
    pub title: String,
    /// Labelled fields in display order.
    pub fields: Vec<(&'static str, String)>,
    /// Derived status.
    pub status: Status,
    /// Domain JSON of the record.
    pub json: Value,
}

impl Detail {
    /// Prepares a record for formatting.
    pub fn from_record<T: Tabular>(record: &T) -> Self {
        let lifecycle = record.lifecycle();
        let mut fields = vec![("ID", record.id().to_string()), ("Number", record.number().to_string())];
        fields.extend(record.fields());
        fields.extend([
            ("Start", or_dash(&lifecycle.start_date)),
            ("End", or_dash(&lifecycle.end_date)),
            ("Days remaining", lifecycle.days_remaining.to_string()),
            ("Override", lifecycle.manual_status.as_str().to_string()),
            ("Updated", timestamp(record.updated_at())),
        ]);

        Self {
            title: record.label(),
            fields,
            status: lifecycle.status,
            json: to_json(record),
        }
    }
}

/// Output formatter trait.
///
/// Defines the interface for formatting Tenure data in different output
/// formats.
pub trait OutputFormatter {
    /// Formats a list of records.
    fn format_list(&self, listing: &Listing) -> String;

    /// Formats a single record.
    fn format_detail(&self, detail: &Detail) -> String;

    /// Formats the dashboard summary.
    fn format_summary(&self, summary: &Summary) -> String;

    /// Formats audit log entries.
    fn format_audit(&self, entries: &[AuditEntry]) -> String;

    /// Formats a short result; `value` is the machine-readable form.
    fn format_message(&self, message: &str, value: &Value) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &anyhow::Error) -> String;
}

/// JSON output formatter.
///
/// Wraps every result in the standard success or error envelope.
pub struct JsonFormatter;

impl JsonFormatter {
    fn envelope(result: Value) -> String {
        serde_json::to_string_pretty(&SuccessEnvelope::new(result))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_list(&self, listing: &Listing) -> String {
        Self::envelope(json!({
            "table": listing.table,
            "records": listing.json,
            "total": listing.rows.len(),
        }))
    }

    fn format_detail(&self, detail: &Detail) -> String {
        Self::envelope(detail.json.clone())
    }

    fn format_summary(&self, summary: &Summary) -> String {
        Self::envelope(to_json(summary))
    }

    fn format_audit(&self, entries: &[AuditEntry]) -> String {
        Self::envelope(json!({
            "entries": entries,
            "total": entries.len(),
        }))
    }

    fn format_message(&self, _message: &str, value: &Value) -> String {
        Self::envelope(value.clone())
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        let envelope = match error.downcast_ref::<AppError>() {
            Some(app) => to_json(&ErrorEnvelope::from_error(app)),
            None => json!({ "code": "internal_error", "message": error.to_string() }),
        };
        serde_json::to_string_pretty(&envelope).unwrap_or_else(|_| error.to_string())
    }
}

/// Table output formatter.
///
/// Formats records as human-readable tables with colored status.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn render(builder: Builder) -> String {
        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }
}

impl OutputFormatter for TableFormatter {
    fn format_list(&self, listing: &Listing) -> String {
        if listing.rows.is_empty() {
            return format!("No {} found.", listing.table);
        }

        let mut builder = Builder::default();
        builder.push_record(listing.headers.iter().copied());
        for row in &listing.rows {
            let mut cells = row.cells.clone();
            cells.push(status_label(row.status, self.use_color));
            builder.push_record(cells);
        }

        Self::render(builder)
    }

    fn format_detail(&self, detail: &Detail) -> String {
        let mut output = format!("{}\n", detail.title);
        for (label, value) in &detail.fields {
            output.push_str(&format!("{:<16}{}\n", format!("{}:", label), value));
        }
        output.push_str(&format!(
            "{:<16}{}\n",
            "Status:",
            status_label(detail.status, self.use_color)
        ));
        output
    }

    fn format_summary(&self, summary: &Summary) -> String {
        let mut output = format!(
            "Status on {} (warning window: {} days)\n",
            summary.today, summary.warning_days
        );

        let mut counts = Builder::default();
        let mut header = vec!["Table".to_string()];
        header.extend(Status::ALL.iter().map(|s| status_label(*s, self.use_color)));
        header.push("Total".to_string());
        counts.push_record(header);
        for kind in &summary.kinds {
            let mut row = vec![kind.table.to_string()];
            row.extend(Status::ALL.iter().map(|s| kind.counts.get(*s).to_string()));
            row.push(kind.counts.total.to_string());
            counts.push_record(row);
        }
        output.push_str(&Self::render(counts));
        output.push('\n');

        let expiring: Vec<_> = summary
            .kinds
            .iter()
            .flat_map(|kind| kind.expiring.iter().map(move |e| (kind.table, e)))
            .collect();
        if expiring.is_empty() {
            output.push_str(&format!(
                "\nNothing ends within {} days.",
                summary.warning_days
            ));
            return output;
        }

        output.push_str("\nEnding soon\n");
        let mut soon = Builder::default();
        soon.push_record(["Table", "ID", "Record", "End", "Days"]);
        for (table, record) in expiring {
            soon.push_record([
                table.to_string(),
                record.id.clone(),
                record.label.clone(),
                record.end_date.clone(),
                record.days_remaining.to_string(),
            ]);
        }
        output.push_str(&Self::render(soon));
        output
    }

    fn format_audit(&self, entries: &[AuditEntry]) -> String {
        if entries.is_empty() {
            return "No audit entries found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(["At", "Actor", "Action", "Table", "Record", "Detail"]);
        for entry in entries {
            builder.push_record([
                entry.at.clone(),
                entry.actor.clone(),
                entry.action.to_string(),
                entry.table.to_string(),
                entry.record_id.clone(),
                entry.detail.clone(),
            ]);
        }
        Self::render(builder)
    }

    fn format_message(&self, message: &str, _value: &Value) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        if self.use_color {
            format!("{} {}", paint("Error:", Color::Red, true), error)
        } else {
            format!("Error: {}", error)
        }
    }
}

/// Plain text output formatter.
///
/// Tab-separated lines without colors or tables, for scripts.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_list(&self, listing: &Listing) -> String {
        if listing.rows.is_empty() {
            return format!("No {} found.", listing.table);
        }

        let mut output = String::new();
        for row in &listing.rows {
            output.push_str(&row.cells.join("\t"));
            output.push('\t');
            output.push_str(row.status.as_str());
            output.push('\n');
        }
        output
    }

    fn format_detail(&self, detail: &Detail) -> String {
        let mut output = String::new();
        for (label, value) in &detail.fields {
            output.push_str(&format!("{}\t{}\n", label, value));
        }
        output.push_str(&format!("Status\t{}\n", detail.status));
        output
    }

    fn format_summary(&self, summary: &Summary) -> String {
        let mut output = String::new();
        for kind in &summary.kinds {
            output.push_str(kind.table.as_str());
            for status in Status::ALL {
                output.push_str(&format!(" {}={}", status, kind.counts.get(status)));
            }
            output.push_str(&format!(" total={}\n", kind.counts.total));
        }
        for kind in &summary.kinds {
            for record in &kind.expiring {
                output.push_str(&format!(
                    "ending\t{}\t{}\t{}\t{}\n",
                    kind.table, record.id, record.end_date, record.days_remaining
                ));
            }
        }
        output
    }

    fn format_audit(&self, entries: &[AuditEntry]) -> String {
        let mut output = String::new();
        for entry in entries {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\n",
                entry.at, entry.actor, entry.action, entry.table, entry.record_id, entry.detail
            ));
        }
        output
    }

    fn format_message(&self, message: &str, _value: &Value) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (table only)
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
