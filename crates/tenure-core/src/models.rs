// Rust guideline compliant 2026-10-12

//! Core data models for Tenure.
//!
//! Each record kind has a storage row (snake_case, ISO dates, persisted) and
//! a domain object (camelCase, display dates, derived day count and status).
//! Domain objects are rebuilt from rows on every read.

use crate::lifecycle::{LifecycleColumns, LifecycleView};
use crate::status::ManualStatus;
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    /// Contracts.
    Contracts,
    /// Price-registration minutes.
    Minutes,
    /// Contract amendments.
    Amendments,
    /// Audit log.
    Audit,
}

impl Table {
    /// Returns the table name.
    pub fn as_str(self) -> &'static str {
        match self {
            Table::Contracts => "contracts",
            Table::Minutes => "minutes",
            Table::Amendments => "amendments",
            Table::Audit => "audit",
        }
    }

    /// Returns the JSONL file name backing the table.
    pub fn file_name(self) -> &'static str {
        match self {
            Table::Contracts => "contracts.jsonl",
            Table::Minutes => "minutes.jsonl",
            Table::Amendments => "amendments.jsonl",
            Table::Audit => "audit.jsonl",
        }
    }

    /// Returns the ID prefix for records in the table.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Table::Contracts => "ctr",
            Table::Minutes => "min",
            Table::Amendments => "amd",
            Table::Audit => "aud",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Table {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "contracts" | "contract" => Ok(Table::Contracts),
            "minutes" | "minute" | "atas" | "ata" => Ok(Table::Minutes),
            "amendments" | "amendment" => Ok(Table::Amendments),
            "audit" => Ok(Table::Audit),
            _ => Err(Error::InvalidValue(format!("Unknown table: {}", value))),
        }
    }
}

/// Kind of contract amendment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmendmentKind {
    /// Extends or changes the term.
    Term,
    /// Changes the value.
    Value,
    /// Changes both term and value.
    TermAndValue,
    /// Anything else.
    #[default]
    Other,
}

impl AmendmentKind {
    /// Returns the snake_case name.
    pub fn as_str(self) -> &'static str {
        match self {
            AmendmentKind::Term => "term",
            AmendmentKind::Value => "value",
            AmendmentKind::TermAndValue => "term_and_value",
            AmendmentKind::Other => "other",
        }
    }
}

impl fmt::Display for AmendmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AmendmentKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().replace('-', "_").as_str() {
            "term" => Ok(AmendmentKind::Term),
            "value" => Ok(AmendmentKind::Value),
            "term_and_value" => Ok(AmendmentKind::TermAndValue),
            "other" => Ok(AmendmentKind::Other),
            _ => Err(Error::InvalidValue(format!(
                "Unknown amendment kind: {}",
                value
            ))),
        }
    }
}

/// Field values supplied when creating or editing a record.
///
/// Dates are in display form. `None` means "not supplied"; fields that do not
/// apply to a record kind are ignored by it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordInput {
    /// Record number, e.g. `012/2030`.
    pub number: Option<String>,
    /// Supplier name.
    pub supplier: Option<String>,
    /// Object of the record.
    pub object: Option<String>,
    /// Responsible department (contracts).
    pub department: Option<String>,
    /// Free-form description (amendments).
    pub description: Option<String>,
    /// Monetary value.
    pub value: Option<f64>,
    /// Reference to an attached document (contracts).
    pub attachment: Option<String>,
    /// Parent contract (amendments).
    pub contract_id: Option<String>,
    /// Amendment kind (amendments).
    pub kind: Option<AmendmentKind>,
    /// Start date, `DD/MM/YYYY`.
    pub start_date: Option<String>,
    /// End date, `DD/MM/YYYY`.
    pub end_date: Option<String>,
    /// Manual override.
    pub manual_status: Option<ManualStatus>,
}

impl RecordInput {
    fn lifecycle(&self) -> LifecycleColumns {
        LifecycleColumns::from_display(
            self.start_date.as_deref().unwrap_or_default(),
            self.end_date.as_deref().unwrap_or_default(),
            self.manual_status.unwrap_or_default(),
        )
    }

    fn apply_lifecycle(&self, columns: &mut LifecycleColumns) {
        columns.apply_display(
            self.start_date.as_deref(),
            self.end_date.as_deref(),
            self.manual_status,
        );
    }

    fn required_number(&self) -> Result<String> {
        match self.number.as_deref().map(str::trim) {
            Some(number) if !number.is_empty() => Ok(number.to_string()),
            _ => Err(Error::InvalidRecord("Number cannot be empty".to_string())),
        }
    }
}

/// A persisted row that can be stored by key.
pub trait Keyed: Serialize + DeserializeOwned + Clone {
    /// Returns the row's unique key.
    fn key(&self) -> &str;

    /// Validates the row before it is written or after it is read.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRecord` describing the first problem found.
    fn validate(&self) -> Result<()> {
        if self.key().trim().is_empty() {
            return Err(Error::InvalidRecord("ID cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// A storage row of a lifecycle record kind.
pub trait Row: Keyed {
    /// Table the row lives in.
    const TABLE: Table;

    /// Builds a new row from input.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing.
    fn from_input(id: String, input: &RecordInput, now: i64) -> Result<Self>;

    /// Applies the supplied fields of `input` and stamps `updated_at`.
    fn apply(&mut self, input: &RecordInput, now: i64);

    /// Returns the record number.
    fn number(&self) -> &str;

    /// Returns the lifecycle columns.
    fn lifecycle(&self) -> &LifecycleColumns;
}

/// A domain object derived from a [`Row`].
pub trait Record: Serialize + Clone + Send {
    /// Backing row type.
    type Row: Row;

    /// Derives the domain object against a reference date.
    fn from_row(row: Self::Row, today: NaiveDate, warning_days: u32) -> Self;

    /// Converts back to a storage row, dropping derived fields.
    fn to_row(&self) -> Self::Row;

    /// Returns the record ID.
    fn id(&self) -> &str;

    /// Returns the record number.
    fn number(&self) -> &str;

    /// Returns the derived lifecycle fields.
    fn lifecycle(&self) -> &LifecycleView;

    /// Returns the texts matched by free-text search.
    fn search_fields(&self) -> Vec<&str>;

    /// Returns the last update timestamp.
    fn updated_at(&self) -> i64;

    /// Returns the ID of the record this one belongs to, if any.
    fn parent_id(&self) -> Option<&str> {
        None
    }

    /// Returns a one-line human label.
    fn label(&self) -> String;
}

fn validate_lifecycle_row<R: Row>(row: &R) -> Result<()> {
    if row.key().trim().is_empty() {
        return Err(Error::InvalidRecord("ID cannot be empty".to_string()));
    }
    if row.number().trim().is_empty() {
        return Err(Error::InvalidRecord(format!(
            "{} number cannot be empty",
            R::TABLE
        )));
    }
    row.lifecycle().check_order()
}

fn set_text(target: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        *target = value.trim().to_string();
    }
}

fn text(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}

// ---------------------------------------------------------------------------
// Contracts
// ---------------------------------------------------------------------------

/// A contract as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractRow {
    /// Unique identifier (`ctr-XXXXXXXX`).
    pub id: String,
    /// Contract number.
    pub number: String,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub value: Option<f64>,
    /// Reference to the signed document.
    #[serde(default)]
    pub attachment: Option<String>,
    #[serde(flatten)]
    pub lifecycle: LifecycleColumns,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Keyed for ContractRow {
    fn key(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        validate_lifecycle_row(self)
    }
}

impl Row for ContractRow {
    const TABLE: Table = Table::Contracts;

    fn from_input(id: String, input: &RecordInput, now: i64) -> Result<Self> {
        Ok(Self {
            id,
            number: input.required_number()?,
            supplier: text(&input.supplier),
            object: text(&input.object),
            department: text(&input.department),
            value: input.value,
            attachment: input.attachment.clone(),
            lifecycle: input.lifecycle(),
            created_at: now,
            updated_at: now,
        })
    }

    fn apply(&mut self, input: &RecordInput, now: i64) {
        set_text(&mut self.number, &input.number);
        set_text(&mut self.supplier, &input.supplier);
        set_text(&mut self.object, &input.object);
        set_text(&mut self.department, &input.department);
        if input.value.is_some() {
            self.value = input.value;
        }
        if input.attachment.is_some() {
            self.attachment = input.attachment.clone();
        }
        input.apply_lifecycle(&mut self.lifecycle);
        self.updated_at = now;
    }

    fn number(&self) -> &str {
        &self.number
    }

    fn lifecycle(&self) -> &LifecycleColumns {
        &self.lifecycle
    }
}

/// A contract as presented to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub number: String,
    pub supplier: String,
    pub object: String,
    pub department: String,
    pub value: Option<f64>,
    pub attachment: Option<String>,
    #[serde(flatten)]
    pub lifecycle: LifecycleView,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Record for Contract {
    type Row = ContractRow;

    fn from_row(row: ContractRow, today: NaiveDate, warning_days: u32) -> Self {
        let lifecycle = row.lifecycle.resolve(today, warning_days);
        Self {
            id: row.id,
            number: row.number,
            supplier: row.supplier,
            object: row.object,
            department: row.department,
            value: row.value,
            attachment: row.attachment,
            lifecycle,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    fn to_row(&self) -> ContractRow {
        ContractRow {
            id: self.id.clone(),
            number: self.number.clone(),
            supplier: self.supplier.clone(),
            object: self.object.clone(),
            department: self.department.clone(),
            value: self.value,
            attachment: self.attachment.clone(),
            lifecycle: self.lifecycle.to_columns(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn number(&self) -> &str {
        &self.number
    }

    fn lifecycle(&self) -> &LifecycleView {
        &self.lifecycle
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.number.as_str(),
            self.supplier.as_str(),
            self.object.as_str(),
            self.department.as_str(),
        ]
    }

    fn updated_at(&self) -> i64 {
        self.updated_at
    }

    fn label(&self) -> String {
        format!("Contract {} ({})", self.number, self.supplier)
    }
}

// ---------------------------------------------------------------------------
// Minutes
// ---------------------------------------------------------------------------

/// A price-registration minute as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinuteRow {
    /// Unique identifier (`min-XXXXXXXX`).
    pub id: String,
    pub number: String,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(flatten)]
    pub lifecycle: LifecycleColumns,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Keyed for MinuteRow {
    fn key(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        validate_lifecycle_row(self)
    }
}

impl Row for MinuteRow {
    const TABLE: Table = Table::Minutes;

    fn from_input(id: String, input: &RecordInput, now: i64) -> Result<Self> {
        Ok(Self {
            id,
            number: input.required_number()?,
            supplier: text(&input.supplier),
            object: text(&input.object),
            value: input.value,
            lifecycle: input.lifecycle(),
            created_at: now,
            updated_at: now,
        })
    }

    fn apply(&mut self, input: &RecordInput, now: i64) {
        set_text(&mut self.number, &input.number);
        set_text(&mut self.supplier, &input.supplier);
        set_text(&mut self.object, &input.object);
        if input.value.is_some() {
            self.value = input.value;
        }
        input.apply_lifecycle(&mut self.lifecycle);
        self.updated_at = now;
    }

    fn number(&self) -> &str {
        &self.number
    }

    fn lifecycle(&self) -> &LifecycleColumns {
        &self.lifecycle
    }
}

/// A price-registration minute as presented to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Minute {
    pub id: String,
    pub number: String,
    pub supplier: String,
    pub object: String,
    pub value: Option<f64>,
    #[serde(flatten)]
    pub lifecycle: LifecycleView,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Record for Minute {
    type Row = MinuteRow;

    fn from_row(row: MinuteRow, today: NaiveDate, warning_days: u32) -> Self {
        let lifecycle = row.lifecycle.resolve(today, warning_days);
        Self {
            id: row.id,
            number: row.number,
            supplier: row.supplier,
            object: row.object,
            value: row.value,
            lifecycle,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    fn to_row(&self) -> MinuteRow {
        MinuteRow {
            id: self.id.clone(),
            number: self.number.clone(),
            supplier: self.supplier.clone(),
            object: self.object.clone(),
            value: self.value,
            lifecycle: self.lifecycle.to_columns(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn number(&self) -> &str {
        &self.number
    }

    fn lifecycle(&self) -> &LifecycleView {
        &self.lifecycle
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.number.as_str(), self.supplier.as_str(), self.object.as_str()]
    }

    fn updated_at(&self) -> i64 {
        self.updated_at
    }

    fn label(&self) -> String {
        format!("Minute {} ({})", self.number, self.supplier)
    }
}

// ---------------------------------------------------------------------------
// Amendments
// ---------------------------------------------------------------------------

/// A contract amendment as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmendmentRow {
    /// Unique identifier (`amd-XXXXXXXX`).
    pub id: String,
    /// Amended contract.
    pub contract_id: String,
    pub number: String,
    #[serde(default)]
    pub kind: AmendmentKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(flatten)]
    pub lifecycle: LifecycleColumns,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Keyed for AmendmentRow {
    fn key(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        if self.contract_id.trim().is_empty() {
            return Err(Error::InvalidRecord(
                "Amendment must reference a contract".to_string(),
            ));
        }
        validate_lifecycle_row(self)
    }
}

impl Row for AmendmentRow {
    const TABLE: Table = Table::Amendments;

    fn from_input(id: String, input: &RecordInput, now: i64) -> Result<Self> {
        let contract_id = text(&input.contract_id);
        if contract_id.is_empty() {
            return Err(Error::InvalidRecord(
                "Amendment must reference a contract".to_string(),
            ));
        }

        Ok(Self {
            id,
            contract_id,
            number: input.required_number()?,
            kind: input.kind.unwrap_or_default(),
            description: text(&input.description),
            value: input.value,
            lifecycle: input.lifecycle(),
            created_at: now,
            updated_at: now,
        })
    }

    fn apply(&mut self, input: &RecordInput, now: i64) {
        set_text(&mut self.number, &input.number);
        set_text(&mut self.description, &input.description);
        if let Some(kind) = input.kind {
            self.kind = kind;
        }
        if input.value.is_some() {
            self.value = input.value;
        }
        input.apply_lifecycle(&mut self.lifecycle);
        self.updated_at = now;
    }

    fn number(&self) -> &str {
        &self.number
    }

    fn lifecycle(&self) -> &LifecycleColumns {
        &self.lifecycle
    }
}

/// A contract amendment as presented to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Amendment {
    pub id: String,
    pub contract_id: String,
    pub number: String,
    pub kind: AmendmentKind,
    pub description: String,
    pub value: Option<f64>,
    #[serde(flatten)]
    pub lifecycle: LifecycleView,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Record for Amendment {
    type Row = AmendmentRow;

    fn from_row(row: AmendmentRow, today: NaiveDate, warning_days: u32) -> Self {
        let lifecycle = row.lifecycle.resolve(today, warning_days);
        Self {
            id: row.id,
            contract_id: row.contract_id,
            number: row.number,
            kind: row.kind,
            description: row.description,
            value: row.value,
            lifecycle,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    fn to_row(&self) -> AmendmentRow {
        AmendmentRow {
            id: self.id.clone(),
            contract_id: self.contract_id.clone(),
            number: self.number.clone(),
            kind: self.kind,
            description: self.description.clone(),
            value: self.value,
            lifecycle: self.lifecycle.to_columns(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn number(&self) -> &str {
        &self.number
    }

    fn lifecycle(&self) -> &LifecycleView {
        &self.lifecycle
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.number.as_str(), self.description.as_str(), self.contract_id.as_str()]
    }

    fn updated_at(&self) -> i64 {
        self.updated_at
    }

    fn parent_id(&self) -> Option<&str> {
        Some(&self.contract_id)
    }

    fn label(&self) -> String {
        format!("Amendment {} to {}", self.number, self.contract_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Status;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, 1).unwrap()
    }

    fn contract_input() -> RecordInput {
        RecordInput {
            number: Some(" 012/2030 ".to_string()),
            supplier: Some("Acme Ltda".to_string()),
            object: Some("Street lighting maintenance".to_string()),
            department: Some("Public Works".to_string()),
            value: Some(125_000.5),
            start_date: Some("01/01/2030".to_string()),
            end_date: Some("31/12/2030".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_contract_row_from_input() {
        let row = ContractRow::from_input("ctr-00000001".to_string(), &contract_input(), 100).unwrap();
        assert_eq!(row.number, "012/2030");
        assert_eq!(row.lifecycle.start_date.as_deref(), Some("2030-01-01"));
        assert_eq!(row.lifecycle.end_date.as_deref(), Some("2030-12-31"));
        assert_eq!(row.created_at, 100);
        assert!(row.validate().is_ok());
    }

    #[test]
    fn test_number_required() {
        let input = RecordInput {
            number: Some("   ".to_string()),
            ..contract_input()
        };
        assert!(ContractRow::from_input("ctr-00000001".to_string(), &input, 0).is_err());
    }

    #[test]
    fn test_row_json_uses_snake_case() {
        let row = ContractRow::from_input("ctr-00000001".to_string(), &contract_input(), 100).unwrap();
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["start_date"], "2030-01-01");
        assert_eq!(json["end_date"], "2030-12-31");
        assert!(json["manual_status"].is_null());
        assert_eq!(json["created_at"], 100);
        assert!(json.get("startDate").is_none());
    }

    #[test]
    fn test_domain_json_uses_camel_case() {
        let row = ContractRow::from_input("ctr-00000001".to_string(), &contract_input(), 100).unwrap();
        let contract = Contract::from_row(row, today(), 30);
        let json = serde_json::to_value(&contract).unwrap();
        assert_eq!(json["startDate"], "01/01/2030");
        assert_eq!(json["endDate"], "31/12/2030");
        assert_eq!(json["daysRemaining"], 213);
        assert_eq!(json["status"], "active");
        assert!(json["manualStatus"].is_null());
        assert_eq!(json["createdAt"], 100);
    }

    #[test]
    fn test_row_deserializes_null_and_unknown_override() {
        let line = r#"{"id":"min-00000001","number":"3/2030","end_date":"2030-05-01","manual_status":"archived","created_at":1,"updated_at":1}"#;
        let row: MinuteRow = serde_json::from_str(line).unwrap();
        assert_eq!(row.lifecycle.manual_status, ManualStatus::Automatic);
        assert_eq!(row.lifecycle.start_date, None);

        let minute = Minute::from_row(row, today(), 30);
        assert_eq!(minute.lifecycle.days_remaining, -31);
        assert_eq!(minute.lifecycle.status, Status::Expired);
    }

    #[test]
    fn test_domain_round_trips_to_row() {
        let row = ContractRow::from_input("ctr-00000001".to_string(), &contract_input(), 100).unwrap();
        let contract = Contract::from_row(row.clone(), today(), 30);
        assert_eq!(contract.to_row(), row);
    }

    #[test]
    fn test_apply_only_touches_supplied_fields() {
        let mut row = ContractRow::from_input("ctr-00000001".to_string(), &contract_input(), 100).unwrap();
        let patch = RecordInput {
            supplier: Some("Beta SA".to_string()),
            manual_status: Some(ManualStatus::Executed),
            ..Default::default()
        };
        row.apply(&patch, 200);
        assert_eq!(row.supplier, "Beta SA");
        assert_eq!(row.number, "012/2030");
        assert_eq!(row.lifecycle.manual_status, ManualStatus::Executed);
        assert_eq!(row.updated_at, 200);
        assert_eq!(row.created_at, 100);
    }

    #[test]
    fn test_amendment_requires_contract() {
        let input = RecordInput {
            number: Some("1".to_string()),
            ..Default::default()
        };
        assert!(AmendmentRow::from_input("amd-00000001".to_string(), &input, 0).is_err());

        let input = RecordInput {
            contract_id: Some("ctr-00000001".to_string()),
            kind: Some(AmendmentKind::Term),
            ..input
        };
        let row = AmendmentRow::from_input("amd-00000001".to_string(), &input, 0).unwrap();
        assert_eq!(row.kind, AmendmentKind::Term);
    }

    #[test]
    fn test_validate_rejects_inverted_dates() {
        let input = RecordInput {
            start_date: Some("01/02/2031".to_string()),
            ..contract_input()
        };
        let row = ContractRow::from_input("ctr-00000001".to_string(), &input, 0).unwrap();
        assert!(row.validate().is_err());
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("term-and-value".parse::<AmendmentKind>().unwrap(), AmendmentKind::TermAndValue);
        assert_eq!("atas".parse::<Table>().unwrap(), Table::Minutes);
        assert!("users".parse::<Table>().is_err());
    }
}
