// Rust guideline compliant 2026-10-12

//! Unit tests for output formatting module.

use chrono::NaiveDate;
use tenure_app::AppError;
use tenure_cli::{create_formatter, Detail, Listing};
use tenure_core::{
    AuditAction, AuditEntry, Contract, ContractRow, LifecycleColumns, ManualStatus, OutputFormat,
    Record, Table,
};

fn create_test_contract(id: &str, end: &str, manual: ManualStatus) -> Contract {
    let row = ContractRow {
        id: id.to_string(),
        number: "012/2030".to_string(),
        supplier: "Acme Ltda".to_string(),
        object: "School meals".to_string(),
        department: "Education".to_string(),
        value: Some(125000.5),
        attachment: None,
        lifecycle: LifecycleColumns {
            start_date: Some("2030-01-01".to_string()),
            end_date: Some(end.to_string()),
            manual_status: manual,
        },
        created_at: 1_893_456_000,
        updated_at: 1_893_456_000,
    };
    Contract::from_row(row, NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(), 30)
}

fn create_test_entry() -> AuditEntry {
    AuditEntry {
        id: "aud-0a1b2c3d".to_string(),
        at: "2030-06-01T10:00:00-03:00".to_string(),
        actor: "admin".to_string(),
        action: AuditAction::Update,
        table: Table::Contracts,
        record_id: "ctr-1a2b3c4d".to_string(),
        detail: "Contract 012/2030 (Acme Ltda)".to_string(),
    }
}

#[test]
fn test_json_formatter_list_uses_envelope_and_camel_case() {
    let records = vec![
        create_test_contract("ctr-1a2b3c4d", "2030-12-31", ManualStatus::Automatic),
        create_test_contract("ctr-5e6f7a8b", "2030-06-10", ManualStatus::Automatic),
    ];
    let formatter = create_formatter(OutputFormat::Json, false);
    let output = formatter.format_list(&Listing::from_records(&records));

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["result"]["table"], "contracts");
    assert_eq!(json["result"]["total"], 2);
    assert_eq!(json["result"]["records"][0]["endDate"], "31/12/2030");
    assert_eq!(json["result"]["records"][1]["daysRemaining"], 9);
    assert_eq!(json["result"]["records"][1]["status"], "warning");
}

#[test]
fn test_json_formatter_error_uses_error_code() {
    let formatter = create_formatter(OutputFormat::Json, false);
    let error = anyhow::Error::new(AppError::InvalidInput("bad date".to_string()));
    let output = formatter.format_error(&error);

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["code"], "invalid_input");
    assert_eq!(json["message"], "Invalid input: bad date");
}

#[test]
fn test_json_formatter_error_without_app_error() {
    let formatter = create_formatter(OutputFormat::Json, false);
    let output = formatter.format_error(&anyhow::anyhow!("boom"));
    assert!(output.contains("internal_error"));
    assert!(output.contains("boom"));
}

#[test]
fn test_table_formatter_list() {
    let records = vec![create_test_contract(
        "ctr-1a2b3c4d",
        "2030-05-01",
        ManualStatus::Automatic,
    )];
    let formatter = create_formatter(OutputFormat::Table, false);
    let output = formatter.format_list(&Listing::from_records(&records));

    assert!(output.contains("ctr-1a2b3c4d"));
    assert!(output.contains("01/05/2030"));
    assert!(output.contains("-31"));
    assert!(output.contains("expired"));
    assert!(output.contains("Department"));
}

#[test]
fn test_table_formatter_empty_list() {
    let formatter = create_formatter(OutputFormat::Table, false);
    let output = formatter.format_list(&Listing::from_records::<Contract>(&[]));
    assert_eq!(output, "No contracts found.");
}

#[test]
fn test_table_formatter_detail_shows_override() {
    let contract = create_test_contract("ctr-1a2b3c4d", "2030-05-01", ManualStatus::Executed);
    let formatter = create_formatter(OutputFormat::Table, false);
    let output = formatter.format_detail(&Detail::from_record(&contract));

    assert!(output.starts_with(&contract.label()));
    assert!(output.contains("Override:       executed"));
    assert!(output.contains("Status:         executed"));
    assert!(output.contains("Value:          125000.50"));
    assert!(output.contains("Attachment:     -"));
}

#[test]
fn test_table_formatter_colors_status_when_enabled() {
    let records = vec![create_test_contract(
        "ctr-1a2b3c4d",
        "2030-06-10",
        ManualStatus::Automatic,
    )];
    let plain = create_formatter(OutputFormat::Table, false)
        .format_list(&Listing::from_records(&records));
    let colored = create_formatter(OutputFormat::Table, true)
        .format_list(&Listing::from_records(&records));

    assert!(!plain.contains('\u{1b}'));
    assert!(colored.contains('\u{1b}'));
}

#[test]
fn test_plain_formatter_list_is_tab_separated() {
    let records = vec![create_test_contract(
        "ctr-1a2b3c4d",
        "2030-12-31",
        ManualStatus::Rescinded,
    )];
    let formatter = create_formatter(OutputFormat::Plain, false);
    let output = formatter.format_list(&Listing::from_records(&records));

    assert_eq!(
        output,
        "ctr-1a2b3c4d\t012/2030\tAcme Ltda\tEducation\t31/12/2030\t213\trescinded\n"
    );
}

#[test]
fn test_audit_formatters() {
    let entries = vec![create_test_entry()];

    let table = create_formatter(OutputFormat::Table, false).format_audit(&entries);
    assert!(table.contains("ctr-1a2b3c4d"));
    assert!(table.contains("update"));

    let plain = create_formatter(OutputFormat::Plain, false).format_audit(&entries);
    assert!(plain.starts_with("2030-06-01T10:00:00-03:00\tadmin\tupdate\tcontracts"));

    let json = create_formatter(OutputFormat::Json, false).format_audit(&entries);
    let json: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(json["result"]["total"], 1);
    assert_eq!(json["result"]["entries"][0]["record_id"], "ctr-1a2b3c4d");

    let empty = create_formatter(OutputFormat::Table, false).format_audit(&[]);
    assert_eq!(empty, "No audit entries found.");
}

#[test]
fn test_message_formatters() {
    let value = serde_json::json!({ "storage": "2030-12-31" });

    let table = create_formatter(OutputFormat::Table, false).format_message("2030-12-31", &value);
    assert_eq!(table, "2030-12-31");

    let json = create_formatter(OutputFormat::Json, false).format_message("2030-12-31", &value);
    let json: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(json["result"]["storage"], "2030-12-31");
}
