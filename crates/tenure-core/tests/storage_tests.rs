// Rust guideline compliant 2026-10-12

//! Unit tests for the storage module.
//!
//! These tests validate specific examples, edge cases, and error conditions.

use tenure_core::{ContractRow, Error, LifecycleColumns, ManualStatus, Storage};
use std::fs;
use tempfile::TempDir;

/// Helper to create a test contract row.
fn create_test_row(id: &str, number: &str) -> ContractRow {
    ContractRow {
        id: id.to_string(),
        number: number.to_string(),
        supplier: "Acme Ltda".to_string(),
        object: "Road paving".to_string(),
        department: "Public Works".to_string(),
        value: Some(10_000.0),
        attachment: None,
        lifecycle: LifecycleColumns {
            start_date: Some("2030-01-01".to_string()),
            end_date: Some("2030-12-31".to_string()),
            manual_status: ManualStatus::Automatic,
        },
        created_at: 1000,
        updated_at: 1000,
    }
}

fn open_storage(temp_dir: &TempDir) -> Storage<ContractRow> {
    Storage::new(temp_dir.path().join("contracts.jsonl")).expect("Failed to create storage")
}

#[test]
fn test_empty_file_handling() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = open_storage(&temp_dir);

    let rows = storage.load_all().expect("Failed to load rows");
    assert!(rows.is_empty(), "Missing file should be an empty table");
}

#[test]
fn test_empty_path_rejected() {
    let result = Storage::<ContractRow>::new(std::path::PathBuf::new());
    assert!(result.is_err());
}

#[test]
fn test_malformed_json_lines_are_skipped() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = open_storage(&temp_dir);

    let content = r#"{"id":"ctr-00000001","number":"1/2030","end_date":"2030-12-31","manual_status":null,"created_at":1,"updated_at":1}
{not json at all

{"id":"ctr-00000002","number":"2/2030","created_at":1,"updated_at":1}
"#;
    fs::write(storage.path(), content).expect("Failed to write test file");

    let rows = storage.load_all().expect("Failed to load rows");
    assert_eq!(rows.len(), 2, "Should load the two valid rows");
    assert_eq!(rows[0].id, "ctr-00000001");
    assert_eq!(rows[1].id, "ctr-00000002");
    assert_eq!(rows[1].lifecycle.end_date, None);
}

#[test]
fn test_invalid_stored_row_does_not_block_the_table() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = open_storage(&temp_dir);
    storage
        .save(&create_test_row("ctr-00000001", "1/2030"))
        .expect("Failed to save row");

    let mut bad = create_test_row("ctr-bad00001", "2/2030");
    bad.lifecycle.start_date = Some("2031-01-01".to_string());
    bad.lifecycle.end_date = Some("2030-01-01".to_string());
    let mut content = fs::read_to_string(storage.path()).expect("Failed to read file");
    content.push_str(&serde_json::to_string(&bad).expect("Failed to serialize row"));
    content.push('\n');
    fs::write(storage.path(), content).expect("Failed to write test file");

    let rows = storage.load_all().expect("Failed to load rows");
    assert_eq!(rows.len(), 2, "Invalid row should still be loaded");
    assert_eq!(
        storage.load_by_id("ctr-00000001").expect("Failed to load row").number,
        "1/2030"
    );

    // Writing another row keeps the invalid one on disk.
    storage
        .save(&create_test_row("ctr-00000003", "3/2030"))
        .expect("Failed to save row alongside invalid row");
    assert_eq!(storage.load_all().expect("Failed to load rows").len(), 3);

    storage.delete("ctr-bad00001").expect("Failed to delete invalid row");
    let ids: Vec<String> = storage
        .load_all()
        .expect("Failed to load rows")
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["ctr-00000001", "ctr-00000003"]);
}

#[test]
fn test_insert_refuses_existing_key() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = open_storage(&temp_dir);
    let original = create_test_row("ctr-00000001", "1/2030");
    storage.insert(&original).expect("Failed to insert row");

    let mut clash = create_test_row("ctr-00000001", "9/2030");
    clash.supplier = "Beta SA".to_string();
    let result = storage.with_lock(|| storage.insert(&clash));
    assert!(matches!(result, Err(Error::DuplicateKey(id)) if id == "ctr-00000001"));

    let all = storage.load_all().expect("Failed to load rows");
    assert_eq!(all, vec![original]);
}

#[test]
fn test_save_and_load_by_id() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = open_storage(&temp_dir);
    let row = create_test_row("ctr-00000001", "1/2030");

    storage.save(&row).expect("Failed to save row");

    let loaded = storage
        .load_by_id("ctr-00000001")
        .expect("Failed to load row");
    assert_eq!(loaded, row);
}

#[test]
fn test_update_existing_row() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = open_storage(&temp_dir);
    let mut row = create_test_row("ctr-00000001", "1/2030");

    storage.save(&row).expect("Failed to save row");
    row.supplier = "Beta SA".to_string();
    storage.save(&row).expect("Failed to update row");

    let all = storage.load_all().expect("Failed to load rows");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].supplier, "Beta SA");
}

#[test]
fn test_save_rejects_invalid_row() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = open_storage(&temp_dir);
    let mut row = create_test_row("ctr-00000001", "1/2030");
    row.lifecycle.start_date = Some("2031-01-01".to_string());

    assert!(storage.save(&row).is_err());
    assert!(!storage.path().exists(), "Nothing should have been written");
}

#[test]
fn test_rows_are_stored_one_per_line() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = open_storage(&temp_dir);
    storage
        .save_all(&[
            create_test_row("ctr-00000001", "1/2030"),
            create_test_row("ctr-00000002", "2/2030"),
        ])
        .expect("Failed to save rows");

    let content = fs::read_to_string(storage.path()).expect("Failed to read file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("\"start_date\":\"2030-01-01\""));
    assert!(lines[0].contains("\"manual_status\":null"));
    assert!(!temp_dir.path().join("contracts.jsonl.tmp").exists());
}

#[test]
fn test_append_keeps_existing_rows() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = open_storage(&temp_dir);

    storage
        .append(&create_test_row("ctr-00000001", "1/2030"))
        .expect("Failed to append");
    storage
        .append(&create_test_row("ctr-00000002", "2/2030"))
        .expect("Failed to append");

    let rows = storage.load_all().expect("Failed to load rows");
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_delete_row() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = open_storage(&temp_dir);
    storage
        .save_all(&[
            create_test_row("ctr-00000001", "1/2030"),
            create_test_row("ctr-00000002", "2/2030"),
        ])
        .expect("Failed to save rows");

    storage.delete("ctr-00000001").expect("Failed to delete row");

    assert!(matches!(
        storage.load_by_id("ctr-00000001"),
        Err(Error::NotFound(_))
    ));
    assert!(storage.load_by_id("ctr-00000002").is_ok());
}

#[test]
fn test_delete_nonexistent_row() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = open_storage(&temp_dir);

    assert!(matches!(
        storage.delete("ctr-ffffffff"),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn test_lock_is_reacquirable() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = open_storage(&temp_dir);

    let result = storage.with_lock(|| storage.save(&create_test_row("ctr-00000001", "1/2030")));
    assert!(result.is_ok(), "Lock operation should succeed");

    let result = storage.with_lock(|| storage.load_all());
    assert_eq!(result.expect("Lock should be released").len(), 1);
}
