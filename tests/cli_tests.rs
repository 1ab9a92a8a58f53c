//! Tests for the `order_sheets_cli` binary in dry-run mode (no network).
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::{json, Value};

fn cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_order_sheets_cli"))
        .args(args)
        .env_remove("SHEETS_ACCESS_TOKEN")
        .env_remove("SHEETS_API_BASE_URL")
        .env_remove("SHEETS_TIMEOUT_SECS")
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run order_sheets_cli")
}

fn write_json(dir: &Path, name: &str, value: &Value) -> String {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_vec(value).unwrap()).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_create_dry_run_prints_plan() {
    let output = cli(&["--dry-run", "create", "--title", "Orders"]);
    assert!(output.status.success());

    let plan: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["create"]["properties"]["title"], "Orders");
    assert_eq!(plan["setup"]["requests"].as_array().unwrap().len(), 4);
}

#[test]
fn test_create_dry_run_rejects_blank_title() {
    let output = cli(&["--dry-run", "create", "--title", "  "]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Spreadsheet title must not be empty"), "{stderr}");
}

#[test]
fn test_usage_error_exits_with_one() {
    let output = cli(&["create"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_help_exits_successfully() {
    let output = cli(&["--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("sync"));
}

#[test]
fn test_sync_dry_run_prints_batch() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write_json(
        dir.path(),
        "ref.json",
        &json!({"spreadsheetId": "abc", "dataSheetId": 7, "pivotSheetId": 8}),
    );
    let orders = write_json(
        dir.path(),
        "orders.json",
        &json!([
            {"id": 1, "customerName": "A", "productCode": "X1", "unitsOrdered": 3, "unitPrice": 9.5, "status": "PENDING"},
            {"id": 2, "customerName": "B", "productCode": "X2", "unitsOrdered": 1, "unitPrice": 4.0, "status": "SHIPPED"}
        ]),
    );

    let output = cli(&[
        "sync",
        "--dry-run",
        "--reference",
        &reference,
        "--orders",
        &orders,
    ]);
    assert!(output.status.success());

    let batch: Value = serde_json::from_slice(&output.stdout).unwrap();
    let resize = &batch["requests"][0]["updateSheetProperties"];
    assert_eq!(resize["properties"]["sheetId"], 7);
    assert_eq!(resize["properties"]["gridProperties"]["rowCount"], 3);
    let rows = batch["requests"][1]["updateCells"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_sync_without_token_fails() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write_json(
        dir.path(),
        "ref.json",
        &json!({"spreadsheetId": "abc", "dataSheetId": 7, "pivotSheetId": 8}),
    );
    let orders = write_json(dir.path(), "orders.json", &json!([]));

    let output = cli(&["sync", "--reference", &reference, "--orders", &orders]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SHEETS_ACCESS_TOKEN is not set"), "{stderr}");
}

#[test]
fn test_invalid_timeout_flag_fails_before_sending() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write_json(
        dir.path(),
        "ref.json",
        &json!({"spreadsheetId": "abc", "dataSheetId": 7, "pivotSheetId": 8}),
    );
    let orders = write_json(dir.path(), "orders.json", &json!([]));

    let output = cli(&[
        "sync",
        "--token",
        "t",
        "--timeout-secs",
        "0",
        "--reference",
        &reference,
        "--orders",
        &orders,
    ]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("timeout must be greater than zero"), "{stderr}");
}
