//! FILENAME: tests/test_save.rs
//! Integration tests for saving the working table back to XLSX.

mod common;

use app_lib::AppError;
use common::TestHarness;
use engine::{CellValue, LEDGER_HEAD};
use persistence::{load_workbook, SaveError};

#[test]
fn test_save_round_trip() {
    let mut harness = TestHarness::with_sample_ledger();
    harness.session.add_columns(&["LEDGER HEAD", "IGST"]).unwrap();
    harness.session.derive_ledger_head(&["Debit", "Credit"]).unwrap();

    let output = harness.path("normalized.xlsx");
    harness.session.save(&output).unwrap();

    let saved = load_workbook(&output, "PR").unwrap();
    assert_eq!(saved.sheet_names, vec!["PR April"]);

    let grid = &saved.grid;
    // Header row plus six data rows; title and summary rows are gone.
    assert_eq!(grid.row_count, 7);
    assert_eq!(grid.get_cell(0, 0), &CellValue::text("Date"));
    assert_eq!(grid.get_cell(0, 6), &CellValue::text(LEDGER_HEAD));
    assert_eq!(grid.get_cell(0, 7), &CellValue::text("IGST"));
    assert_eq!(grid.get_cell(1, 1), &CellValue::text("Rent"));
    assert_eq!(grid.get_cell(1, 3), &CellValue::Number(1000.0));
    assert_eq!(grid.get_cell(1, 6), &CellValue::text("Debit"));
    assert_eq!(grid.get_cell(6, 1), &CellValue::text("Refund"));
    assert_eq!(grid.get_cell(6, 6), &CellValue::text("Credit"));
    // Row with no qualifying column has an empty label, written as a blank.
    assert_eq!(grid.get_cell(4, 6), &CellValue::Empty);
    // Numeric text stays text.
    assert_eq!(grid.get_cell(5, 3), &CellValue::text("120"));
}

#[test]
fn test_saved_file_reloads_as_clean_table() {
    let mut harness = TestHarness::with_sample_ledger();
    harness.session.derive_ledger_head(&["Debit", "Credit"]).unwrap();
    let output = harness.path("normalized.xlsx");
    harness.session.save(&output).unwrap();

    let mut reloaded = TestHarness::new();
    let summary = reloaded.session.load(&output).unwrap();
    assert_eq!(summary.header_row, Some(1));
    assert_eq!(summary.data_rows, 6);
    assert_eq!(reloaded.value(2, LEDGER_HEAD), "Debit");
}

#[test]
fn test_save_does_not_modify_session() {
    let mut harness = TestHarness::with_sample_ledger();
    harness.session.add_columns(&["CGST", "SGST"]).unwrap();
    let before = harness.session.table().unwrap().clone();

    harness.session.save(harness.path("out.xlsx")).unwrap();
    assert_eq!(harness.session.table().unwrap(), &before);
}

#[test]
fn test_save_failure_is_reported() {
    let harness = TestHarness::with_sample_ledger();
    let err = harness
        .session
        .save(harness.path("missing-dir").join("out.xlsx"))
        .unwrap_err();
    assert!(matches!(err, AppError::Save(SaveError::Xlsx(_))));
    assert!(!err.to_string().is_empty());
}
