//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for ledger session integration tests.

#![allow(dead_code)]

use app_lib::{AppConfig, LedgerSession};
use engine::CellValue;
use rust_xlsxwriter::Workbook;
use std::path::PathBuf;
use tempfile::TempDir;

/// One fixture cell.
pub enum Fx {
    Blank,
    Num(f64),
    Txt(&'static str),
}

pub use Fx::{Blank, Num, Txt};

/// Test harness owning a scratch directory and a session.
pub struct TestHarness {
    pub dir: TempDir,
    pub session: LedgerSession,
}

impl TestHarness {
    /// Create a new test harness with default configuration and nothing loaded.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        TestHarness {
            dir: TempDir::new().unwrap(),
            session: LedgerSession::new(config),
        }
    }

    /// Create a harness with the sample ledger already loaded.
    pub fn with_sample_ledger() -> Self {
        let mut harness = Self::new();
        let path = harness.write_sample_ledger("ledger.xlsx");
        harness.session.load(&path).unwrap();
        harness
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a workbook where every named sheet holds the given rows.
    pub fn write_workbook(&self, name: &str, sheets: &[(&str, &[Vec<Fx>])]) -> PathBuf {
        let path = self.path(name);
        let mut workbook = Workbook::new();
        for (sheet_name, rows) in sheets {
            let sheet = workbook.add_worksheet();
            sheet.set_name(*sheet_name).unwrap();
            for (r, row) in rows.iter().enumerate() {
                for (c, cell) in row.iter().enumerate() {
                    let (r, c) = (r as u32, c as u16);
                    match cell {
                        Fx::Blank => {}
                        Fx::Num(n) => {
                            sheet.write_number(r, c, *n).unwrap();
                        }
                        Fx::Txt(s) => {
                            sheet.write_string(r, c, *s).unwrap();
                        }
                    }
                }
            }
        }
        workbook.save(&path).unwrap();
        path
    }

    /// Title block, header row, six transactions, and a two-line summary.
    pub fn sample_rows() -> Vec<Vec<Fx>> {
        vec![
            vec![Txt("ACME Traders Pvt Ltd")],
            vec![Txt("Purchase Register 2025")],
            vec![
                Txt("Date"),
                Txt("Particulars"),
                Txt("Voucher No"),
                Txt("Debit"),
                Txt("Credit"),
                Txt("CGST"),
            ],
            vec![Txt("01-04-2025"), Txt("Rent"), Num(1.0), Num(1000.0), Num(0.0), Num(0.0)],
            vec![Txt("02-04-2025"), Txt("Sales"), Num(2.0), Num(0.0), Num(500.0), Num(45.0)],
            vec![Txt("03-04-2025"), Txt("Office supplies"), Num(3.0), Num(250.0), Blank, Num(22.5)],
            vec![Txt("04-04-2025"), Txt("Adjustment"), Num(4.0), Num(0.0), Num(0.0), Num(0.0)],
            vec![Txt("05-04-2025"), Txt("Freight"), Num(5.0), Txt("120"), Blank, Blank],
            vec![Txt("06-04-2025"), Txt("Refund"), Num(6.0), Blank, Num(75.0), Blank],
            vec![Blank, Txt("Grand Total"), Blank, Num(1370.0), Num(575.0), Num(67.5)],
            vec![Blank, Txt("Closing balance carried"), Blank, Blank, Blank, Blank],
        ]
    }

    pub fn write_sample_ledger(&self, name: &str) -> PathBuf {
        let rows = Self::sample_rows();
        self.write_workbook(name, &[("Summary", &[vec![Txt("see PR sheet")]][..]), ("PR April", rows.as_slice())])
    }

    /// Display value of one cell of the working table.
    pub fn value(&self, row: usize, column: &str) -> String {
        self.session
            .table()
            .unwrap()
            .cell(row, column)
            .map(CellValue::display_value)
            .unwrap_or_default()
    }

    pub fn columns(&self) -> Vec<String> {
        self.session.table().unwrap().columns.clone()
    }
}
