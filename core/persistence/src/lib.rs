//! FILENAME: core/persistence/src/lib.rs
//! Ledger Persistence Module
//!
//! Reads one sheet of a workbook into an engine Grid and writes a
//! normalized table back out as XLSX.

mod error;
mod xlsx_reader;
mod xlsx_writer;

pub use error::{LoadError, SaveError};
pub use xlsx_reader::{convert_cell, load_workbook, select_sheet, LoadedSheet, SheetSelection};
pub use xlsx_writer::{save_table, MAX_COLUMNS};
