//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the ledger normalization engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.
//! Everything here is pure: the grid comes in already loaded, and the
//! normalized table goes out to whoever persists it.

pub mod cell;
pub mod detector;
pub mod grid;
pub mod ledger;
pub mod settings;
pub mod table;

// Re-export commonly used types at the crate root
pub use cell::CellValue;
pub use detector::{detect_structure, RowRole, Structure};
pub use grid::Grid;
pub use ledger::{classify_columns, is_nonzero_number, suggested_ledger_columns, ColumnGroup, ColumnKind};
pub use settings::{DetectionSettings, ADDABLE_COLUMNS, LEDGER_HEAD, PREVIEW_ROWS, PR_SHEET_IDENTIFIER};
pub use table::{build_table, column_names_from_row, NormalizedTable};

/// Detects structure and builds the normalized table in one step.
pub fn normalize(grid: &Grid, settings: &DetectionSettings) -> (Structure, NormalizedTable) {
    let structure = detect_structure(grid, settings);
    let table = build_table(grid, &structure);
    (structure, table)
}
