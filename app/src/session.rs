//! FILENAME: app/src/session.rs
//! PURPOSE: One explicit owner for everything derived from a loaded ledger file.
//! CONTEXT: A session holds at most one loaded file: its raw grid, detected
//! structure and working table. Loading replaces all of it at once; a failed
//! load leaves the previous state untouched. Callers drive the session from a
//! single thread.

use std::path::{Path, PathBuf};

use engine::{
    classify_columns, normalize, suggested_ledger_columns, ColumnGroup, Grid, NormalizedTable,
    Structure,
};
use persistence::{load_workbook, save_table};
use serde::Serialize;

use crate::logging::{log_enter, log_exit, log_info, log_warn};
use crate::preview::Preview;
use crate::{AppConfig, AppError, StateError};

/// Everything read from or derived from one loaded file.
#[derive(Debug, Clone)]
pub struct LoadedLedger {
    pub path: PathBuf,
    pub sheet_names: Vec<String>,
    pub sheet_name: String,
    /// Raw source grid, never mutated after load.
    pub grid: Grid,
    pub structure: Structure,
    pub table: NormalizedTable,
}

/// What a caller needs to report after a load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadSummary {
    pub sheet_names: Vec<String>,
    pub sheet_name: String,
    pub message: String,
    pub header_rows: usize,
    pub footer_rows: usize,
    pub data_rows: usize,
    /// 1-based row of the main header within the sheet's used range.
    pub header_row: Option<u32>,
    pub columns: Vec<String>,
}

#[derive(Debug, Default)]
pub struct LedgerSession {
    config: AppConfig,
    loaded: Option<LoadedLedger>,
}

impl LedgerSession {
    pub fn new(config: AppConfig) -> Self {
        LedgerSession {
            config,
            loaded: None,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn loaded(&self) -> Option<&LoadedLedger> {
        self.loaded.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Column names offered for adding.
    pub fn addable_columns(&self) -> &[String] {
        &self.config.addable_columns
    }

    fn current(&self) -> Result<&LoadedLedger, StateError> {
        self.loaded.as_ref().ok_or(StateError::NoTable)
    }

    fn current_mut(&mut self) -> Result<&mut LoadedLedger, StateError> {
        self.loaded.as_mut().ok_or(StateError::NoTable)
    }

    pub fn table(&self) -> Result<&NormalizedTable, StateError> {
        Ok(&self.current()?.table)
    }

    /// Load a workbook, detect its structure and build the working table.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadSummary, AppError> {
        let path = path.as_ref();
        log_enter!("SESSION", "load", "{}", path.display());

        let sheet = match load_workbook(path, &self.config.sheet_identifier) {
            Ok(sheet) => sheet,
            Err(e) => {
                log_warn!("SESSION", "load failed, keeping previous state: {}", e);
                return Err(e.into());
            }
        };

        let (structure, table) = normalize(&sheet.grid, &self.config.detection);

        let summary = LoadSummary {
            sheet_names: sheet.sheet_names.clone(),
            sheet_name: sheet.selection.name.clone(),
            message: sheet.selection.message(),
            header_rows: structure.header_rows.len(),
            footer_rows: structure.footer_rows.len(),
            data_rows: table.row_count(),
            header_row: structure.header_row_index.map(|row| row + 1),
            columns: table.columns.clone(),
        };

        match summary.header_row {
            Some(row) => log_info!("SESSION", "Main header row: {}", row),
            None => log_info!("SESSION", "No header row named the columns; using positional names"),
        }

        self.loaded = Some(LoadedLedger {
            path: path.to_path_buf(),
            sheet_names: sheet.sheet_names,
            sheet_name: sheet.selection.name,
            grid: sheet.grid,
            structure,
            table,
        });

        log_exit!("SESSION", "load", "{} data rows", summary.data_rows);
        Ok(summary)
    }

    /// Append blank columns for every name not yet present.
    /// Returns how many were actually added.
    pub fn add_columns<S: AsRef<str>>(&mut self, names: &[S]) -> Result<usize, StateError> {
        let loaded = self.current_mut()?;
        let added = loaded.table.add_columns(names);
        log_info!("SESSION", "added {} column(s)", added);
        Ok(added)
    }

    /// Recompute LEDGER HEAD from the selected columns, in the given order.
    pub fn derive_ledger_head<S: AsRef<str>>(&mut self, columns: &[S]) -> Result<usize, StateError> {
        let loaded = self.current_mut()?;
        if columns.is_empty() {
            return Err(StateError::NoColumnsSelected);
        }

        let selected: Vec<&str> = columns.iter().map(|c| c.as_ref()).collect();
        log_enter!("SESSION", "derive_ledger_head", "{}", selected.join(", "));

        for name in &selected {
            if !loaded.table.has_column(name) {
                log_warn!("SESSION", "selected column '{}' is not in the table", name);
            }
        }

        let labelled = loaded.table.derive_ledger_head(selected.as_slice());
        log_exit!("SESSION", "derive_ledger_head", "{} rows", labelled);
        Ok(labelled)
    }

    pub fn preview(&self, n: usize) -> Result<Preview, StateError> {
        Ok(Preview::from_table(&self.current()?.table, n))
    }

    /// Preview sized by the configured row count.
    pub fn default_preview(&self) -> Result<Preview, StateError> {
        self.preview(self.config.preview_rows)
    }

    pub fn column_groups(&self) -> Result<Vec<ColumnGroup>, StateError> {
        Ok(classify_columns(&self.current()?.table))
    }

    pub fn suggested_ledger_columns(&self) -> Result<Vec<String>, StateError> {
        Ok(suggested_ledger_columns(&self.current()?.table))
    }

    /// Write the working table, plus any header-derived column it lost, to
    /// `path` under the sheet name chosen at load.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), AppError> {
        let path = path.as_ref();
        let loaded = self.current()?;
        log_enter!("SESSION", "save", "{}", path.display());

        let output = loaded.table.restore_columns(&loaded.grid, &loaded.structure);
        save_table(&output, &loaded.sheet_name, path)?;

        log_exit!("SESSION", "save", "{} rows", output.row_count());
        Ok(())
    }
}
