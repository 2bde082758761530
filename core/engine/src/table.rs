//! FILENAME: core/engine/src/table.rs
//! PURPOSE: The normalized table: detected data rows reprojected onto column names.
//! CONTEXT: Built once per load from the Grid and its Structure, then mutated in
//! place by the column augmenter and the ledger-head deriver. Rows are positional,
//! aligned to `columns`, so duplicate header names survive as separate columns.

use serde::Serialize;

use crate::cell::CellValue;
use crate::detector::Structure;
use crate::grid::Grid;

static EMPTY: CellValue = CellValue::Empty;

/// Placeholder name for the column at 0-based `index`.
pub fn placeholder_name(index: usize) -> String {
    format!("Column_{}", index + 1)
}

/// Column names taken from one grid row, left to right across the grid width.
/// Blank cells and the literal "nan" become `Column_<n>` (1-based).
pub fn column_names_from_row(grid: &Grid, row: u32) -> Vec<String> {
    (0..grid.col_count)
        .map(|col| {
            let value = grid.get_cell(row, col);
            let name = value.display_value();
            if value.is_blank() || name.trim().eq_ignore_ascii_case("nan") {
                placeholder_name(col as usize)
            } else {
                name
            }
        })
        .collect()
}

/// Positional names used when no header row was detected.
pub fn positional_names(count: u32) -> Vec<String> {
    (0..count as usize).map(placeholder_name).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedTable {
    pub columns: Vec<String>,
    /// One entry per data row, each aligned to `columns`.
    pub rows: Vec<Vec<CellValue>>,
    /// Grid index of every data row, same order as `rows`.
    pub source_rows: Vec<u32>,
}

/// Builds the normalized table from a grid and its detected structure.
/// Data rows keep their original relative order.
pub fn build_table(grid: &Grid, structure: &Structure) -> NormalizedTable {
    let columns = match structure.header_row_index {
        Some(row) => column_names_from_row(grid, row),
        None => positional_names(grid.col_count),
    };

    let source_rows = structure.data_rows(grid.row_count);
    let rows = source_rows
        .iter()
        .map(|&row| {
            (0..grid.col_count)
                .map(|col| grid.get_cell(row, col).clone())
                .collect()
        })
        .collect();

    NormalizedTable {
        columns,
        rows,
        source_rows,
    }
}

impl NormalizedTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Position of the first column with exactly this name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// The value at (`row`, `column`); None when either does not exist.
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let col = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// All values of the first column with this name, top to bottom.
    pub fn column_values(&self, name: &str) -> Option<Vec<&CellValue>> {
        let col = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(col).unwrap_or(&EMPTY))
                .collect(),
        )
    }

    /// Appends a blank-filled column for every name not already present.
    /// Returns how many columns were added; names already present are skipped,
    /// so repeating a call changes nothing.
    pub fn add_columns<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for name in names {
            let name = name.as_ref();
            if self.has_column(name) {
                continue;
            }
            self.columns.push(name.to_string());
            for row in &mut self.rows {
                row.push(CellValue::Empty);
            }
            added += 1;
        }
        if added > 0 {
            log::debug!("added {} column(s), table now has {}", added, self.columns.len());
        }
        added
    }

    /// Overwrites one column's values. `values` must hold one entry per row.
    pub(crate) fn write_column(&mut self, col: usize, values: Vec<CellValue>) {
        for (row, value) in self.rows.iter_mut().zip(values) {
            if let Some(slot) = row.get_mut(col) {
                *slot = value;
            }
        }
    }

    /// The first `n` rows (fewer if the table is shorter).
    pub fn preview(&self, n: usize) -> &[Vec<CellValue>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Output table for saving: this table plus every header-derived column it
    /// no longer carries, re-populated from the grid's data rows at that
    /// column's original position.
    pub fn restore_columns(&self, grid: &Grid, structure: &Structure) -> NormalizedTable {
        let mut output = self.clone();
        let Some(header_row) = structure.header_row_index else {
            return output;
        };

        for (position, name) in column_names_from_row(grid, header_row).into_iter().enumerate() {
            if output.has_column(&name) {
                continue;
            }
            log::info!("restoring column '{}' from source data", name);
            for (row, &source_row) in output.rows.iter_mut().zip(&self.source_rows) {
                row.push(grid.get_cell(source_row, position as u32).clone());
            }
            output.columns.push(name);
        }

        output
    }
}
