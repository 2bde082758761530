//! FILENAME: core/engine/src/grid.rs
//! PURPOSE: Holds one sheet's worth of raw cell values (The Source Grid).
//! CONTEXT: The grid is built once by the loader and never mutated afterwards;
//! it stays the source of truth for re-deriving the output. It uses a sparse
//! storage strategy (HashMap) since ledger exports are often ragged.

use std::collections::HashMap;
use crate::cell::CellValue;

static EMPTY: CellValue = CellValue::Empty;

/// The Grid struct holds the raw rows of a sheet.
/// Row and Col are 0-based indices.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    /// Sparse storage: keys are (row, col), values are non-empty cells.
    pub cells: HashMap<(u32, u32), CellValue>,

    /// Number of rows in the rectangular extent (trailing blank rows included).
    pub row_count: u32,

    /// Number of columns in the rectangular extent.
    pub col_count: u32,
}

impl Grid {
    /// Creates a new, empty Grid.
    pub fn new() -> Self {
        Grid {
            cells: HashMap::new(),
            row_count: 0,
            col_count: 0,
        }
    }

    /// Creates a grid with a fixed extent, for sources that report their size
    /// separately from their populated cells.
    pub fn with_extent(row_count: u32, col_count: u32) -> Self {
        Grid {
            cells: HashMap::new(),
            row_count,
            col_count,
        }
    }

    /// Builds a grid from nested rows. Short rows are padded with blanks.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = CellValue>,
    {
        let mut grid = Grid::new();
        let mut row_count = 0u32;
        for (row_idx, row) in rows.into_iter().enumerate() {
            for (col_idx, value) in row.into_iter().enumerate() {
                grid.set_cell(row_idx as u32, col_idx as u32, value);
            }
            row_count = row_idx as u32 + 1;
        }
        grid.row_count = grid.row_count.max(row_count);
        grid
    }

    /// Sets a cell at the specified coordinates.
    /// Grows the extent automatically; blank values are not stored.
    pub fn set_cell(&mut self, row: u32, col: u32, value: CellValue) {
        if row >= self.row_count {
            self.row_count = row + 1;
        }
        if col >= self.col_count {
            self.col_count = col + 1;
        }
        if matches!(value, CellValue::Empty) {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), value);
        }
    }

    /// Retrieves the value at the specified coordinates.
    /// Missing cells read as `CellValue::Empty`.
    pub fn get_cell(&self, row: u32, col: u32) -> &CellValue {
        self.cells.get(&(row, col)).unwrap_or(&EMPTY)
    }

    /// Returns every cell of a row, left to right, across the full width.
    pub fn row(&self, row: u32) -> Vec<&CellValue> {
        (0..self.col_count).map(|col| self.get_cell(row, col)).collect()
    }

    /// Count of non-blank cells in a row.
    pub fn non_blank_count(&self, row: u32) -> usize {
        (0..self.col_count)
            .filter(|&col| !self.get_cell(row, col).is_blank())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_pads_ragged_rows() {
        let grid = Grid::from_rows(vec![
            vec![CellValue::from("Title")],
            vec![CellValue::from("a"), CellValue::from("b"), CellValue::from("c")],
        ]);
        assert_eq!(grid.row_count, 2);
        assert_eq!(grid.col_count, 3);
        assert_eq!(grid.row(0).len(), 3);
        assert_eq!(grid.get_cell(0, 2), &CellValue::Empty);
    }

    #[test]
    fn test_trailing_blank_rows_are_counted() {
        let grid = Grid::from_rows(vec![
            vec![CellValue::from("a")],
            vec![],
            vec![CellValue::Empty],
        ]);
        assert_eq!(grid.row_count, 3);
        assert_eq!(grid.non_blank_count(2), 0);
    }

    #[test]
    fn test_non_blank_count_ignores_whitespace() {
        let grid = Grid::from_rows(vec![vec![
            CellValue::from("x"),
            CellValue::text("  "),
            CellValue::Number(0.0),
        ]]);
        assert_eq!(grid.non_blank_count(0), 2);
    }
}
