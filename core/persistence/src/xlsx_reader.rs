//! FILENAME: core/persistence/src/xlsx_reader.rs
//! PURPOSE: Grid Loader. Picks one sheet of a workbook and reads it into a Grid.
//! CONTEXT: Any format calamine recognises is accepted (xlsx, xlsm, xlsb, xls, ods).
//! Row 0 of the grid is the first row of the sheet's used range.

use crate::LoadError;
use calamine::{open_workbook_auto, Data, Range, Reader};
use engine::cell::CellValue;
use engine::grid::Grid;
use serde::Serialize;
use std::path::Path;

/// Which sheet was chosen and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetSelection {
    pub name: String,
    pub index: usize,
    /// The identifier the names were matched against.
    pub identifier: String,
    /// False when no name matched and the first sheet was taken.
    pub matched: bool,
}

impl SheetSelection {
    /// Human readable account of the choice.
    pub fn message(&self) -> String {
        if self.matched {
            format!("Found sheet with '{}' in name: {}", self.identifier, self.name)
        } else {
            format!(
                "No sheet with '{}' in name found. Using first sheet: {}",
                self.identifier, self.name
            )
        }
    }
}

/// Result of loading one sheet.
#[derive(Debug, Clone)]
pub struct LoadedSheet {
    pub sheet_names: Vec<String>,
    pub selection: SheetSelection,
    pub grid: Grid,
}

/// First sheet whose name contains `identifier` (case-insensitive), else the
/// first sheet. None only when there are no sheets.
pub fn select_sheet(names: &[String], identifier: &str) -> Option<SheetSelection> {
    let needle = identifier.to_lowercase();
    let matched = names
        .iter()
        .position(|name| name.to_lowercase().contains(&needle));

    let index = matched.unwrap_or(0);
    names.get(index).map(|name| SheetSelection {
        name: name.clone(),
        index,
        identifier: identifier.to_string(),
        matched: matched.is_some(),
    })
}

/// Opens the workbook at `path`, selects a sheet and reads it into a Grid.
pub fn load_workbook(path: &Path, identifier: &str) -> Result<LoadedSheet, LoadError> {
    let mut workbook = open_workbook_auto(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_names = workbook.sheet_names();
    let selection = select_sheet(&sheet_names, identifier).ok_or_else(|| LoadError::NoSheets {
        path: path.to_path_buf(),
    })?;
    log::info!("{}", selection.message());

    let range = workbook
        .worksheet_range(&selection.name)
        .map_err(|source| LoadError::Sheet {
            sheet: selection.name.clone(),
            source,
        })?;

    let grid = range_to_grid(&range);
    log::info!(
        "loaded sheet '{}': {} rows x {} columns",
        selection.name,
        grid.row_count,
        grid.col_count
    );

    Ok(LoadedSheet {
        sheet_names,
        selection,
        grid,
    })
}

fn range_to_grid(range: &Range<Data>) -> Grid {
    let (height, width) = range.get_size();
    let mut grid = Grid::with_extent(height as u32, width as u32);

    for (row_idx, row) in range.rows().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            let value = convert_cell(cell);
            if !matches!(value, CellValue::Empty) {
                grid.set_cell(row_idx as u32, col_idx as u32, value);
            }
        }
    }

    grid
}

/// Maps a calamine cell to the engine's value type.
/// Dates become text since the engine has no date type.
pub fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Text(e.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => CellValue::Text(datetime.to_string()),
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
