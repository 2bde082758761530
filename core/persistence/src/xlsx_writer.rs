//! FILENAME: core/persistence/src/xlsx_writer.rs
//! PURPOSE: Serializer. Writes a normalized table to a single-sheet workbook.

use crate::SaveError;
use engine::cell::CellValue;
use engine::table::NormalizedTable;
use rust_xlsxwriter::{Format, Workbook as XlsxWorkbook};
use std::path::Path;

/// Widest sheet Excel accepts.
pub const MAX_COLUMNS: usize = 16_384;

/// Writes a bold header row of column names followed by every row in order.
/// Blank cells are left unwritten.
pub fn save_table(table: &NormalizedTable, sheet_name: &str, path: &Path) -> Result<(), SaveError> {
    if table.column_count() > MAX_COLUMNS {
        return Err(SaveError::TooManyColumns {
            count: table.column_count(),
        });
    }

    let mut xlsx = XlsxWorkbook::new();
    let worksheet = xlsx.add_worksheet();
    worksheet.set_name(sheet_name)?;

    let header_format = Format::new().set_bold();
    for (col, name) in table.columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, name, &header_format)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_num = row_idx as u32 + 1;
        for (col, value) in row.iter().enumerate() {
            let col = col as u16;
            match value {
                CellValue::Empty => {}
                CellValue::Text(s) if s.trim().is_empty() => {}
                CellValue::Text(s) => {
                    worksheet.write_string(row_num, col, s)?;
                }
                CellValue::Number(n) => {
                    worksheet.write_number(row_num, col, *n)?;
                }
                CellValue::Boolean(b) => {
                    worksheet.write_boolean(row_num, col, *b)?;
                }
            }
        }
    }

    xlsx.save(path)?;
    log::info!(
        "saved {} rows x {} columns to '{}' (sheet '{}')",
        table.row_count(),
        table.column_count(),
        path.display(),
        sheet_name
    );
    Ok(())
}
