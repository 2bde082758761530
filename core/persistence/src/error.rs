//! FILENAME: core/persistence/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot read '{}' as a spreadsheet: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Workbook '{}' contains no sheets", path.display())]
    NoSheets { path: PathBuf },

    #[error("Cannot read sheet '{sheet}': {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("XLSX write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Table has {count} columns, more than a worksheet can hold")]
    TooManyColumns { count: usize },
}
