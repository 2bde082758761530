//! FILENAME: app/src/config.rs
//! PURPOSE: Application settings read from an optional JSON file.
//! CONTEXT: Every field is optional in the file; missing ones fall back to the
//! engine's built-in constants.

use crate::AppError;
use engine::settings::{DetectionSettings, ADDABLE_COLUMNS, PREVIEW_ROWS, PR_SHEET_IDENTIFIER};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Token looked for in sheet names when choosing the sheet to load.
    pub sheet_identifier: String,
    /// Columns offered for adding to a loaded table.
    pub addable_columns: Vec<String>,
    /// Rows shown by a default preview.
    pub preview_rows: usize,
    pub detection: DetectionSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sheet_identifier: PR_SHEET_IDENTIFIER.to_string(),
            addable_columns: ADDABLE_COLUMNS.iter().map(|s| s.to_string()).collect(),
            preview_rows: PREVIEW_ROWS,
            detection: DetectionSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), AppError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;

        std::fs::write(path, content).map_err(|source| AppError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}
