//! FILENAME: core/engine/src/settings.rs
//! PURPOSE: Tunable constants and dictionaries consumed by the detector and deriver.
//! CONTEXT: The heuristics are an ordered rule list rather than a proven algorithm,
//! so every threshold is a named field that callers (and tests) can override.

use serde::{Deserialize, Serialize};

/// Name of the derived column.
pub const LEDGER_HEAD: &str = "LEDGER HEAD";

/// Separator placed between column names in a LEDGER HEAD label.
pub const LEDGER_SEPARATOR: &str = " + ";

/// Token matched (case-insensitively) against sheet names when choosing a sheet.
pub const PR_SHEET_IDENTIFIER: &str = "PR";

/// Number of rows shown by a default preview.
pub const PREVIEW_ROWS: usize = 10;

/// Columns the augmenter offers to add.
pub const ADDABLE_COLUMNS: &[&str] = &["LEDGER HEAD", "TAXABLE VALUE", "CGST", "SGST", "IGST"];

/// Keywords that mark a trailing summary row.
pub const FOOTER_KEYWORDS: &[&str] = &[
    "total", "summary", "sum", "grand", "subtotal", "balance", "closing", "net", "amount",
];

/// Common ledger column headings used to score candidate header rows.
pub const COMMON_HEADER_NAMES: &[&str] = &[
    "date", "particular", "particulars", "voucher", "vch", "vch no", "voucher no",
    "debit", "credit", "amount", "dr", "cr", "balance",
    "narration", "description", "details", "account", "account name",
    "reference", "ref", "ref no", "transaction", "trans",
    "invoice", "inv", "inv no", "bill", "bill no", "receipt", "receipt no",
    "payment", "cheque", "chq", "chq no", "bank", "ledger",
];

/// Headings that dominate the header score when matched exactly.
pub const KEY_COLUMNS: &[&str] = &["date", "particular", "voucher"];

/// Column names treated as descriptive text when grouping columns.
pub const TEXT_COLUMN_NAMES: &[&str] = &["date", "particular", "particulars", "narration", "description"];

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Every knob of the structure detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionSettings {
    /// Rows examined when looking for the named header row.
    pub header_scan_rows: usize,
    /// Rows with at most this many non-blank cells are too sparse to be a header
    /// and count as near-blank when scanning for footers.
    pub sparse_row_max_cells: usize,
    /// Extra score per exact key-column match.
    pub key_column_weight: usize,
    /// Minimum score for a row to be accepted as the header row.
    pub header_match_threshold: usize,
    /// Rows at the top where the dense-text fallback rule applies.
    pub fallback_scan_rows: usize,
    /// Fallback dense-text rule: more than this many non-blank cells...
    pub fallback_min_cells: usize,
    /// ...with a non-numeric share above this ratio.
    pub fallback_text_ratio: f64,
    /// Consecutive near-blank trailing rows after which the footer scan stops.
    pub footer_blank_run: usize,
    /// Rows from the bottom after which an ordinary row ends the footer scan.
    pub footer_scan_depth: usize,
    /// Rows following a keyword row that are pulled into the footer.
    pub footer_trailing_rows: usize,
    pub header_names: Vec<String>,
    pub key_columns: Vec<String>,
    pub footer_keywords: Vec<String>,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            header_scan_rows: 20,
            sparse_row_max_cells: 2,
            key_column_weight: 2,
            header_match_threshold: 2,
            fallback_scan_rows: 5,
            fallback_min_cells: 3,
            fallback_text_ratio: 0.7,
            footer_blank_run: 3,
            footer_scan_depth: 5,
            footer_trailing_rows: 2,
            header_names: to_strings(COMMON_HEADER_NAMES),
            key_columns: to_strings(KEY_COLUMNS),
            footer_keywords: to_strings(FOOTER_KEYWORDS),
        }
    }
}
