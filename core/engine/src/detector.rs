//! FILENAME: core/engine/src/detector.rs
//! PURPOSE: Locates the header row and the footer block inside an unstructured grid.
//! CONTEXT: Ledger exports carry arbitrary title rows above the column headings and
//! summary rows below the data. Detection never fails: "no clear structure" is an
//! expected outcome and simply yields `header_row_index = None` and small (possibly
//! empty) header/footer sets.

use crate::cell::CellValue;
use crate::grid::Grid;
use crate::settings::DetectionSettings;

/// Classification of a single grid row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRole {
    Header,
    Footer,
    Data,
}

/// Result of structure detection for one grid.
///
/// Header, footer and data rows partition the grid's row indices. Header rows form
/// a prefix when a header row was named; footer rows are trailing but not
/// necessarily contiguous.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    /// Header rows, ascending.
    pub header_rows: Vec<u32>,
    /// Footer rows, ascending.
    pub footer_rows: Vec<u32>,
    /// The row that supplies column names, if one scored high enough.
    pub header_row_index: Option<u32>,
}

impl Structure {
    pub fn is_header(&self, row: u32) -> bool {
        self.header_rows.contains(&row)
    }

    pub fn is_footer(&self, row: u32) -> bool {
        self.footer_rows.contains(&row)
    }

    pub fn role(&self, row: u32) -> RowRole {
        if self.is_header(row) {
            RowRole::Header
        } else if self.is_footer(row) {
            RowRole::Footer
        } else {
            RowRole::Data
        }
    }

    /// Every row that is neither header nor footer, in ascending order.
    pub fn data_rows(&self, row_count: u32) -> Vec<u32> {
        (0..row_count)
            .filter(|&row| self.role(row) == RowRole::Data)
            .collect()
    }
}

/// Runs header detection followed by footer detection.
pub fn detect_structure(grid: &Grid, settings: &DetectionSettings) -> Structure {
    let header_row_index = find_header_row(grid, settings);

    let header_rows = match header_row_index {
        // Everything above the named header is title/metadata.
        Some(index) => (0..=index).collect(),
        None => fallback_header_rows(grid, settings),
    };

    let mut footer_rows = find_footer_rows(grid, &header_rows, settings);
    footer_rows.sort_unstable();

    log::debug!(
        "structure detected: header_row={:?} header_rows={} footer_rows={:?}",
        header_row_index,
        header_rows.len(),
        footer_rows
    );

    Structure {
        header_rows,
        footer_rows,
        header_row_index,
    }
}

// ============================================================================
// HEADER DETECTION
// ============================================================================

fn token(value: &CellValue) -> String {
    value.display_value().trim().to_lowercase()
}

fn non_blank_tokens(grid: &Grid, row: u32) -> Vec<String> {
    grid.row(row)
        .into_iter()
        .filter(|value| !value.is_blank())
        .map(token)
        .collect()
}

/// Scores a candidate header row as `(name_matches, non_empty)`.
/// Returns None for rows too sparse to be a header.
pub fn header_score(grid: &Grid, row: u32, settings: &DetectionSettings) -> Option<(usize, usize)> {
    let tokens = non_blank_tokens(grid, row);
    let non_empty = tokens.len();
    if non_empty <= settings.sparse_row_max_cells {
        return None;
    }

    let name_matches = tokens
        .iter()
        .filter(|tok| {
            settings.header_names.iter().any(|name| {
                let name = name.to_lowercase();
                name.contains(tok.as_str()) || tok.contains(name.as_str())
            })
        })
        .count();

    let key_matches = tokens
        .iter()
        .filter(|tok| {
            settings
                .key_columns
                .iter()
                .any(|key| key.eq_ignore_ascii_case(tok))
        })
        .count();

    Some((name_matches + key_matches * settings.key_column_weight, non_empty))
}

/// Picks the best-scoring row among the first `header_scan_rows` rows.
/// Ties go to the row with more non-blank cells; the winner must reach
/// `header_match_threshold`.
pub fn find_header_row(grid: &Grid, settings: &DetectionSettings) -> Option<u32> {
    let scan_rows = (grid.row_count as usize).min(settings.header_scan_rows) as u32;

    let mut best_row = None;
    let mut max_matches = 0;
    let mut max_non_empty = 0;

    for row in 0..scan_rows {
        let Some((matches, non_empty)) = header_score(grid, row, settings) else {
            continue;
        };
        if matches > max_matches || (matches == max_matches && non_empty > max_non_empty) {
            max_matches = matches;
            max_non_empty = non_empty;
            best_row = Some(row);
        }
    }

    best_row.filter(|_| max_matches >= settings.header_match_threshold)
}

/// Header rows by shape alone, used when no row names the columns.
///
/// A row is a header if it is text-heavy relative to the grid width, or (near the
/// top) dense and almost entirely text. The walk stops at the first non-blank row
/// past row 0 that fails both tests.
fn fallback_header_rows(grid: &Grid, settings: &DetectionSettings) -> Vec<u32> {
    let width = grid.col_count as f64;
    let mut rows = Vec::new();

    for row in 0..grid.row_count {
        let cells = grid.row(row);
        let non_empty = cells.iter().filter(|value| !value.is_blank()).count();
        let non_numeric = cells
            .iter()
            .filter(|value| !value.is_blank() && !value.is_numeric())
            .count();

        let text_heavy = non_numeric as f64 > width / 3.0 && non_empty as f64 > width / 4.0;
        let dense_title = (row as usize) < settings.fallback_scan_rows
            && non_empty > settings.fallback_min_cells
            && non_numeric as f64 / non_empty.max(1) as f64 > settings.fallback_text_ratio;

        if text_heavy || dense_title {
            rows.push(row);
        } else if row > 0 && non_empty > 0 {
            break;
        }
    }

    rows
}

// ============================================================================
// FOOTER DETECTION
// ============================================================================

/// Scans upward from the last row collecting near-blank and summary rows.
fn find_footer_rows(grid: &Grid, header_rows: &[u32], settings: &DetectionSettings) -> Vec<u32> {
    let row_count = grid.row_count;
    let mut footer_rows: Vec<u32> = Vec::new();
    let mut consecutive_blank = 0;

    for row in (0..row_count).rev() {
        if header_rows.contains(&row) {
            break;
        }

        if grid.non_blank_count(row) <= settings.sparse_row_max_cells {
            footer_rows.push(row);
            consecutive_blank += 1;
            if consecutive_blank >= settings.footer_blank_run {
                break;
            }
            continue;
        }
        consecutive_blank = 0;

        let row_text = non_blank_tokens(grid, row).join(" ");
        if settings
            .footer_keywords
            .iter()
            .any(|keyword| row_text.contains(&keyword.to_lowercase()))
        {
            footer_rows.push(row);
            // Summary blocks often span the lines right below the keyword row.
            let end = (row as usize)
                .saturating_add(1)
                .saturating_add(settings.footer_trailing_rows)
                .min(row_count as usize) as u32;
            for next in (row + 1)..end {
                if !footer_rows.contains(&next) && !header_rows.contains(&next) {
                    footer_rows.push(next);
                }
            }
            continue;
        }

        if (row as usize).saturating_add(settings.footer_scan_depth) < row_count as usize {
            break;
        }
    }

    footer_rows
}
