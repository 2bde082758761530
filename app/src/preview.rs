//! FILENAME: app/src/preview.rs
//! PURPOSE: Display-ready snapshot of the first rows of the working table,
//! plus a plain-text table renderer for the command line.

use engine::cell::CellValue;
use engine::table::NormalizedTable;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Rows in the whole table, not just the preview.
    pub total_rows: usize,
}

impl Preview {
    pub fn from_table(table: &NormalizedTable, n: usize) -> Self {
        Preview {
            columns: table.columns.clone(),
            rows: table
                .preview(n)
                .iter()
                .map(|row| row.iter().map(CellValue::display_value).collect())
                .collect(),
            total_rows: table.row_count(),
        }
    }

    pub fn render(&self) -> String {
        PreviewFormatter::new().format(self)
    }
}

pub struct PreviewFormatter {
    /// Longer cell text is cut and marked with "..."
    max_width: usize,
}

impl Default for PreviewFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewFormatter {
    pub fn new() -> Self {
        Self { max_width: 30 }
    }

    pub fn format(&self, preview: &Preview) -> String {
        if preview.columns.is_empty() {
            return String::new();
        }

        let header: Vec<String> = preview.columns.iter().map(|c| self.clip(c)).collect();
        let body: Vec<Vec<String>> = preview
            .rows
            .iter()
            .map(|row| row.iter().map(|c| self.clip(c)).collect())
            .collect();

        let widths = self.calculate_column_widths(&header, &body);

        let mut formatted = Vec::with_capacity(body.len() + 2);
        formatted.push(self.format_row(&header, &widths));
        formatted.push(self.create_separator(&widths));
        for row in &body {
            formatted.push(self.format_row(row, &widths));
        }

        formatted.join("\n")
    }

    fn clip(&self, content: &str) -> String {
        if content.chars().count() <= self.max_width {
            content.to_string()
        } else {
            let kept: String = content.chars().take(self.max_width.saturating_sub(3)).collect();
            format!("{}...", kept)
        }
    }

    fn calculate_column_widths(&self, header: &[String], body: &[Vec<String>]) -> Vec<usize> {
        let mut widths: Vec<usize> = header.iter().map(|c| c.chars().count()).collect();

        for row in body {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        widths
    }

    fn format_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let content = row.get(i).map(String::as_str).unwrap_or("");
                format!("{:<width$}", content, width = width)
            })
            .collect();

        format!("| {} |", cells.join(" | "))
    }

    fn create_separator(&self, widths: &[usize]) -> String {
        let separators: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        format!("| {} |", separators.join(" | "))
    }
}
