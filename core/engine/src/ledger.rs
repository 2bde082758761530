//! FILENAME: core/engine/src/ledger.rs
//! PURPOSE: Derives the LEDGER HEAD column and groups columns for selection.
//! CONTEXT: For each data row the label names, in the caller's order, every
//! selected column holding a non-zero number. Derivation overwrites the whole
//! column on every call and never looks across rows.

use serde::Serialize;

use crate::cell::CellValue;
use crate::settings::{LEDGER_HEAD, LEDGER_SEPARATOR, TEXT_COLUMN_NAMES};
use crate::table::NormalizedTable;

/// True when the value parses as a number other than zero.
/// Blanks and non-numeric text fail, and so does a parsed `0`.
pub fn is_nonzero_number(value: &CellValue) -> bool {
    matches!(value.as_number(), Some(n) if n != 0.0)
}

/// The label for one row: selected column names whose value passes
/// `is_nonzero_number`, joined with `" + "`. Unknown columns never pass.
pub fn ledger_label<S: AsRef<str>>(table: &NormalizedTable, row: usize, selected: &[S]) -> String {
    selected
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| table.cell(row, name).is_some_and(is_nonzero_number))
        .collect::<Vec<_>>()
        .join(LEDGER_SEPARATOR)
}

impl NormalizedTable {
    /// Recomputes LEDGER HEAD for every row from `selected`, creating the
    /// column first if it is missing. Labels are computed before anything is
    /// written. Returns the number of rows labelled.
    pub fn derive_ledger_head<S: AsRef<str>>(&mut self, selected: &[S]) -> usize {
        let table: &NormalizedTable = self;
        let labels: Vec<CellValue> = (0..table.row_count())
            .map(|row| CellValue::Text(ledger_label(table, row, selected)))
            .collect();

        self.add_columns([LEDGER_HEAD]);
        let Some(col) = self.column_index(LEDGER_HEAD) else {
            return 0;
        };

        let labelled = labels.len();
        self.write_column(col, labels);

        log::debug!(
            "derived {} for {} row(s) from {} selected column(s)",
            LEDGER_HEAD,
            labelled,
            selected.len()
        );
        labelled
    }
}

// ============================================================================
// COLUMN GROUPING
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnKind {
    /// More than half of the values are stored numbers.
    Numeric,
    /// Descriptive columns such as dates and narrations.
    Text,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnGroup {
    pub name: String,
    pub kind: ColumnKind,
    /// Whether the column is offered pre-selected for derivation.
    pub selected: bool,
}

fn kind_of(table: &NormalizedTable, col: usize) -> ColumnKind {
    let native_numbers = table
        .rows
        .iter()
        .filter(|row| row.get(col).is_some_and(CellValue::is_native_number))
        .count();

    if native_numbers * 2 > table.row_count() {
        return ColumnKind::Numeric;
    }

    let name = table.columns[col].trim().to_lowercase();
    if TEXT_COLUMN_NAMES.iter().any(|text| *text == name) {
        ColumnKind::Text
    } else {
        ColumnKind::Other
    }
}

/// Groups every column except LEDGER HEAD, in table order.
pub fn classify_columns(table: &NormalizedTable) -> Vec<ColumnGroup> {
    table
        .columns
        .iter()
        .enumerate()
        .filter(|(_, name)| name.as_str() != LEDGER_HEAD)
        .map(|(col, name)| {
            let kind = kind_of(table, col);
            ColumnGroup {
                name: name.clone(),
                kind,
                selected: kind != ColumnKind::Text,
            }
        })
        .collect()
}

/// Names of the columns selected by default, in table order.
pub fn suggested_ledger_columns(table: &NormalizedTable) -> Vec<String> {
    classify_columns(table)
        .into_iter()
        .filter(|group| group.selected)
        .map(|group| group.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_table(rows: Vec<Vec<CellValue>>) -> NormalizedTable {
        NormalizedTable {
            columns: vec!["Date".into(), "Particular".into(), "Debit".into(), "Credit".into()],
            source_rows: (0..rows.len() as u32).collect(),
            rows,
        }
    }

    fn row(debit: CellValue, credit: CellValue) -> Vec<CellValue> {
        vec![CellValue::from("1/1/25"), CellValue::from("Rent"), debit, credit]
    }

    fn label(table: &NormalizedTable, row: usize) -> String {
        table
            .cell(row, LEDGER_HEAD)
            .map(CellValue::display_value)
            .unwrap_or_default()
    }

    #[test]
    fn test_zero_is_not_counted() {
        assert!(is_nonzero_number(&CellValue::Number(1000.0)));
        assert!(is_nonzero_number(&CellValue::text("1200")));
        assert!(is_nonzero_number(&CellValue::Number(-5.0)));
        assert!(!is_nonzero_number(&CellValue::Number(0.0)));
        assert!(!is_nonzero_number(&CellValue::text("0")));
        assert!(!is_nonzero_number(&CellValue::text("0.00")));
        assert!(!is_nonzero_number(&CellValue::Empty));
        assert!(!is_nonzero_number(&CellValue::text("Rent")));
    }

    #[test]
    fn test_derive_single_column() {
        let mut table = ledger_table(vec![row(CellValue::Number(1000.0), CellValue::Number(0.0))]);
        assert_eq!(table.derive_ledger_head(&["Debit", "Credit"]), 1);
        assert_eq!(label(&table, 0), "Debit");
    }

    #[test]
    fn test_derive_nothing_passes_gives_empty_label() {
        let mut table = ledger_table(vec![
            row(CellValue::Number(0.0), CellValue::Number(0.0)),
            row(CellValue::Empty, CellValue::Empty),
        ]);
        table.derive_ledger_head(&["Debit", "Credit"]);
        assert_eq!(table.cell(0, LEDGER_HEAD), Some(&CellValue::text("")));
        assert_eq!(label(&table, 1), "");
    }

    #[test]
    fn test_label_follows_selection_order() {
        let mut table = ledger_table(vec![row(CellValue::Number(10.0), CellValue::text("20"))]);
        table.derive_ledger_head(&["Credit", "Debit"]);
        assert_eq!(label(&table, 0), "Credit + Debit");
    }

    #[test]
    fn test_derive_overwrites_previous_labels() {
        let mut table = ledger_table(vec![row(CellValue::Number(10.0), CellValue::Number(20.0))]);
        table.derive_ledger_head(&["Debit", "Credit"]);
        assert_eq!(label(&table, 0), "Debit + Credit");

        table.derive_ledger_head(&["Credit"]);
        assert_eq!(label(&table, 0), "Credit");
        assert_eq!(table.columns.iter().filter(|c| *c == LEDGER_HEAD).count(), 1);
    }

    #[test]
    fn test_unknown_selected_column_never_passes() {
        let mut table = ledger_table(vec![row(CellValue::Number(10.0), CellValue::Empty)]);
        table.derive_ledger_head(&["Missing", "Debit"]);
        assert_eq!(label(&table, 0), "Debit");
    }

    #[test]
    fn test_derive_on_empty_table_still_creates_column() {
        let mut table = ledger_table(Vec::new());
        assert_eq!(table.derive_ledger_head(&["Debit"]), 0);
        assert!(table.has_column(LEDGER_HEAD));
    }

    #[test]
    fn test_classify_columns() {
        let mut table = ledger_table(vec![
            row(CellValue::Number(10.0), CellValue::Empty),
            row(CellValue::Number(0.0), CellValue::text("5")),
            row(CellValue::Number(3.0), CellValue::Number(2.0)),
        ]);
        table.add_columns([LEDGER_HEAD]);

        let groups = classify_columns(&table);
        let kinds: Vec<(&str, ColumnKind, bool)> = groups
            .iter()
            .map(|g| (g.name.as_str(), g.kind, g.selected))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("Date", ColumnKind::Text, false),
                ("Particular", ColumnKind::Text, false),
                ("Debit", ColumnKind::Numeric, true),
                // Only one of three values is a stored number.
                ("Credit", ColumnKind::Other, true),
            ]
        );
        assert_eq!(suggested_ledger_columns(&table), vec!["Debit", "Credit"]);
    }
}
