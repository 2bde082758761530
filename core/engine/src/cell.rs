//! FILENAME: core/engine/src/cell.rs
//! PURPOSE: Defines the scalar value held by a single ledger cell.
//! CONTEXT: A loaded sheet is reduced to numbers, text, booleans and blanks.
//! Formulas and styles are not carried; only the value the sheet displayed.

use serde::{Deserialize, Serialize};

/// The raw data within a cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// True for `Empty` and for text that is empty once trimmed.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Returns the display value of the cell as a String.
    /// Used for header names, keyword matching and previews.
    pub fn display_value(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => {
                // Format without unnecessary decimal places
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{:.0}", n)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Text(s) => s.clone(),
            CellValue::Boolean(b) => {
                if *b { "TRUE" } else { "FALSE" }.to_string()
            }
        }
    }

    /// Attempts to read the cell as a floating point number.
    ///
    /// Text is parsed after trimming, so `"1200"` is numeric while `"Rent"` is not.
    /// Booleans count as `1` / `0`. `NaN` is never treated as a number.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            CellValue::Empty => return None,
            CellValue::Number(n) => *n,
            CellValue::Text(s) => s.trim().parse::<f64>().ok()?,
            CellValue::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
        };
        if value.is_nan() {
            None
        } else {
            Some(value)
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }

    /// True only for cells stored as a native number (not numeric text).
    pub fn is_native_number(&self) -> bool {
        matches!(self, CellValue::Number(n) if !n.is_nan())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value.to_string())
        }
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Boolean(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::text("   ").is_blank());
        assert!(!CellValue::text("Rent").is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
    }

    #[test]
    fn test_display_value_drops_integral_fraction() {
        assert_eq!(CellValue::Number(1000.0).display_value(), "1000");
        assert_eq!(CellValue::Number(12.5).display_value(), "12.5");
        assert_eq!(CellValue::Boolean(true).display_value(), "TRUE");
    }

    #[test]
    fn test_numeric_parse() {
        assert_eq!(CellValue::text(" 1200 ").as_number(), Some(1200.0));
        assert_eq!(CellValue::text("Rent").as_number(), None);
        assert_eq!(CellValue::text("1_000").as_number(), None);
        assert_eq!(CellValue::text("NaN").as_number(), None);
        assert_eq!(CellValue::Boolean(true).as_number(), Some(1.0));
        assert_eq!(CellValue::Empty.as_number(), None);
    }
}
