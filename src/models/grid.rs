//! Raw workbook grid model.
//!
//! This module defines the cell grid handed to the engine by the
//! file-parsing collaborator: a workbook of named sheets, each sheet a
//! rectangular grid of string, numeric, or empty cells. The engine only
//! ever reads the sheet named "Logs" (case-insensitive).

use serde::{Deserialize, Serialize};

/// A single cell value in a raw export grid.
///
/// Serialized untagged so a JSON grid reads naturally:
/// `["Duration:", null, "2026/01/23 ~ 01/31 ( atherlys )"]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// An empty cell (JSON `null`).
    Empty,
    /// A numeric cell.
    Number(f64),
    /// A text cell.
    Text(String),
}

impl CellValue {
    /// Returns the trimmed text content of the cell, or `None` for empty
    /// and numeric cells or whitespace-only text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
            _ => None,
        }
    }

    /// Renders the cell as display text.
    ///
    /// Whole numbers render without a fractional part, matching how the
    /// upstream spreadsheet parser stringifies numeric ID cells.
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
        }
    }

    /// Interprets the cell as a day-of-month column header.
    ///
    /// Accepts whole non-negative numbers and all-digit text. Whether the
    /// value forms a real date in the report month is checked later, when
    /// columns are mapped to dates.
    pub fn day_number(&self) -> Option<u32> {
        match self {
            CellValue::Number(n) if n.fract() == 0.0 && *n >= 0.0 && *n <= u32::MAX as f64 => {
                Some(*n as u32)
            }
            CellValue::Text(s) => {
                let trimmed = s.trim();
                if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
                    trimmed.parse().ok()
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Returns true if the cell is empty or whitespace-only text.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) => false,
        }
    }
}

/// One sheet of a raw export workbook: a name and a grid of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    /// The sheet (tab) name.
    pub name: String,
    /// The cell grid, row-major. Rows may be ragged.
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Returns the cell at `(row, col)`, treating out-of-bounds as empty.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        self.rows.get(row).and_then(|r| r.get(col)).unwrap_or(&EMPTY)
    }
}

/// A raw export workbook as handed over by the file-parsing collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    /// The sheets of the workbook, in file order.
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Finds the sheet whose name case-insensitively equals `"Logs"`.
    ///
    /// No other naming convention is supported; callers treat `None` as a
    /// hard parse error.
    pub fn logs_sheet(&self) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name.eq_ignore_ascii_case("logs"))
    }
}
