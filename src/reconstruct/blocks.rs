//! Employee block extraction.
//!
//! Below the date header row, employees appear in two-row blocks: a
//! marker row whose first cell is `"No:"` (employee number in column 2,
//! name in column 10), immediately followed by the punch row whose cells
//! line up with the date header columns.

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{PunchTime, Sheet};

use super::columns::DayColumn;

/// The marker cell that opens an employee block.
const EMPLOYEE_ROW_MARKER: &str = "No:";

/// Column of the marker row holding the employee number.
const EMPLOYEE_NUMBER_COLUMN: usize = 2;

/// Column of the marker row holding the employee name.
const EMPLOYEE_NAME_COLUMN: usize = 10;

/// One day's worth of punch tokens for an employee, in cell order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    /// The calendar date of the data column.
    pub date: NaiveDate,
    /// The parsed punch tokens, in the order they appear in the cell.
    pub punches: Vec<PunchTime>,
}

/// An employee's identity and full week of raw punches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeBlock {
    /// The employee number from the marker row.
    pub employee_number: String,
    /// The employee name from the marker row.
    pub employee_name: String,
    /// One entry per mapped data column, in chronological order.
    pub days: Vec<DaySchedule>,
}

/// Scans the sheet below the date header row for employee blocks.
///
/// A marker row with no following punch row (sheet ends) is skipped.
/// Blocks are returned in the order employees appear in the grid.
///
/// # Errors
///
/// Returns [`EngineError::PunchTokenInvalid`] if any punch cell contains
/// a token that is not a valid `HH:MM` time.
///
/// [`EngineError::PunchTokenInvalid`]: crate::error::EngineError::PunchTokenInvalid
pub fn scan_employee_blocks(
    sheet: &Sheet,
    date_header_row: usize,
    columns: &[DayColumn],
) -> EngineResult<Vec<EmployeeBlock>> {
    let mut blocks = Vec::new();
    let mut row = date_header_row + 1;

    while row < sheet.rows.len() {
        let is_marker = sheet
            .cell(row, 0)
            .as_text()
            .is_some_and(|text| text == EMPLOYEE_ROW_MARKER);
        if !is_marker {
            row += 1;
            continue;
        }
        if row + 1 >= sheet.rows.len() {
            break;
        }

        let employee_number = sheet.cell(row, EMPLOYEE_NUMBER_COLUMN).display_text();
        let employee_name = sheet.cell(row, EMPLOYEE_NAME_COLUMN).display_text();

        let punch_row = row + 1;
        let mut days = Vec::with_capacity(columns.len());
        for day_column in columns {
            let cell_text = sheet.cell(punch_row, day_column.column).display_text();
            let punches = cell_text
                .split_whitespace()
                .map(str::parse)
                .collect::<EngineResult<Vec<PunchTime>>>()?;
            days.push(DaySchedule {
                date: day_column.date,
                punches,
            });
        }

        blocks.push(EmployeeBlock {
            employee_number,
            employee_name,
            days,
        });

        // Skip past the punch row.
        row += 2;
    }

    Ok(blocks)
}
