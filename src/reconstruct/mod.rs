//! Shift reconstruction over raw timeclock exports.
//!
//! This module turns the semi-structured weekly export grid into ordered,
//! validated [`EmployeeWeekResult`] rows: period derivation from the
//! duration header, column-to-date mapping, employee block extraction,
//! and the day-by-day punch reconstruction with the 04:00 rollover rule.

mod blocks;
mod columns;
mod days;
mod headers;

pub use blocks::{DaySchedule, EmployeeBlock, scan_employee_blocks};
pub use columns::{DayColumn, map_day_columns};
pub use days::{ReconstructedWeek, reconstruct_days};
pub use headers::{find_date_header, find_duration_header};

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeWeekResult, ReportPeriod, Sheet, Workbook};

/// Reconstructs every employee's week from a raw export workbook.
///
/// Looks up the sheet named `"Logs"` (case-insensitive) and delegates to
/// [`reconstruct_sheet`].
///
/// # Errors
///
/// Returns [`EngineError::LogsSheetNotFound`] when the workbook has no
/// such sheet, plus any error [`reconstruct_sheet`] can produce. Errors
/// abort the whole parse; there is no partial output.
pub fn reconstruct_workbook(workbook: &Workbook) -> EngineResult<Vec<EmployeeWeekResult>> {
    let sheet = workbook.logs_sheet().ok_or(EngineError::LogsSheetNotFound)?;
    reconstruct_sheet(sheet)
}

/// Reconstructs every employee's week from one raw export sheet.
///
/// The returned rows are in the order employees appear in the grid; week
/// metadata (ISO week number, week-ending date) is shared by all of them.
///
/// # Errors
///
/// - [`EngineError::DurationHeaderNotFound`] / [`EngineError::DurationFormatInvalid`] /
///   [`EngineError::PeriodOutOfOrder`] for a missing or malformed duration header
/// - [`EngineError::DateHeaderNotFound`] when no day-of-month header row exists
/// - [`EngineError::PunchTokenInvalid`] for an unreadable punch cell token
///
/// # Example
///
/// ```
/// use timeclock_engine::models::{CellValue, Sheet};
/// use timeclock_engine::reconstruct::reconstruct_sheet;
///
/// fn text(s: &str) -> CellValue {
///     CellValue::Text(s.to_string())
/// }
///
/// let mut marker = vec![CellValue::Empty; 11];
/// marker[0] = text("No:");
/// marker[2] = text("1042");
/// marker[10] = text("Maria Lopez");
///
/// let sheet = Sheet {
///     name: "Logs".to_string(),
///     rows: vec![
///         vec![text("Duration:"), CellValue::Empty, text("2026/01/23 ~ 01/31 ( atherlys )")],
///         vec![CellValue::Empty, CellValue::Number(23.0), CellValue::Number(24.0)],
///         marker,
///         vec![CellValue::Empty, text("08:00 16:00"), CellValue::Empty],
///     ],
/// };
///
/// let results = reconstruct_sheet(&sheet).unwrap();
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].employee_name, "Maria Lopez");
/// assert_eq!(results[0].total_hours, rust_decimal::Decimal::from(8));
/// ```
pub fn reconstruct_sheet(sheet: &Sheet) -> EngineResult<Vec<EmployeeWeekResult>> {
    let header = find_duration_header(sheet).ok_or(EngineError::DurationHeaderNotFound)?;
    let period = ReportPeriod::parse(header)?;

    let date_header_row = find_date_header(sheet).ok_or(EngineError::DateHeaderNotFound)?;
    let day_columns = map_day_columns(&sheet.rows[date_header_row], period.start_date);

    let blocks = scan_employee_blocks(sheet, date_header_row, &day_columns)?;

    let results = blocks
        .into_iter()
        .map(|block| {
            let week = reconstruct_days(&block.days);
            EmployeeWeekResult {
                employee_name: block.employee_name,
                employee_number: block.employee_number,
                week_number: period.week_number(),
                week_ending_date: period.week_ending_display(),
                total_hours: week.total_hours,
                flags: week.flags,
                segments: week.segments,
            }
        })
        .collect();

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CellValue, ShiftFlag};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn marker_row(number: &str, name: &str) -> Vec<CellValue> {
        let mut row = vec![CellValue::Empty; 11];
        row[0] = text("No:");
        row[2] = text(number);
        row[10] = text(name);
        row
    }

    fn date_header(days: &[u32]) -> Vec<CellValue> {
        let mut row = vec![CellValue::Empty];
        row.extend(days.iter().map(|&d| CellValue::Number(f64::from(d))));
        row
    }

    fn punch_row(cells: &[&str]) -> Vec<CellValue> {
        let mut row = vec![CellValue::Empty];
        row.extend(cells.iter().map(|&c| {
            if c.is_empty() {
                CellValue::Empty
            } else {
                text(c)
            }
        }));
        row
    }

    fn logs_sheet(rows: Vec<Vec<CellValue>>) -> Sheet {
        Sheet {
            name: "Logs".to_string(),
            rows,
        }
    }

    fn reference_sheet() -> Sheet {
        logs_sheet(vec![
            vec![
                text("Duration:"),
                CellValue::Empty,
                text("2026/01/23 ~ 01/31 ( atherlys )"),
            ],
            date_header(&[23, 24, 25, 26, 27]),
            marker_row("1042", "Maria Lopez"),
            punch_row(&["", "08:00 16:00", "23:30", "02:00", ""]),
            marker_row("1043", "Jo Chen"),
            punch_row(&["09:00 17:00", "09:00 17:00", "", "", "17:00"]),
        ])
    }

    // ==========================================================================
    // RS-001: the spec walkthrough, end to end
    // ==========================================================================
    #[test]
    fn test_rs_001_walkthrough_sheet() {
        let results = reconstruct_sheet(&reference_sheet()).unwrap();
        assert_eq!(results.len(), 2);

        let maria = &results[0];
        assert_eq!(maria.employee_name, "Maria Lopez");
        assert_eq!(maria.employee_number, "1042");
        assert_eq!(maria.week_number, 5);
        assert_eq!(maria.week_ending_date, "31/01/2026");
        assert_eq!(maria.total_hours, dec("10.50"));
        assert!(maria.flags.is_empty());
        assert_eq!(maria.comments(), "");

        let jo = &results[1];
        assert_eq!(jo.employee_number, "1043");
        assert_eq!(jo.total_hours, dec("16.00"));
        assert_eq!(jo.flags, vec![ShiftFlag::IncompleteShift]);
        assert_eq!(jo.comments(), "Incomplete Shift - Review");
    }

    #[test]
    fn test_results_follow_grid_order() {
        let results = reconstruct_sheet(&reference_sheet()).unwrap();
        let numbers: Vec<_> = results.iter().map(|r| r.employee_number.as_str()).collect();
        assert_eq!(numbers, vec!["1042", "1043"]);
    }

    #[test]
    fn test_missing_duration_header_fails() {
        let sheet = logs_sheet(vec![
            date_header(&[23, 24]),
            marker_row("1042", "Maria Lopez"),
            punch_row(&["08:00 16:00", ""]),
        ]);
        let err = reconstruct_sheet(&sheet).unwrap_err();
        assert!(matches!(err, EngineError::DurationHeaderNotFound));
    }

    #[test]
    fn test_malformed_duration_header_fails() {
        let sheet = logs_sheet(vec![
            vec![text("Duration:"), CellValue::Empty, text("last week sometime")],
            date_header(&[23]),
        ]);
        let err = reconstruct_sheet(&sheet).unwrap_err();
        assert!(matches!(err, EngineError::DurationFormatInvalid { .. }));
    }

    #[test]
    fn test_missing_date_header_fails() {
        let sheet = logs_sheet(vec![vec![
            text("Duration:"),
            CellValue::Empty,
            text("2026/01/23 ~ 01/31"),
        ]]);
        let err = reconstruct_sheet(&sheet).unwrap_err();
        assert!(matches!(err, EngineError::DateHeaderNotFound));
    }

    #[test]
    fn test_missing_logs_sheet_fails_with_no_partial_output() {
        let workbook = Workbook {
            sheets: vec![Sheet {
                name: "Summary".to_string(),
                rows: reference_sheet().rows,
            }],
        };
        let err = reconstruct_workbook(&workbook).unwrap_err();
        assert!(matches!(err, EngineError::LogsSheetNotFound));
    }

    #[test]
    fn test_workbook_finds_logs_sheet_case_insensitively() {
        let mut sheet = reference_sheet();
        sheet.name = "LOGS".to_string();
        let workbook = Workbook {
            sheets: vec![
                Sheet {
                    name: "Summary".to_string(),
                    rows: vec![],
                },
                sheet,
            ],
        };
        let results = reconstruct_workbook(&workbook).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_sheet_with_no_employee_blocks() {
        let sheet = logs_sheet(vec![
            vec![
                text("Duration:"),
                CellValue::Empty,
                text("2026/01/23 ~ 01/31"),
            ],
            date_header(&[23, 24]),
        ]);
        let results = reconstruct_sheet(&sheet).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_every_token_is_consumed() {
        let results = reconstruct_sheet(&reference_sheet()).unwrap();

        // Maria: 4 tokens; Jo: 5 tokens.
        let consumed: usize = results
            .iter()
            .flat_map(|r| r.segments.iter())
            .map(|s| usize::from(s.in_time.is_some()) + usize::from(s.out_time.is_some()))
            .sum();
        assert_eq!(consumed, 9);
    }
}
