//! Column-to-date mapping.
//!
//! The date header row gives one day-of-month number per data column.
//! Each maps to a concrete date using the report period's start month
//! and year; every other column is not a data column and is skipped.

use chrono::{Datelike, NaiveDate};

use crate::models::CellValue;

/// A data column of the punch grid, resolved to a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayColumn {
    /// The column index within the sheet rows.
    pub column: usize,
    /// The calendar date the column's punches belong to.
    pub date: NaiveDate,
}

/// Maps the date header row to dated data columns.
///
/// Cells that do not read as a day-of-month number are skipped, as are
/// day numbers that do not form a real date in the start month (e.g. 31
/// in a 30-day month). Columns are returned in sheet order, which is the
/// period's chronological order.
pub fn map_day_columns(header_row: &[CellValue], start_date: NaiveDate) -> Vec<DayColumn> {
    header_row
        .iter()
        .enumerate()
        .filter_map(|(column, cell)| {
            let day = cell.day_number()?;
            let date = NaiveDate::from_ymd_opt(start_date.year(), start_date.month(), day)?;
            Some(DayColumn { column, date })
        })
        .collect()
}
