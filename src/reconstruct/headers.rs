//! Structural header lookups over the raw grid.
//!
//! The export has no fixed layout: the duration header and the
//! day-of-month header row are located by scanning for their shape.
//! Each lookup is an independent pass returning a typed `Option` so it
//! can be unit-tested against minimal synthetic grids.

use crate::models::Sheet;

/// The label cell that introduces the duration header row.
const DURATION_LABEL: &str = "Duration:";

/// Column of the duration row holding the free-text period value.
const DURATION_VALUE_COLUMN: usize = 2;

/// Finds the duration header value: the first row whose first cell is
/// `"Duration:"` yields the text two columns over
/// (e.g. `"2026/01/23 ~ 01/31 ( atherlys )"`).
///
/// Returns `None` when no such row exists or the value cell is blank;
/// the caller surfaces that as a structural parse error.
pub fn find_duration_header(sheet: &Sheet) -> Option<&str> {
    sheet
        .rows
        .iter()
        .find(|row| {
            row.first()
                .and_then(|cell| cell.as_text())
                .is_some_and(|text| text == DURATION_LABEL)
        })
        .and_then(|row| row.get(DURATION_VALUE_COLUMN))
        .and_then(|cell| cell.as_text())
}

/// Finds the date header row: the first row containing any cell that
/// reads as a pure day-of-month number (numeric cell or all-digit text).
///
/// Returns the row index, or `None` when the sheet has no such row.
pub fn find_date_header(sheet: &Sheet) -> Option<usize> {
    sheet
        .rows
        .iter()
        .position(|row| row.iter().any(|cell| cell.day_number().is_some()))
}
