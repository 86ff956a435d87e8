//! Request types for the Timeclock Reconstruction Engine API.
//!
//! This module defines the JSON request structures for the `/reconstruct`
//! and `/paysheet` endpoints.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CellValue, EmployeeWeekResult, Sheet, ShiftFlag, Workbook};
use crate::paysheet::EmployeeDirectory;

/// Request body for the `/reconstruct` endpoint.
///
/// Carries the raw export workbook as parsed client-side: one entry per
/// sheet, each a dense row-major grid of cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconstructRequest {
    /// The sheets of the uploaded workbook.
    pub sheets: Vec<SheetRequest>,
}

/// One sheet of the uploaded workbook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetRequest {
    /// The sheet name as it appears in the workbook.
    pub name: String,
    /// Row-major cell grid; rows may have differing lengths.
    pub rows: Vec<Vec<CellValue>>,
}

/// Request body for the `/paysheet` endpoint.
///
/// Joins previously reconstructed weekly entries with employee pay rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaysheetRequest {
    /// Reconstructed weekly entries, as returned by `/reconstruct`.
    pub entries: Vec<WeekEntryRequest>,
    /// Hourly rates keyed by employee number.
    pub rates: BTreeMap<String, Decimal>,
    /// NIS table year to apply; the most recent table when omitted.
    #[serde(default)]
    pub effective_year: Option<i32>,
}

/// One reconstructed employee week in a paysheet request.
///
/// Mirrors the fields of a reconstruction result that the paysheet needs;
/// per-shift segments are not required and are ignored if present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekEntryRequest {
    /// The employee's display name.
    pub employee_name: String,
    /// The employee's number.
    pub employee_number: String,
    /// ISO week number of the report period.
    pub week_number: u32,
    /// Week-ending date in `DD/MM/YYYY` form.
    pub week_ending_date: String,
    /// Reconstructed total hours for the week.
    pub total_hours: Decimal,
    /// Employee-level anomaly flags from reconstruction.
    #[serde(default)]
    pub flags: Vec<ShiftFlag>,
}

impl From<SheetRequest> for Sheet {
    fn from(req: SheetRequest) -> Self {
        Sheet {
            name: req.name,
            rows: req.rows,
        }
    }
}

impl From<ReconstructRequest> for Workbook {
    fn from(req: ReconstructRequest) -> Self {
        Workbook {
            sheets: req.sheets.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<WeekEntryRequest> for EmployeeWeekResult {
    fn from(req: WeekEntryRequest) -> Self {
        EmployeeWeekResult {
            employee_name: req.employee_name,
            employee_number: req.employee_number,
            week_number: req.week_number,
            week_ending_date: req.week_ending_date,
            total_hours: req.total_hours,
            flags: req.flags,
            segments: vec![],
        }
    }
}

impl PaysheetRequest {
    /// Builds the employee directory from the request's rate map.
    pub fn directory(&self) -> EmployeeDirectory {
        EmployeeDirectory::new(self.rates.clone())
    }
}
