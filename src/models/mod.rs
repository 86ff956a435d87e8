//! Core data models for the Timeclock Reconstruction Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod grid;
mod period;
mod punch;
mod segment;
mod week_result;

pub use grid::{CellValue, Sheet, Workbook};
pub use period::ReportPeriod;
pub use punch::PunchTime;
pub use segment::{ShiftFlag, ShiftSegment};
pub use week_result::EmployeeWeekResult;
