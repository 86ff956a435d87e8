//! Report period model.
//!
//! The weekly export carries a free-text duration header of the form
//! `YYYY/MM/DD ~ MM/DD ( label )`. This module parses that header into a
//! concrete date range and derives the payroll week identifiers shared by
//! every employee in the file.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The date range covered by one raw export, parsed from its duration header.
///
/// The end date is built from the start date's year plus the header's end
/// month/day; a period that would cross a year boundary fails parsing with
/// [`EngineError::PeriodOutOfOrder`] rather than misattributing the year.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::ReportPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportPeriod::parse("2026/01/23 ~ 01/31 ( atherlys )").unwrap();
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2026, 1, 23).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
/// assert_eq!(period.week_ending_display(), "31/01/2026");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// The first day of the report period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the report period (inclusive).
    pub end_date: NaiveDate,
}

impl ReportPeriod {
    /// Parses a duration header of the form `YYYY/MM/DD ~ MM/DD`, with any
    /// trailing label ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DurationFormatInvalid`] if the header does not
    /// match the pattern, and [`EngineError::PeriodOutOfOrder`] if the derived
    /// end date precedes the start date.
    pub fn parse(header: &str) -> EngineResult<Self> {
        let invalid = || EngineError::DurationFormatInvalid {
            value: header.to_string(),
        };

        let (start_part, end_part) = header.split_once('~').ok_or_else(invalid)?;

        // The start date is the last whitespace token before the '~'; the
        // end day/month is the first token after it (the bracketed label
        // that follows is ignored).
        let start_token = start_part.split_whitespace().last().ok_or_else(invalid)?;
        let end_token = end_part.split_whitespace().next().ok_or_else(invalid)?;

        let start_date =
            NaiveDate::parse_from_str(start_token, "%Y/%m/%d").map_err(|_| invalid())?;

        let (month_part, day_part) = end_token.split_once('/').ok_or_else(invalid)?;
        let end_month: u32 = month_part.parse().map_err(|_| invalid())?;
        let end_day: u32 = day_part.parse().map_err(|_| invalid())?;

        let end_date =
            NaiveDate::from_ymd_opt(start_date.year(), end_month, end_day).ok_or_else(invalid)?;

        if end_date < start_date {
            return Err(EngineError::PeriodOutOfOrder {
                start: start_date,
                end: end_date,
            });
        }

        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// The ISO-8601 week number of the period's end date.
    pub fn week_number(&self) -> u32 {
        self.end_date.iso_week().week()
    }

    /// The period end date formatted as `DD/MM/YYYY` for paysheet display.
    pub fn week_ending_display(&self) -> String {
        self.end_date.format("%d/%m/%Y").to_string()
    }
}
