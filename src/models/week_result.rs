//! Per-employee weekly reconstruction result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::segment::{ShiftFlag, ShiftSegment};

/// The reconstructed week for one employee: identity, week metadata,
/// the ordered shift segments, and any anomaly flags.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::{EmployeeWeekResult, ShiftFlag};
/// use rust_decimal::Decimal;
///
/// let result = EmployeeWeekResult {
///     employee_name: "Maria Lopez".to_string(),
///     employee_number: "1042".to_string(),
///     week_number: 5,
///     week_ending_date: "31/01/2026".to_string(),
///     total_hours: Decimal::new(1050, 2), // 10.50
///     flags: vec![ShiftFlag::IncompleteShift],
///     segments: vec![],
/// };
/// assert_eq!(result.comments(), "Incomplete Shift - Review");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeWeekResult {
    /// The employee's display name from the row marker.
    pub employee_name: String,
    /// The employee's number from the row marker, used for rate lookup.
    pub employee_number: String,
    /// ISO-8601 week number of the period's end date.
    pub week_number: u32,
    /// The period end date formatted `DD/MM/YYYY`.
    pub week_ending_date: String,
    /// Sum of hours over non-ignored segments, rounded to 2 decimal places.
    pub total_hours: Decimal,
    /// Deduplicated anomaly flags, in first-occurrence order.
    #[serde(default)]
    pub flags: Vec<ShiftFlag>,
    /// The reconstructed shift segments, in chronological order.
    #[serde(default)]
    pub segments: Vec<ShiftSegment>,
}

impl EmployeeWeekResult {
    /// Joins the flag set into the review comment shown on paysheets:
    /// `"<Flag1> - <Flag2> - Review"`, or an empty string when clean.
    pub fn comments(&self) -> String {
        if self.flags.is_empty() {
            return String::new();
        }
        let joined = self
            .flags
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" - ");
        format!("{joined} - Review")
    }

    /// Returns true if any anomaly flag was raised for this employee.
    pub fn has_anomalies(&self) -> bool {
        !self.flags.is_empty()
    }
}
