//! Reconstructed shift segments and anomaly flags.
//!
//! Every punch token in the raw grid ends up in exactly one
//! [`ShiftSegment`]: as the IN or OUT of a valid shift, or inside an
//! ignored segment recording an anomaly (invalid duration, missing OUT,
//! or an unpaired early-morning OUT).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::punch::PunchTime;

/// A per-employee anomaly detected during shift reconstruction.
///
/// Flags are kept structured so downstream consumers (audit UI) can
/// filter by kind; they are only joined into display text at the
/// boundary via [`EmployeeWeekResult::comments`].
///
/// [`EmployeeWeekResult::comments`]: super::EmployeeWeekResult::comments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftFlag {
    /// A reconstructed shift exceeded the 18-hour validity cap.
    InvalidShift,
    /// A clock-in had no resolvable clock-out.
    IncompleteShift,
}

impl std::fmt::Display for ShiftFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftFlag::InvalidShift => write!(f, "Invalid Shift"),
            ShiftFlag::IncompleteShift => write!(f, "Incomplete Shift"),
        }
    }
}

/// One reconstructed work shift (or ignored punch event) for an employee.
///
/// `hours` is always zero when `ignored` is true; ignored segments never
/// contribute to the weekly total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftSegment {
    /// The calendar date the shift started on.
    pub date: NaiveDate,
    /// The clock-in time. `None` only for an unpaired early-morning OUT,
    /// which has no IN to attach to.
    pub in_time: Option<PunchTime>,
    /// The clock-out time. `None` for incomplete shifts (rendered as
    /// `MISSING` downstream).
    pub out_time: Option<PunchTime>,
    /// Worked hours, rounded to 2 decimal places. Zero when ignored.
    pub hours: Decimal,
    /// Whether this segment is excluded from the weekly total.
    #[serde(default)]
    pub ignored: bool,
    /// Human-readable note for ignored segments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ShiftSegment {
    /// A valid worked shift contributing `hours` to the weekly total.
    pub fn valid(
        date: NaiveDate,
        in_time: PunchTime,
        out_time: PunchTime,
        hours: Decimal,
    ) -> Self {
        Self {
            date,
            in_time: Some(in_time),
            out_time: Some(out_time),
            hours,
            ignored: false,
            comment: None,
        }
    }

    /// An ignored shift whose duration exceeded the 18-hour cap.
    pub fn over_cap(date: NaiveDate, in_time: PunchTime, out_time: PunchTime) -> Self {
        Self {
            date,
            in_time: Some(in_time),
            out_time: Some(out_time),
            hours: Decimal::ZERO,
            ignored: true,
            comment: Some("Invalid Shift - Review (>18h)".to_string()),
        }
    }

    /// An ignored segment for a clock-in with no resolvable clock-out.
    pub fn incomplete(date: NaiveDate, in_time: PunchTime) -> Self {
        Self {
            date,
            in_time: Some(in_time),
            out_time: None,
            hours: Decimal::ZERO,
            ignored: true,
            comment: Some("Incomplete Shift - Review".to_string()),
        }
    }

    /// An ignored segment for an early-morning OUT with no pending clock-in.
    pub fn unpaired_out(date: NaiveDate, out_time: PunchTime) -> Self {
        Self {
            date,
            in_time: None,
            out_time: Some(out_time),
            hours: Decimal::ZERO,
            ignored: true,
            comment: Some("Ignored: Unpaired OUT <= 04:00".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn punch(s: &str) -> PunchTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_valid_segment_is_not_ignored() {
        let segment = ShiftSegment::valid(
            make_date("2026-01-24"),
            punch("08:00"),
            punch("16:00"),
            Decimal::from_str("8.00").unwrap(),
        );
        assert!(!segment.ignored);
        assert!(segment.comment.is_none());
        assert_eq!(segment.hours, Decimal::from_str("8.00").unwrap());
    }

    #[test]
    fn test_over_cap_segment_has_zero_hours() {
        let segment =
            ShiftSegment::over_cap(make_date("2026-01-24"), punch("01:00"), punch("23:30"));
        assert!(segment.ignored);
        assert_eq!(segment.hours, Decimal::ZERO);
        assert_eq!(
            segment.comment.as_deref(),
            Some("Invalid Shift - Review (>18h)")
        );
    }

    #[test]
    fn test_incomplete_segment_has_no_out_time() {
        let segment = ShiftSegment::incomplete(make_date("2026-01-24"), punch("17:00"));
        assert!(segment.ignored);
        assert!(segment.out_time.is_none());
        assert_eq!(segment.comment.as_deref(), Some("Incomplete Shift - Review"));
    }

    #[test]
    fn test_unpaired_out_segment_has_no_in_time() {
        let segment = ShiftSegment::unpaired_out(make_date("2026-01-24"), punch("02:00"));
        assert!(segment.ignored);
        assert!(segment.in_time.is_none());
        assert_eq!(
            segment.comment.as_deref(),
            Some("Ignored: Unpaired OUT <= 04:00")
        );
    }

    #[test]
    fn test_flag_display() {
        assert_eq!(ShiftFlag::InvalidShift.to_string(), "Invalid Shift");
        assert_eq!(ShiftFlag::IncompleteShift.to_string(), "Incomplete Shift");
    }

    #[test]
    fn test_flag_serialization() {
        assert_eq!(
            serde_json::to_string(&ShiftFlag::InvalidShift).unwrap(),
            "\"invalid_shift\""
        );
        assert_eq!(
            serde_json::to_string(&ShiftFlag::IncompleteShift).unwrap(),
            "\"incomplete_shift\""
        );
    }

    #[test]
    fn test_segment_serialization_round_trip() {
        let segment = ShiftSegment::valid(
            make_date("2026-01-24"),
            punch("23:30"),
            punch("02:00"),
            Decimal::from_str("2.50").unwrap(),
        );
        let json = serde_json::to_string(&segment).unwrap();
        assert!(json.contains("\"in_time\":\"23:30\""));
        assert!(json.contains("\"out_time\":\"02:00\""));
        assert!(!json.contains("comment"));

        let back: ShiftSegment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, segment);
    }
}
