//! Error types for the Timeclock Reconstruction Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Structural errors abort an entire parse with no partial output; shift
//! anomalies (invalid or incomplete shifts) are *not* errors and are
//! reported as flags on an otherwise successful result.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Timeclock Reconstruction Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timeclock_engine::error::EngineError;
///
/// let error = EngineError::DurationFormatInvalid {
///     value: "sometime in January".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid duration format: 'sometime in January'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The uploaded workbook has no sheet named "Logs" (case-insensitive).
    #[error("Could not find a sheet labelled 'Logs' in the workbook")]
    LogsSheetNotFound,

    /// No row starting with the "Duration:" label was found in the sheet.
    #[error("Could not find 'Duration:' header in the Logs sheet")]
    DurationHeaderNotFound,

    /// The duration header did not match the `YYYY/MM/DD ~ MM/DD` pattern.
    #[error("Invalid duration format: '{value}'")]
    DurationFormatInvalid {
        /// The raw header text that failed to parse.
        value: String,
    },

    /// No row containing day-of-month column headers was found.
    #[error("Could not find the date header row")]
    DateHeaderNotFound,

    /// The derived period end date precedes the start date.
    ///
    /// The end date is built from the start date's year, so a period
    /// crossing a year boundary (December into January) surfaces here
    /// instead of being silently misattributed to the wrong year.
    #[error("Report period end {end} precedes start {start}")]
    PeriodOutOfOrder {
        /// The parsed period start date.
        start: NaiveDate,
        /// The derived period end date.
        end: NaiveDate,
    },

    /// A punch cell contained a token that is not a valid `HH:MM` time.
    #[error("Invalid punch token: '{token}'")]
    PunchTokenInvalid {
        /// The raw token that failed to parse.
        token: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_sheet_not_found_display() {
        let error = EngineError::LogsSheetNotFound;
        assert_eq!(
            error.to_string(),
            "Could not find a sheet labelled 'Logs' in the workbook"
        );
    }

    #[test]
    fn test_duration_header_not_found_display() {
        let error = EngineError::DurationHeaderNotFound;
        assert_eq!(
            error.to_string(),
            "Could not find 'Duration:' header in the Logs sheet"
        );
    }

    #[test]
    fn test_duration_format_invalid_displays_value() {
        let error = EngineError::DurationFormatInvalid {
            value: "23/01 to 31/01".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid duration format: '23/01 to 31/01'"
        );
    }

    #[test]
    fn test_period_out_of_order_displays_dates() {
        let error = EngineError::PeriodOutOfOrder {
            start: NaiveDate::from_ymd_opt(2026, 12, 28).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 1, 3).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Report period end 2026-01-03 precedes start 2026-12-28"
        );
    }

    #[test]
    fn test_punch_token_invalid_displays_token() {
        let error = EngineError::PunchTokenInvalid {
            token: "25:99".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid punch token: '25:99'");
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/nis.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/nis.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_sheet() -> EngineResult<()> {
            Err(EngineError::LogsSheetNotFound)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_missing_sheet()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
