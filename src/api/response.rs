//! Response types for the Timeclock Reconstruction Engine API.
//!
//! This module defines the success envelopes and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::EmployeeWeekResult;
use crate::paysheet::Paysheet;

/// Response body for the `/reconstruct` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconstructResponse {
    /// Unique identifier for this reconstruction run.
    pub reconstruction_id: Uuid,
    /// When the reconstruction was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// One entry per employee, in grid order.
    pub employees: Vec<EmployeeWeekResult>,
}

/// Response body for the `/paysheet` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaysheetResponse {
    /// Unique identifier for this paysheet run.
    pub paysheet_id: Uuid,
    /// When the paysheet was generated.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The generated paysheet.
    pub paysheet: Paysheet,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::LogsSheetNotFound => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "LOGS_SHEET_NOT_FOUND",
                    error.to_string(),
                    "The uploaded workbook must contain a sheet named 'Logs'",
                ),
            },
            EngineError::DurationHeaderNotFound => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "DURATION_HEADER_NOT_FOUND",
                    error.to_string(),
                    "The Logs sheet must contain a row starting with 'Duration:'",
                ),
            },
            EngineError::DurationFormatInvalid { ref value } => {
                let details = format!(
                    "Expected 'YYYY/MM/DD ~ MM/DD' in the duration header, got '{}'",
                    value
                );
                ApiErrorResponse {
                    status: StatusCode::BAD_REQUEST,
                    error: ApiError::with_details(
                        "DURATION_FORMAT_INVALID",
                        error.to_string(),
                        details,
                    ),
                }
            }
            EngineError::DateHeaderNotFound => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "DATE_HEADER_NOT_FOUND",
                    error.to_string(),
                    "The Logs sheet must contain a row of day-of-month column headers",
                ),
            },
            EngineError::PeriodOutOfOrder { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "PERIOD_OUT_OF_ORDER",
                    error.to_string(),
                    "Report periods crossing a year boundary are not supported",
                ),
            },
            EngineError::PunchTokenInvalid { ref token } => {
                let details = format!("Punch cells must contain 'HH:MM' tokens, got '{}'", token);
                ApiErrorResponse {
                    status: StatusCode::BAD_REQUEST,
                    error: ApiError::with_details(
                        "PUNCH_TOKEN_INVALID",
                        error.to_string(),
                        details,
                    ),
                }
            }
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_structural_errors_map_to_400() {
        let cases = vec![
            (EngineError::LogsSheetNotFound, "LOGS_SHEET_NOT_FOUND"),
            (EngineError::DurationHeaderNotFound, "DURATION_HEADER_NOT_FOUND"),
            (
                EngineError::DurationFormatInvalid {
                    value: "bad".to_string(),
                },
                "DURATION_FORMAT_INVALID",
            ),
            (EngineError::DateHeaderNotFound, "DATE_HEADER_NOT_FOUND"),
            (
                EngineError::PunchTokenInvalid {
                    token: "25:99".to_string(),
                },
                "PUNCH_TOKEN_INVALID",
            ),
        ];

        for (engine_error, expected_code) in cases {
            let api_error: ApiErrorResponse = engine_error.into();
            assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
            assert_eq!(api_error.error.code, expected_code);
        }
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let engine_error = EngineError::ConfigNotFound {
            path: "./config/nis".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
