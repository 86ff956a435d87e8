//! HTTP request handlers for the Timeclock Reconstruction Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{EmployeeWeekResult, Workbook};
use crate::paysheet::build_paysheet;
use crate::reconstruct::reconstruct_workbook;

use super::request::{PaysheetRequest, ReconstructRequest};
use super::response::{ApiError, ApiErrorResponse, PaysheetResponse, ReconstructResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reconstruct", post(reconstruct_handler))
        .route("/paysheet", post(paysheet_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error body.
fn json_rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /reconstruct endpoint.
///
/// Accepts a raw export workbook and returns the reconstructed weekly
/// entries for every employee found in the Logs sheet.
async fn reconstruct_handler(
    payload: Result<Json<ReconstructRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing reconstruction request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(rejection, correlation_id);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let workbook: Workbook = request.into();

    let start_time = Instant::now();
    match reconstruct_workbook(&workbook) {
        Ok(employees) => {
            let duration = start_time.elapsed();
            let flagged = employees.iter().filter(|e| e.has_anomalies()).count();
            info!(
                correlation_id = %correlation_id,
                employees = employees.len(),
                flagged,
                duration_us = duration.as_micros(),
                "Reconstruction completed successfully"
            );
            let response = ReconstructResponse {
                reconstruction_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                employees,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Reconstruction failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /paysheet endpoint.
///
/// Joins reconstructed weekly entries with hourly rates and the NIS
/// contribution table to produce a payroll-ready paysheet.
async fn paysheet_handler(
    State(state): State<AppState>,
    payload: Result<Json<PaysheetRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing paysheet request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(rejection, correlation_id);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let directory = request.directory();
    let config = state.config();
    let nis_table = match request.effective_year {
        Some(year) => config.effective_table(year),
        None => config.latest_table(),
    };

    let entries: Vec<EmployeeWeekResult> =
        request.entries.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    let paysheet = build_paysheet(&entries, &directory, nis_table);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        rows = paysheet.rows.len(),
        total_hours = %paysheet.total_hours,
        total_amount = %paysheet.total_amount,
        duration_us = duration.as_micros(),
        "Paysheet generated successfully"
    );

    let response = PaysheetResponse {
        paysheet_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        paysheet,
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
