//! HTTP API module for the Timeclock Reconstruction Engine.
//!
//! This module provides the REST API endpoints for reconstructing shifts
//! from raw timeclock exports and generating payroll-ready paysheets.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PaysheetRequest, ReconstructRequest, SheetRequest, WeekEntryRequest};
pub use response::{ApiError, PaysheetResponse, ReconstructResponse};
pub use state::AppState;
