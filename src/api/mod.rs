//! HTTP API module for the ROI engine.
//!
//! This module provides the REST API endpoint for computing investment
//! returns. It owns everything the pure engine does not: coercing raw
//! field values to numbers, validating date fields, and formatting
//! results (including non-finite values) for display.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, DurationMode};
pub use response::{ApiError, CalculationResponse, DisplayBlock};
pub use state::AppState;
