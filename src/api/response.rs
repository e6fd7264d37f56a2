//! Response types for the ROI engine API.
//!
//! This module defines the success envelope returned by `/calculate` and
//! the error response structures for the HTTP API. The success envelope
//! carries the raw numeric result (serde_json renders non-finite floats
//! as `null`) alongside preformatted display text, so consumers that
//! only render never need to reimplement the non-finite policy.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::DisplayConfig;
use crate::error::EngineError;
use crate::models::CalculationResult;

/// Success response body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Correlation ID for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced this result.
    pub engine_version: String,
    /// The raw calculation result. Non-finite fields serialize as `null`;
    /// the `display` block carries their textual form.
    pub result: CalculationResult,
    /// Preformatted display text for each result field.
    pub display: DisplayBlock,
    /// `[initial_investment, final_value, net_returns]`, the data series
    /// for a three-bar results visualization.
    pub chart_series: [f64; 3],
}

/// Preformatted display strings for a calculation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayBlock {
    /// Net returns as currency text, e.g. "$500.00".
    pub net_returns: String,
    /// Simple ROI as percent text, e.g. "50.00%".
    pub roi: String,
    /// Annualized ROI as percent text, or a non-finite symbol.
    pub annualized_roi: String,
    /// Duration in fractional years, e.g. "2.36 years".
    pub duration_years: String,
    /// Duration breakdown, e.g. "2 years, 4 months, 8 days".
    pub duration_detailed: String,
}

impl DisplayBlock {
    /// Renders a calculation result as display text under the given
    /// presentation policy.
    pub fn render(result: &CalculationResult, display: &DisplayConfig) -> Self {
        let breakdown = &result.duration_breakdown;
        Self {
            net_returns: display.format_currency(result.net_returns),
            roi: display.format_percent(result.roi_percent),
            annualized_roi: display.format_percent(result.annualized_roi_percent),
            duration_years: format!("{:.2} years", result.duration_years_decimal),
            duration_detailed: format!(
                "{} years, {} months, {} days",
                breakdown.years, breakdown.months, breakdown.days
            ),
        }
    }
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
            EngineError::InvalidRequest { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_REQUEST",
                    format!("Invalid request field '{}': {}", field, message),
                    "The request body contains invalid or missing information",
                ),
            },
        }
    }
}
