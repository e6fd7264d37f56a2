//! Request types for the ROI engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint, including the coercion rules for raw field values: numeric
//! fields accept a JSON number, a numeric string, `null`, or absence,
//! and anything unparseable coerces to 0. That coercion belongs here, at
//! the collaborator boundary; the engine itself only ever sees
//! well-formed numbers.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::EngineError;
use crate::models::{CalculationInput, InvestmentPeriod};

/// Which duration representation the request supplies.
///
/// Mirrors the mutually-exclusive toggle of the input form: either a
/// start/end date pair or an explicit years/months/days triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationMode {
    /// Use `start_date` and `end_date`.
    Dates,
    /// Use `years`, `months`, and `days`.
    Period,
}

/// Request body for the `/calculate` endpoint.
///
/// # Example
///
/// ```
/// use roi_engine::api::{CalculationRequest, DurationMode};
///
/// let json = r#"{
///     "initial_investment": "1000",
///     "final_value": 1500,
///     "duration_mode": "period",
///     "years": 2,
///     "months": 4,
///     "days": 8
/// }"#;
///
/// let request: CalculationRequest = serde_json::from_str(json).unwrap();
/// assert_eq!(request.initial_investment, 1000.0);
/// assert_eq!(request.additional_costs, 0.0);
/// assert_eq!(request.duration_mode, DurationMode::Period);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The amount originally invested.
    #[serde(default, deserialize_with = "coerce_to_number")]
    pub initial_investment: f64,
    /// The value of the investment at the end of the period.
    #[serde(default, deserialize_with = "coerce_to_number")]
    pub final_value: f64,
    /// Additional costs incurred over the holding period.
    #[serde(default, deserialize_with = "coerce_to_number")]
    pub additional_costs: f64,
    /// Which duration representation to read.
    pub duration_mode: DurationMode,
    /// The first day of the investment (dates mode).
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// The last day of the investment (dates mode).
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Years held (period mode).
    #[serde(default, deserialize_with = "coerce_to_number")]
    pub years: f64,
    /// Months held (period mode).
    #[serde(default, deserialize_with = "coerce_to_number")]
    pub months: f64,
    /// Days held (period mode).
    #[serde(default, deserialize_with = "coerce_to_number")]
    pub days: f64,
}

/// Deserializes a numeric field leniently: numbers pass through, numeric
/// strings are parsed, and `null` or unparseable values become 0.
fn coerce_to_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawField {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<RawField>::deserialize(deserializer)? {
        Some(RawField::Number(value)) => value,
        Some(RawField::Text(text)) => text.trim().parse().unwrap_or(0.0),
        Some(RawField::Other(_)) | None => 0.0,
    })
}

impl TryFrom<CalculationRequest> for CalculationInput {
    type Error = EngineError;

    fn try_from(req: CalculationRequest) -> Result<Self, Self::Error> {
        let period = match req.duration_mode {
            DurationMode::Dates => {
                let start_date = req.start_date.ok_or_else(|| missing_date("start_date"))?;
                let end_date = req.end_date.ok_or_else(|| missing_date("end_date"))?;
                InvestmentPeriod::DateRange {
                    start_date,
                    end_date,
                }
            }
            DurationMode::Period => InvestmentPeriod::ExplicitPeriod {
                years: req.years,
                months: req.months,
                days: req.days,
            },
        };

        Ok(CalculationInput {
            initial_investment: req.initial_investment,
            final_value: req.final_value,
            additional_costs: req.additional_costs,
            period,
        })
    }
}

fn missing_date(field: &str) -> EngineError {
    EngineError::InvalidRequest {
        field: field.to_string(),
        message: "required when duration_mode is \"dates\"".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_deserialize_dates_request() {
        let json = r#"{
            "initial_investment": 1000,
            "final_value": 1500,
            "additional_costs": 25,
            "duration_mode": "dates",
            "start_date": "2022-01-01",
            "end_date": "2024-05-09"
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.duration_mode, DurationMode::Dates);
        assert_eq!(request.start_date, Some(date("2022-01-01")));
        assert_eq!(request.additional_costs, 25.0);
    }

    #[test]
    fn test_numeric_strings_are_parsed() {
        let json = r#"{
            "initial_investment": "1000.50",
            "final_value": " 1500 ",
            "duration_mode": "period",
            "years": "2"
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.initial_investment, 1000.50);
        assert_eq!(request.final_value, 1500.0);
        assert_eq!(request.years, 2.0);
    }

    #[test]
    fn test_absent_null_and_garbage_coerce_to_zero() {
        let json = r#"{
            "initial_investment": null,
            "final_value": "not a number",
            "duration_mode": "period",
            "months": true
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.initial_investment, 0.0);
        assert_eq!(request.final_value, 0.0);
        assert_eq!(request.additional_costs, 0.0);
        assert_eq!(request.years, 0.0);
        assert_eq!(request.months, 0.0);
        assert_eq!(request.days, 0.0);
    }

    #[test]
    fn test_missing_duration_mode_is_an_error() {
        let json = r#"{"initial_investment": 1000, "final_value": 1500}"#;
        let result: Result<CalculationRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_conversion_period_mode_ignores_dates() {
        let request = CalculationRequest {
            initial_investment: 1000.0,
            final_value: 1500.0,
            additional_costs: 0.0,
            duration_mode: DurationMode::Period,
            start_date: Some(date("2020-01-01")),
            end_date: None,
            years: 2.0,
            months: 4.0,
            days: 8.0,
        };

        let input: CalculationInput = request.try_into().unwrap();
        assert_eq!(
            input.period,
            InvestmentPeriod::ExplicitPeriod {
                years: 2.0,
                months: 4.0,
                days: 8.0,
            }
        );
    }

    #[test]
    fn test_conversion_dates_mode_requires_both_dates() {
        let request = CalculationRequest {
            initial_investment: 1000.0,
            final_value: 1500.0,
            additional_costs: 0.0,
            duration_mode: DurationMode::Dates,
            start_date: Some(date("2022-01-01")),
            end_date: None,
            years: 0.0,
            months: 0.0,
            days: 0.0,
        };

        let result: Result<CalculationInput, _> = request.try_into();
        assert!(matches!(
            result,
            Err(EngineError::InvalidRequest { field, .. }) if field == "end_date"
        ));
    }
}
