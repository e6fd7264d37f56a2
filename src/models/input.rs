//! Input models for the ROI engine.
//!
//! This module contains the [`CalculationInput`] record and the
//! [`InvestmentPeriod`] enum describing the investment holding period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The investment holding period, in exactly one of two representations.
///
/// Encoding the two duration modes as an enum guarantees the invariant
/// that a calculation never mixes a date range with an explicit period:
/// whichever variant is constructed is the only duration source used.
///
/// # Example
///
/// ```
/// use roi_engine::models::InvestmentPeriod;
/// use chrono::NaiveDate;
///
/// let period = InvestmentPeriod::DateRange {
///     start_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
/// };
/// assert!(matches!(period, InvestmentPeriod::DateRange { .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "duration_mode", rename_all = "snake_case")]
pub enum InvestmentPeriod {
    /// A start/end calendar date pair. The end date may precede the start
    /// date; the difference then propagates as a negative duration.
    DateRange {
        /// The first day of the investment.
        start_date: NaiveDate,
        /// The last day of the investment.
        end_date: NaiveDate,
    },
    /// An explicit years/months/days triple. Values may be fractional and
    /// each defaults to 0 when the caller had nothing to supply.
    ExplicitPeriod {
        /// Number of years held.
        years: f64,
        /// Number of months held.
        months: f64,
        /// Number of days held.
        days: f64,
    },
}

/// Input record for a single return calculation.
///
/// Immutable and constructed per invocation. Monetary fields are `f64`
/// because the engine's contract is IEEE-754 arithmetic: degenerate
/// inputs (e.g. a zero initial investment) must yield non-finite results
/// rather than errors.
///
/// # Example
///
/// ```
/// use roi_engine::models::{CalculationInput, InvestmentPeriod};
///
/// let input = CalculationInput {
///     initial_investment: 1000.0,
///     final_value: 1500.0,
///     additional_costs: 0.0,
///     period: InvestmentPeriod::ExplicitPeriod {
///         years: 2.0,
///         months: 4.0,
///         days: 8.0,
///     },
/// };
/// assert_eq!(input.final_value, 1500.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// The amount originally invested. Defaults to 0 when absent upstream.
    pub initial_investment: f64,
    /// The value of the investment at the end of the period.
    pub final_value: f64,
    /// Additional costs incurred over the holding period (fees, charges).
    pub additional_costs: f64,
    /// The investment holding period.
    #[serde(flatten)]
    pub period: InvestmentPeriod,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_serialize_date_range_input() {
        let input = CalculationInput {
            initial_investment: 1000.0,
            final_value: 1500.0,
            additional_costs: 25.0,
            period: InvestmentPeriod::DateRange {
                start_date: date("2022-01-01"),
                end_date: date("2024-05-09"),
            },
        };

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["duration_mode"], "date_range");
        assert_eq!(json["start_date"], "2022-01-01");
        assert_eq!(json["initial_investment"], 1000.0);
    }

    #[test]
    fn test_deserialize_explicit_period_input() {
        let json = r#"{
            "initial_investment": 1000.0,
            "final_value": 1500.0,
            "additional_costs": 0.0,
            "duration_mode": "explicit_period",
            "years": 2.0,
            "months": 4.0,
            "days": 8.0
        }"#;

        let input: CalculationInput = serde_json::from_str(json).unwrap();
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
    fn test_round_trip_preserves_input() {
        let input = CalculationInput {
            initial_investment: 500.0,
            final_value: 450.0,
            additional_costs: 10.0,
            period: InvestmentPeriod::ExplicitPeriod {
                years: 0.0,
                months: 6.5,
                days: 0.0,
            },
        };

        let json = serde_json::to_string(&input).unwrap();
        let back: CalculationInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
    }
}
