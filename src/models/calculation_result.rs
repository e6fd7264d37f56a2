//! Calculation result models for the ROI engine.
//!
//! This module contains the [`CalculationResult`] type that captures all
//! outputs of a return calculation, and the [`DurationBreakdown`] used for
//! the human-readable duration decomposition.

use serde::{Deserialize, Serialize};

/// A human-readable years/months/days decomposition of the holding period.
///
/// For date-range calculations the fields are always whole numbers,
/// derived with a flat 30-day month. For explicit-period calculations the
/// fields echo whatever the caller supplied, including fractional values.
/// The two sources deliberately use different month-length approximations
/// (30 vs 30.4375 days) and are not reconcilable with each other.
///
/// # Example
///
/// ```
/// use roi_engine::models::DurationBreakdown;
///
/// let breakdown = DurationBreakdown {
///     years: 2.0,
///     months: 4.0,
///     days: 8.0,
/// };
/// assert_eq!(breakdown.years, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationBreakdown {
    /// Whole years (date range) or years as supplied (explicit period).
    pub years: f64,
    /// Whole months (date range) or months as supplied (explicit period).
    pub months: f64,
    /// Whole days (date range) or days as supplied (explicit period).
    pub days: f64,
}

/// The complete result of a return calculation.
///
/// A pure value object: every field is derived from the input, rounded to
/// two decimal places at this presentation boundary. Non-finite values
/// (ROI with a zero initial investment, annualized ROI over a zero-length
/// period) are carried through unchanged so the rendering layer can choose
/// how to display them. Note that serde_json renders non-finite `f64`
/// fields as `null`.
///
/// # Example
///
/// ```
/// use roi_engine::models::{CalculationResult, DurationBreakdown};
///
/// let result = CalculationResult {
///     net_returns: 500.0,
///     roi_percent: 50.0,
///     annualized_roi_percent: 18.74,
///     duration_years_decimal: 2.36,
///     duration_breakdown: DurationBreakdown {
///         years: 2.0,
///         months: 4.0,
///         days: 8.0,
///     },
/// };
/// assert_eq!(result.net_returns, 500.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Net profit: final value minus initial investment minus costs.
    pub net_returns: f64,
    /// Simple return on investment as a percentage.
    pub roi_percent: f64,
    /// ROI normalized to a one-year holding period, as a percentage.
    pub annualized_roi_percent: f64,
    /// The holding period in fractional years, rounded to two decimals.
    pub duration_years_decimal: f64,
    /// The human-readable decomposition of the holding period.
    pub duration_breakdown: DurationBreakdown,
}
