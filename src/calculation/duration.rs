//! Holding-period duration resolution.
//!
//! This module converts either of the two duration representations (a
//! calendar date range or an explicit years/months/days triple) into a
//! fractional-year length plus a human-readable breakdown.
//!
//! The two representations intentionally use different month-length
//! approximations: the date-range breakdown decomposes with a flat
//! 30-day month, while the explicit-period total uses 30.4375 days per
//! month (one twelfth of an average Gregorian year). The discrepancy is
//! part of the engine's observable behavior and must not be unified.

use crate::models::{DurationBreakdown, InvestmentPeriod};

use super::rounding::round_to_two_decimals;

/// Average Gregorian year length, in days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Average month length used when totalling an explicit period, in days.
pub const DAYS_PER_MONTH: f64 = 30.4375;

/// Flat month length used when decomposing a date range, in days.
pub const BREAKDOWN_DAYS_PER_MONTH: f64 = 30.0;

/// The resolved duration of an investment holding period.
///
/// # Example
///
/// ```
/// use roi_engine::calculation::DurationResult;
/// use roi_engine::models::DurationBreakdown;
///
/// let duration = DurationResult {
///     years_decimal: 2.36,
///     breakdown: DurationBreakdown {
///         years: 2.0,
///         months: 4.0,
///         days: 8.0,
///     },
/// };
/// assert_eq!(duration.years_decimal, 2.36);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationResult {
    /// The holding period in fractional years, rounded to two decimals.
    pub years_decimal: f64,
    /// The human-readable decomposition of the same period.
    pub breakdown: DurationBreakdown,
}

/// Resolves an investment period into fractional years and a breakdown.
///
/// # Behavior
///
/// - [`InvestmentPeriod::DateRange`]: the total is the signed number of
///   calendar days from start to end. An end date before the start date
///   is not rejected; it propagates as a negative duration. The breakdown
///   takes whole years at 365.25 days, then whole 30-day months from the
///   remainder, then whole days.
/// - [`InvestmentPeriod::ExplicitPeriod`]: the total is
///   `years * 365.25 + months * 30.4375 + days`. The breakdown echoes the
///   supplied triple without recomputation, fractional values included.
///
/// In both cases `years_decimal` is the total divided by 365.25 and
/// rounded to two decimals; this rounded value is what the rest of the
/// engine consumes.
///
/// # Examples
///
/// ```
/// use roi_engine::calculation::compute_duration;
/// use roi_engine::models::InvestmentPeriod;
/// use chrono::NaiveDate;
///
/// // A full leap year: 366 days.
/// let duration = compute_duration(&InvestmentPeriod::DateRange {
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
/// });
/// assert_eq!(duration.years_decimal, 1.0);
/// assert_eq!(duration.breakdown.years, 1.0);
/// ```
///
/// ```
/// use roi_engine::calculation::compute_duration;
/// use roi_engine::models::InvestmentPeriod;
///
/// let duration = compute_duration(&InvestmentPeriod::ExplicitPeriod {
///     years: 2.0,
///     months: 4.0,
///     days: 8.0,
/// });
/// // 2 * 365.25 + 4 * 30.4375 + 8 = 860.25 days.
/// assert_eq!(duration.years_decimal, 2.36);
/// assert_eq!(duration.breakdown.months, 4.0);
/// ```
pub fn compute_duration(period: &InvestmentPeriod) -> DurationResult {
    match *period {
        InvestmentPeriod::DateRange {
            start_date,
            end_date,
        } => {
            let total_days = (end_date - start_date).num_days() as f64;

            // Whole years first, then flat 30-day months from what is left.
            // The `%` remainder keeps the sign of the dividend, so a
            // negative range decomposes into negative components.
            let remainder = total_days % DAYS_PER_YEAR;
            let breakdown = DurationBreakdown {
                years: (total_days / DAYS_PER_YEAR).floor(),
                months: (remainder / BREAKDOWN_DAYS_PER_MONTH).floor(),
                days: (remainder % BREAKDOWN_DAYS_PER_MONTH).floor(),
            };

            DurationResult {
                years_decimal: round_to_two_decimals(total_days / DAYS_PER_YEAR),
                breakdown,
            }
        }
        InvestmentPeriod::ExplicitPeriod {
            years,
            months,
            days,
        } => {
            let total_days = years * DAYS_PER_YEAR + months * DAYS_PER_MONTH + days;

            DurationResult {
                years_decimal: round_to_two_decimals(total_days / DAYS_PER_YEAR),
                // Echoed as supplied, never recomputed.
                breakdown: DurationBreakdown {
                    years,
                    months,
                    days,
                },
            }
        }
    }
}
