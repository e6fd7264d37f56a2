//! Top-level calculation entry point.

use crate::models::{CalculationInput, CalculationResult};

use super::annualized::compute_annualized_roi;
use super::duration::compute_duration;
use super::returns::compute_returns;
use super::rounding::round_to_two_decimals;

/// Computes the complete return calculation for one input record.
///
/// Resolves the holding-period duration, net returns, simple ROI, and
/// annualized ROI, then rounds the monetary and percentage outputs to two
/// decimals for presentation. Rounding happens exactly once, here at the
/// boundary; the ROI fed into annualization stays full-precision. The
/// duration in fractional years is an exception by definition: it is the
/// two-decimal value produced by [`compute_duration`], and that same
/// rounded value is what the annualization exponent uses.
///
/// A pure function: no I/O, no shared state, and a deterministic
/// (possibly non-finite) numeric result for every input, however
/// degenerate. It never errors.
///
/// # Example
///
/// ```
/// use roi_engine::calculation::calculate;
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
///
/// let result = calculate(&input);
/// assert_eq!(result.net_returns, 500.0);
/// assert_eq!(result.roi_percent, 50.0);
/// assert_eq!(result.duration_years_decimal, 2.36);
/// assert_eq!(result.annualized_roi_percent, 18.74);
/// ```
pub fn calculate(input: &CalculationInput) -> CalculationResult {
    let duration = compute_duration(&input.period);
    let returns = compute_returns(
        input.initial_investment,
        input.final_value,
        input.additional_costs,
    );
    let annualized = compute_annualized_roi(returns.roi_percent, duration.years_decimal);

    CalculationResult {
        net_returns: round_to_two_decimals(returns.net_returns),
        roi_percent: round_to_two_decimals(returns.roi_percent),
        annualized_roi_percent: round_to_two_decimals(annualized),
        duration_years_decimal: duration.years_decimal,
        duration_breakdown: duration.breakdown,
    }
}
