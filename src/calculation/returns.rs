//! Net returns and simple ROI calculation.

use serde::{Deserialize, Serialize};

/// The net profit and simple return on investment for a holding period.
///
/// # Example
///
/// ```
/// use roi_engine::calculation::ReturnsResult;
///
/// let returns = ReturnsResult {
///     net_returns: 500.0,
///     roi_percent: 50.0,
/// };
/// assert_eq!(returns.roi_percent, 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnsResult {
    /// Net profit: final value minus initial investment minus costs.
    pub net_returns: f64,
    /// Simple ROI as a percentage of the initial investment.
    pub roi_percent: f64,
}

/// Computes net returns and simple ROI.
///
/// `net_returns = final_value - initial_investment - additional_costs`
/// and `roi_percent = net_returns / initial_investment * 100`.
///
/// A zero initial investment divides by zero; the IEEE result (positive
/// or negative infinity, or NaN when the net return is also zero) is
/// surfaced as-is rather than coerced to anything displayable. The
/// rendering layer owns that decision.
///
/// # Example
///
/// ```
/// use roi_engine::calculation::compute_returns;
///
/// let returns = compute_returns(1000.0, 1500.0, 0.0);
/// assert_eq!(returns.net_returns, 500.0);
/// assert_eq!(returns.roi_percent, 50.0);
///
/// let degenerate = compute_returns(0.0, 100.0, 0.0);
/// assert!(degenerate.roi_percent.is_infinite());
/// ```
pub fn compute_returns(initial_investment: f64, final_value: f64, additional_costs: f64) -> ReturnsResult {
    let net_returns = final_value - initial_investment - additional_costs;
    let roi_percent = (net_returns / initial_investment) * 100.0;

    ReturnsResult {
        net_returns,
        roi_percent,
    }
}
