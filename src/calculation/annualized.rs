//! Annualized ROI calculation.

/// Normalizes a simple ROI to a one-year holding period.
///
/// `((1 + roi/100) ^ (1/duration_years) - 1) * 100`, computed with
/// [`f64::powf`] and deliberately not special-cased:
///
/// - a zero duration makes the exponent infinite, and whatever the
///   platform `pow` yields for that base flows through (infinity for a
///   positive ROI);
/// - a ROI below -100% makes the base negative, and a fractional
///   exponent then yields NaN.
///
/// Downstream consumers already tolerate these non-finite values, so
/// patching them here would change observable behavior.
///
/// # Example
///
/// ```
/// use roi_engine::calculation::{compute_annualized_roi, round_to_two_decimals};
///
/// // 50% over exactly one year is 50% annualized.
/// assert_eq!(round_to_two_decimals(compute_annualized_roi(50.0, 1.0)), 50.0);
///
/// // Positive growth over a zero-length period is infinite.
/// assert!(compute_annualized_roi(50.0, 0.0).is_infinite());
/// ```
pub fn compute_annualized_roi(roi_percent: f64, duration_years: f64) -> f64 {
    ((1.0 + roi_percent / 100.0).powf(1.0 / duration_years) - 1.0) * 100.0
}
