//! Presentation rounding.

/// Rounds a value to two decimal places, half away from zero.
///
/// Applied once, at the presentation boundary; intermediate results stay
/// full-precision. Non-finite values pass through unchanged: infinity
/// rounds to infinity and NaN stays NaN, so the non-finite contract of
/// the engine survives the rounding step.
///
/// # Example
///
/// ```
/// use roi_engine::calculation::round_to_two_decimals;
///
/// assert_eq!(round_to_two_decimals(18.7449), 18.74);
/// assert_eq!(round_to_two_decimals(-19.999999999999996), -20.0);
/// assert!(round_to_two_decimals(f64::INFINITY).is_infinite());
/// assert!(round_to_two_decimals(f64::NAN).is_nan());
/// ```
pub fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
