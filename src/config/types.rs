//! Configuration types for result presentation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

/// Presentation policy for formatted calculation results.
///
/// The engine surfaces non-finite values (division by zero, zero-length
/// durations, undefined powers) as raw IEEE floats; how those render as
/// text is a free choice of the consumer. This config captures that
/// choice, along with the currency prefix used for monetary text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// Prefix for monetary values (e.g., "$").
    #[serde(default = "default_currency_prefix")]
    pub currency_prefix: String,
    /// Text shown for positive infinity.
    #[serde(default = "default_positive_infinity")]
    pub positive_infinity: String,
    /// Text shown for negative infinity.
    #[serde(default = "default_negative_infinity")]
    pub negative_infinity: String,
    /// Text shown for NaN.
    #[serde(default = "default_not_a_number")]
    pub not_a_number: String,
}

fn default_currency_prefix() -> String {
    "$".to_string()
}

fn default_positive_infinity() -> String {
    "\u{221e}".to_string()
}

fn default_negative_infinity() -> String {
    "-\u{221e}".to_string()
}

fn default_not_a_number() -> String {
    "N/A".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_prefix: default_currency_prefix(),
            positive_infinity: default_positive_infinity(),
            negative_infinity: default_negative_infinity(),
            not_a_number: default_not_a_number(),
        }
    }
}

impl DisplayConfig {
    /// Formats a monetary value with two decimals and the currency prefix.
    ///
    /// Non-finite values render as the configured symbols instead.
    ///
    /// # Example
    ///
    /// ```
    /// use roi_engine::config::DisplayConfig;
    ///
    /// let display = DisplayConfig::default();
    /// assert_eq!(display.format_currency(500.0), "$500.00");
    /// assert_eq!(display.format_currency(-200.0), "$-200.00");
    /// assert_eq!(display.format_currency(f64::NAN), "N/A");
    /// ```
    pub fn format_currency(&self, value: f64) -> String {
        match self.non_finite_text(value) {
            Some(text) => text,
            None => format!("{}{:.2}", self.currency_prefix, value),
        }
    }

    /// Formats a percentage value with two decimals and a `%` suffix.
    ///
    /// # Example
    ///
    /// ```
    /// use roi_engine::config::DisplayConfig;
    ///
    /// let display = DisplayConfig::default();
    /// assert_eq!(display.format_percent(50.0), "50.00%");
    /// assert_eq!(display.format_percent(f64::INFINITY), "\u{221e}");
    /// ```
    pub fn format_percent(&self, value: f64) -> String {
        match self.non_finite_text(value) {
            Some(text) => text,
            None => format!("{:.2}%", value),
        }
    }

    /// Returns the configured symbol for a non-finite value, or `None`
    /// for finite values.
    fn non_finite_text(&self, value: f64) -> Option<String> {
        if value.is_nan() {
            Some(self.not_a_number.clone())
        } else if value == f64::INFINITY {
            Some(self.positive_infinity.clone())
        } else if value == f64::NEG_INFINITY {
            Some(self.negative_infinity.clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_symbols() {
        let display = DisplayConfig::default();
        assert_eq!(display.currency_prefix, "$");
        assert_eq!(display.positive_infinity, "∞");
        assert_eq!(display.negative_infinity, "-∞");
        assert_eq!(display.not_a_number, "N/A");
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let display: DisplayConfig = serde_yaml::from_str("not_a_number: \"—\"").unwrap();
        assert_eq!(display.not_a_number, "—");
        assert_eq!(display.currency_prefix, "$");
    }

    #[test]
    fn test_format_currency_two_decimals() {
        let display = DisplayConfig::default();
        assert_eq!(display.format_currency(500.0), "$500.00");
        assert_eq!(display.format_currency(0.005), "$0.01");
    }

    #[test]
    fn test_format_currency_negative_infinity() {
        let display = DisplayConfig::default();
        assert_eq!(display.format_currency(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn test_format_percent_non_finite() {
        let display = DisplayConfig::default();
        assert_eq!(display.format_percent(f64::INFINITY), "∞");
        assert_eq!(display.format_percent(f64::NAN), "N/A");
    }

    #[test]
    fn test_format_percent_rounding_display_only() {
        let display = DisplayConfig::default();
        assert_eq!(display.format_percent(-20.0), "-20.00%");
    }
}
