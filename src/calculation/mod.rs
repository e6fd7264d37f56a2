//! Calculation logic for the ROI engine.
//!
//! This module contains all the calculation functions for determining
//! investment returns: holding-period duration resolution (date range or
//! explicit period), net returns and simple ROI, annualized ROI via
//! compound-growth exponentiation, presentation rounding, and the
//! top-level [`calculate`] entry point that assembles a complete result.

mod annualized;
mod duration;
mod engine;
mod returns;
mod rounding;

pub use annualized::compute_annualized_roi;
pub use duration::{
    BREAKDOWN_DAYS_PER_MONTH, DAYS_PER_MONTH, DAYS_PER_YEAR, DurationResult, compute_duration,
};
pub use engine::calculate;
pub use returns::{ReturnsResult, compute_returns};
pub use rounding::round_to_two_decimals;
