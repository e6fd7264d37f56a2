//! Data models for the ROI engine.
//!
//! This module contains the input and result records exchanged with the
//! calculation engine. Both are plain value types: created fresh per
//! invocation, derived entirely from their fields, and holding no identity
//! or cross-call state.

mod calculation_result;
mod input;

pub use calculation_result::{CalculationResult, DurationBreakdown};
pub use input::{CalculationInput, InvestmentPeriod};
