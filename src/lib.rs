//! Investment Return Calculation Engine
//!
//! This crate provides a pure calculation engine for investment returns:
//! net profit, simple ROI, annualized ROI, and a normalized investment
//! duration in fractional years with a human-readable breakdown.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
