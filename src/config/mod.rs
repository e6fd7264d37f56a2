//! Configuration for the ROI engine's presentation layer.
//!
//! The calculation core has no configuration: its behavior is fixed by
//! the numeric contract. What is configurable is presentation — how the
//! API renders non-finite values and formats currency text — which is
//! loaded from YAML at startup.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::DisplayConfig;
