//! Application configuration and constants.
//!
//! This module provides:
//! - Analysis thresholds, score penalties and weights
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt, OutputFormat};
