//! Error handling and batch statistics.
//!
//! This module provides:
//! - Error type definitions for configuration, input loading, and suggestions
//! - Outcome statistics for batch audits
//!
//! The analyzers themselves have no error conditions: malformed markup degrades
//! to "missing" issues instead of failing.

mod stats;
mod types;

// Re-export public API
pub use stats::BatchStats;
pub use types::{AuditError, ConfigError, InitializationError, OutcomeType, SuggestionError};
