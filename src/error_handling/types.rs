//! Error type definitions.
//!
//! This module defines the error types of the fallible outer layers and the
//! outcome categories tracked while auditing a batch of inputs.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Invalid option values.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Concurrency outside the accepted range.
    #[error("max concurrency must be between 1 and {max}, got {value}")]
    InvalidConcurrency {
        /// Value supplied by the caller
        value: usize,
        /// Largest accepted value
        max: usize,
    },

    /// Reference URL that cannot be normalised to http(s).
    #[error("invalid reference URL: {0}")]
    InvalidReferenceUrl(String),
}

/// Failures of a single audit input.
///
/// The analyzers themselves never fail; these errors come from getting the
/// markup into them.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The input could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Input path (`-` for stdin)
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The input was rejected by the HTML plausibility gate.
    #[error("{0} does not look like an HTML document")]
    InvalidHtml(PathBuf),

    /// The blocking analysis task did not complete.
    #[error("analysis task for {path} failed: {message}")]
    Task {
        /// Input path
        path: PathBuf,
        /// Join error description
        message: String,
    },
}

/// Failures of the AI suggestion exchange.
#[derive(Error, Debug)]
pub enum SuggestionError {
    /// No API key was configured.
    #[error("suggestion client is missing an API key")]
    MissingApiKey,

    /// The client could not complete the request.
    #[error("suggestion request failed: {0}")]
    Client(String),

    /// The model answered with nothing usable.
    #[error("suggestion response contained no suggestions")]
    EmptyResponse,
}

/// Outcome categories counted while auditing a batch of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum OutcomeType {
    /// Input analysed successfully
    Audited,
    /// Input could not be read
    ReadFailure,
    /// Input rejected by the HTML plausibility gate
    InvalidHtml,
    /// Analysis task failed
    TaskFailure,
    /// Placeholder report substituted for a failed input
    Placeholder,
}

impl std::fmt::Display for OutcomeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OutcomeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeType::Audited => "Audited",
            OutcomeType::ReadFailure => "Read failure",
            OutcomeType::InvalidHtml => "Rejected (not HTML)",
            OutcomeType::TaskFailure => "Analysis task failure",
            OutcomeType::Placeholder => "Placeholder report",
        }
    }

    /// Whether this outcome represents a failed input.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            OutcomeType::ReadFailure | OutcomeType::InvalidHtml | OutcomeType::TaskFailure
        )
    }
}

impl AuditError {
    /// Outcome category this error is counted under.
    pub fn outcome(&self) -> OutcomeType {
        match self {
            AuditError::Read { .. } => OutcomeType::ReadFailure,
            AuditError::InvalidHtml(_) => OutcomeType::InvalidHtml,
            AuditError::Task { .. } => OutcomeType::TaskFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_outcome_types_have_string_representation() {
        for outcome in OutcomeType::iter() {
            assert!(
                !outcome.as_str().is_empty(),
                "{:?} should have non-empty string",
                outcome
            );
        }
    }

    #[test]
    fn test_outcome_failure_classification() {
        assert!(!OutcomeType::Audited.is_failure());
        assert!(!OutcomeType::Placeholder.is_failure());
        assert!(OutcomeType::ReadFailure.is_failure());
        assert!(OutcomeType::InvalidHtml.is_failure());
        assert!(OutcomeType::TaskFailure.is_failure());
    }

    #[test]
    fn test_audit_error_outcome_mapping() {
        let err = AuditError::InvalidHtml(PathBuf::from("a.html"));
        assert_eq!(err.outcome(), OutcomeType::InvalidHtml);
        assert_eq!(err.to_string(), "a.html does not look like an HTML document");

        let err = AuditError::Read {
            path: PathBuf::from("missing.html"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.outcome(), OutcomeType::ReadFailure);
        assert!(err.to_string().contains("missing.html"));
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::InvalidConcurrency { value: 0, max: 64 };
        assert_eq!(
            err.to_string(),
            "max concurrency must be between 1 and 64, got 0"
        );
    }
}
