//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_MAX_CONCURRENCY, MAX_CONCURRENCY_LIMIT};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How audit reports are written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary per input
    Text,
    /// One pretty-printed JSON array of reports
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use seo_audit::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     inputs: vec![PathBuf::from("index.html")],
///     reference_url: Some("https://example.com".to_string()),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTML files to audit (`-` reads stdin)
    pub inputs: Vec<PathBuf>,

    /// Reference URL used for link classification and reporting
    pub reference_url: Option<String>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Report output format
    pub output: OutputFormat,

    /// Maximum documents analysed at once
    pub max_concurrency: usize,

    /// Reject inputs that do not look like complete HTML documents
    pub require_valid_html: bool,

    /// Substitute a placeholder report when an input cannot be audited
    pub fallback_on_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            reference_url: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output: OutputFormat::Text,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            require_valid_html: false,
            fallback_on_error: false,
        }
    }
}

impl Config {
    /// Checks option values that clap cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the concurrency is outside `1..=MAX_CONCURRENCY_LIMIT`
    /// or the reference URL cannot be normalised.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrency == 0 || self.max_concurrency > MAX_CONCURRENCY_LIMIT {
            return Err(ConfigError::InvalidConcurrency {
                value: self.max_concurrency,
                max: MAX_CONCURRENCY_LIMIT,
            });
        }
        if let Some(url) = &self.reference_url {
            if crate::app::validate_and_normalize_url(url).is_none() {
                return Err(ConfigError::InvalidReferenceUrl(url.clone()));
            }
        }
        Ok(())
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Audit a single file
/// seo_audit index.html
///
/// # Audit several files with a reference URL, JSON output
/// seo_audit index.html about.html --url https://example.com --output json
///
/// # Audit markup piped on stdin
/// curl -s https://example.com | seo_audit - --url https://example.com
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "seo_audit",
    about = "Audits HTML documents for SEO and accessibility issues."
)]
pub struct Opt {
    /// HTML files to audit ('-' reads stdin)
    #[arg(value_parser, required = true)]
    pub inputs: Vec<PathBuf>,

    /// Reference URL (used to classify links as internal/external)
    #[arg(long)]
    pub url: Option<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Report output: text|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Maximum documents analysed at once
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Reject inputs that lack <html>, <head>, <body> or </html>
    #[arg(long)]
    pub require_valid_html: bool,

    /// Emit a placeholder report instead of failing on unreadable inputs
    #[arg(long)]
    pub fallback_on_error: bool,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            inputs: opt.inputs,
            reference_url: opt.url,
            log_level: opt.log_level,
            log_format: opt.log_format,
            output: opt.output,
            max_concurrency: opt.max_concurrency,
            require_valid_html: opt.require_valid_html,
            fallback_on_error: opt.fallback_on_error,
        }
    }
}
