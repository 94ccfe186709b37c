//! seo_audit library: rule-based SEO and accessibility analysis of HTML
//!
//! This library inspects raw HTML and reports metadata, document-level issues,
//! element-level issues attributed to page sections, and scores.
//!
//! # Example
//!
//! ```
//! use seo_audit::{audit_html, ExternalScores, Section};
//!
//! let html = r#"<html><head><title>Welcome to our example store</title></head>
//! <body><footer><img src="logo.png"></footer></body></html>"#;
//!
//! let report = audit_html(html, Some("https://example.com"), ExternalScores::default());
//! let footer = report.element_analysis.section(Section::Footer).unwrap();
//! assert_eq!(footer.score, 90);
//! println!("overall score: {}", report.overall_score);
//! ```
//!
//! The analyzers are synchronous and keep no state. The batch runner
//! (`run_audit`) requires a Tokio runtime.

pub mod analysis;
pub mod app;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod parse;
pub mod report;
mod run;
pub mod suggest;
pub mod utils;

// Re-export public API
pub use analysis::{analyze_document, analyze_elements};
pub use config::{Config, LogFormat, LogLevel, Opt, OutputFormat};
pub use error_handling::{AuditError, ConfigError, SuggestionError};
pub use models::{
    ElementAnalysisResult, ElementIssue, HeadingCounts, HtmlAnalysisResult, ImageCounts, Issue,
    LinkCounts, Section, SectionAnalysis, Severity,
};
pub use parse::is_valid_html;
pub use report::{audit_html, AuditReport, ExternalScores, ScoreBreakdown};
pub use run::{run_audit, BatchReport, InputOutcome};
pub use suggest::{SuggestionClient, SuggestionConfig, SuggestionEngine};
