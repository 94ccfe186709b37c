//! Combined audit report.
//!
//! Runs both analyzers over the same markup and folds the document issues into
//! the SEO and accessibility sub-scores. Performance and best-practice scores
//! come from external measurements and are passed in when available.

pub mod fallback;
mod scoring;

use serde::{Deserialize, Serialize};

use crate::analysis::{analyze_document, analyze_elements};
use crate::models::{ElementAnalysisResult, HtmlAnalysisResult, Issue};

pub use scoring::{accessibility_score, is_accessibility_issue, overall_score, seo_score};

/// Sub-scores measured outside this crate (e.g. by a page-speed service).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalScores {
    pub performance: Option<u8>,
    pub best_practices: Option<u8>,
}

/// The four audit dimensions, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub performance: Option<u8>,
    pub seo: u8,
    pub accessibility: u8,
    pub best_practices: Option<u8>,
}

impl ScoreBreakdown {
    /// Folds document issues together with external measurements.
    pub fn from_issues(issues: &[Issue], external: ExternalScores) -> Self {
        Self {
            performance: external.performance.map(|s| s.min(100)),
            seo: seo_score(issues),
            accessibility: accessibility_score(issues),
            best_practices: external.best_practices.map(|s| s.min(100)),
        }
    }

    /// Rounded mean of every available dimension.
    pub fn overall(&self) -> u8 {
        let available: Vec<u8> = [
            self.performance,
            Some(self.seo),
            Some(self.accessibility),
            self.best_practices,
        ]
        .into_iter()
        .flatten()
        .collect();
        overall_score(&available)
    }
}

/// Everything a consumer needs to render one audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub url: String,
    pub overall_score: u8,
    pub scores: ScoreBreakdown,
    pub issues: Vec<Issue>,
    pub metadata: HtmlAnalysisResult,
    pub element_analysis: ElementAnalysisResult,
    /// Free-text improvement suggestions, filled in by `suggest`
    pub suggestions: Vec<String>,
    /// True when the report was generated without analysing real markup
    pub placeholder: bool,
}

/// Audits one document with both analyzers.
///
/// # Example
///
/// ```
/// use seo_audit::{audit_html, ExternalScores};
///
/// let report = audit_html("<html><head><title>Hi</title></head></html>", Some("https://example.com"), ExternalScores::default());
/// assert_eq!(report.url, "https://example.com");
/// assert!(report.overall_score <= 100);
/// assert_eq!(report.issues, report.metadata.issues);
/// ```
pub fn audit_html(html: &str, url: Option<&str>, external: ExternalScores) -> AuditReport {
    let metadata = analyze_document(html, url);
    let element_analysis = analyze_elements(html, url.unwrap_or_default());
    let scores = ScoreBreakdown::from_issues(&metadata.issues, external);

    AuditReport {
        url: url.unwrap_or_default().to_string(),
        overall_score: scores.overall(),
        scores,
        issues: metadata.issues.clone(),
        metadata,
        element_analysis,
        suggestions: Vec::new(),
        placeholder: false,
    }
}
