//! Placeholder reports for inputs that could not be analysed.
//!
//! The values are random and carry no information about the page; reports are
//! flagged with `placeholder = true`. The random source is always supplied by
//! the caller so the deterministic analyzers never see it.

use rand::seq::IndexedRandom;
use rand::Rng;
use strum::IntoEnumIterator;

use super::{AuditReport, ScoreBreakdown};
use crate::models::{
    ElementAnalysisResult, HtmlAnalysisResult, Issue, Section, SectionAnalysis, Severity,
};

const PLACEHOLDER_ISSUES: &[(&str, &str, &str)] = &[
    (
        "Missing meta description",
        "The page may be missing a meta description.",
        "Add a meta description of 70-160 characters.",
    ),
    (
        "Images missing alt text",
        "Some images may be missing alt attributes.",
        "Add alt text to every meaningful image.",
    ),
    (
        "Missing structured data",
        "No structured data could be verified.",
        "Add schema.org JSON-LD describing the page.",
    ),
    (
        "Page title too long",
        "The page title may be truncated in search results.",
        "Keep the title within 60 characters.",
    ),
    (
        "Links without text",
        "Some links may have no descriptive text.",
        "Give every link text describing its destination.",
    ),
];

const SEVERITIES: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

/// Builds a randomized report for `url`.
pub fn placeholder_report<R: Rng + ?Sized>(url: &str, rng: &mut R) -> AuditReport {
    let issue_count = rng.random_range(1..=PLACEHOLDER_ISSUES.len());
    let issues: Vec<Issue> = PLACEHOLDER_ISSUES
        .choose_multiple(rng, issue_count)
        .enumerate()
        .map(|(index, (title, description, how_to_fix))| Issue {
            id: index as u32 + 1,
            severity: *SEVERITIES.choose(rng).unwrap_or(&Severity::Medium),
            title: (*title).to_string(),
            description: (*description).to_string(),
            how_to_fix: (*how_to_fix).to_string(),
        })
        .collect();

    let scores = ScoreBreakdown {
        performance: Some(rng.random_range(40..=95)),
        seo: rng.random_range(40..=95),
        accessibility: rng.random_range(40..=95),
        best_practices: Some(rng.random_range(40..=95)),
    };

    let section_analysis = Section::iter()
        .map(|section| SectionAnalysis {
            score: rng.random_range(50..=100),
            ..SectionAnalysis::new(section)
        })
        .collect();

    log::debug!("Generated placeholder report for '{}'", url);

    AuditReport {
        url: url.to_string(),
        overall_score: scores.overall(),
        scores,
        issues: issues.clone(),
        metadata: HtmlAnalysisResult {
            issues,
            ..Default::default()
        },
        element_analysis: ElementAnalysisResult {
            url: url.to_string(),
            total_elements: 0,
            analyzed_elements: 0,
            element_issues: Vec::new(),
            section_analysis,
        },
        suggestions: Vec::new(),
        placeholder: true,
    }
}
