use std::fmt::Write as _;

use crate::config::{SUGGESTION_MAX_COUNT, SUGGESTION_PROMPT_MAX_ISSUES};
use crate::report::AuditReport;
use crate::utils::truncate_chars;

const DESCRIPTION_MAX_CHARS: usize = 200;

/// Renders the prompt sent to the model for one report.
pub fn build_prompt(report: &AuditReport) -> String {
    let mut prompt = String::new();
    let url = if report.url.is_empty() {
        "(no URL)"
    } else {
        report.url.as_str()
    };

    // Writing to a String cannot fail.
    let _ = writeln!(
        prompt,
        "You are an SEO consultant. Suggest concrete improvements for {}.",
        url
    );
    let _ = writeln!(
        prompt,
        "Overall score: {}/100 (SEO {}, accessibility {}).",
        report.overall_score, report.scores.seo, report.scores.accessibility
    );

    if !report.metadata.title.is_empty() {
        let _ = writeln!(prompt, "Title: {}", report.metadata.title);
    }
    if !report.metadata.description.is_empty() {
        let _ = writeln!(
            prompt,
            "Description: {}",
            truncate_chars(&report.metadata.description, DESCRIPTION_MAX_CHARS)
        );
    }

    if report.issues.is_empty() {
        let _ = writeln!(prompt, "No issues were detected.");
    } else {
        let _ = writeln!(prompt, "Issues:");
        for issue in report.issues.iter().take(SUGGESTION_PROMPT_MAX_ISSUES) {
            let _ = writeln!(
                prompt,
                "- [{}] {}: {}",
                issue.severity,
                issue.title,
                truncate_chars(&issue.description, DESCRIPTION_MAX_CHARS)
            );
        }
        if report.issues.len() > SUGGESTION_PROMPT_MAX_ISSUES {
            let _ = writeln!(
                prompt,
                "- ... and {} more",
                report.issues.len() - SUGGESTION_PROMPT_MAX_ISSUES
            );
        }
    }

    for section in &report.element_analysis.section_analysis {
        if !section.issues.is_empty() {
            let _ = writeln!(
                prompt,
                "Section {}: score {}, {} issue(s).",
                section.name,
                section.score,
                section.issues.len()
            );
        }
    }

    let _ = write!(
        prompt,
        "Answer with at most {} suggestions, one per line.",
        SUGGESTION_MAX_COUNT
    );
    prompt
}

/// Strips a list marker such as `-`, `*`, `•`, `3.` or `3)`.
fn strip_marker(line: &str) -> &str {
    let line = line.trim();
    if let Some(rest) = line
        .strip_prefix('-')
        .or_else(|| line.strip_prefix('*'))
        .or_else(|| line.strip_prefix('•'))
    {
        return rest.trim();
    }

    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            return rest.trim();
        }
    }
    line
}

/// Splits a model answer into individual suggestions.
///
/// One suggestion per non-empty line, list markers removed, at most
/// `SUGGESTION_MAX_COUNT`.
pub fn parse_suggestions(text: &str) -> Vec<String> {
    text.lines()
        .map(strip_marker)
        .filter(|line| !line.is_empty())
        .take(SUGGESTION_MAX_COUNT)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Issue, Severity};
    use crate::report::{audit_html, ExternalScores};

    #[test]
    fn test_parse_suggestions_strips_markers() {
        let text = "- first\n* second\n• third\n4. fourth\n5) fifth\nplain\n\n   \n";
        assert_eq!(
            parse_suggestions(text),
            vec!["first", "second", "third", "fourth", "fifth", "plain"]
        );
    }

    #[test]
    fn test_parse_suggestions_caps_count() {
        let text: String = (0..25).map(|i| format!("- item {}\n", i)).collect();
        let parsed = parse_suggestions(&text);
        assert_eq!(parsed.len(), SUGGESTION_MAX_COUNT);
        assert_eq!(parsed[0], "item 0");
    }

    #[test]
    fn test_parse_keeps_numbers_inside_text() {
        assert_eq!(parse_suggestions("2024 was a good year"), vec!["2024 was a good year"]);
    }

    #[test]
    fn test_build_prompt_lists_issues() {
        let report = audit_html(
            "<html><head><title>Hi</title></head><body></body></html>",
            Some("https://example.com"),
            ExternalScores::default(),
        );
        let prompt = build_prompt(&report);
        assert!(prompt.contains("https://example.com"));
        assert!(prompt.contains("Title: Hi"));
        assert!(prompt.contains("[medium] Page title too short"));
        assert!(prompt.ends_with("one per line."));
    }

    #[test]
    fn test_build_prompt_limits_issue_count() {
        let mut report = audit_html("<html></html>", None, ExternalScores::default());
        report.issues = (1..=30)
            .map(|id| Issue {
                id,
                severity: Severity::Low,
                title: format!("Issue {}", id),
                description: "x".repeat(500),
                how_to_fix: String::new(),
            })
            .collect();
        let prompt = build_prompt(&report);
        assert!(prompt.contains("(no URL)"));
        assert!(prompt.contains("Issue 20:"));
        assert!(!prompt.contains("Issue 21:"));
        assert!(prompt.contains("and 10 more"));
        assert!(!prompt.contains(&"x".repeat(201)));
    }
}
