//! Rendering audit reports for the terminal.

use colored::{ColoredString, Colorize};

use crate::models::Severity;
use crate::report::AuditReport;

fn paint_severity(severity: Severity) -> ColoredString {
    let label = format!("{:<6}", severity.as_str());
    match severity {
        Severity::High => label.red().bold(),
        Severity::Medium => label.yellow(),
        Severity::Low => label.cyan(),
    }
}

fn paint_score(score: u8) -> ColoredString {
    let text = score.to_string();
    match score {
        90..=100 => text.green(),
        50..=89 => text.yellow(),
        _ => text.red(),
    }
}

fn optional_score(score: Option<u8>) -> String {
    score.map_or_else(|| "n/a".to_string(), |s| paint_score(s).to_string())
}

/// Human-readable block for one report.
pub fn render_text(source: &str, report: &AuditReport) -> String {
    let mut out = String::new();
    let heading = if report.url.is_empty() {
        source.to_string()
    } else {
        format!("{} ({})", source, report.url)
    };
    out.push_str(&format!("{}\n", heading.bold()));
    if report.placeholder {
        out.push_str(&format!(
            "  {}\n",
            "placeholder report: the input could not be analysed".yellow()
        ));
    }

    out.push_str(&format!(
        "  Overall {}  SEO {}  Accessibility {}  Performance {}  Best practices {}\n",
        paint_score(report.overall_score),
        paint_score(report.scores.seo),
        paint_score(report.scores.accessibility),
        optional_score(report.scores.performance),
        optional_score(report.scores.best_practices),
    ));

    if report.issues.is_empty() {
        out.push_str("  No document issues\n");
    } else {
        out.push_str(&format!("  Issues ({}):\n", report.issues.len()));
        for issue in &report.issues {
            out.push_str(&format!(
                "    {} {}: {}\n",
                paint_severity(issue.severity),
                issue.title,
                issue.description
            ));
        }
    }

    out.push_str("  Sections:\n");
    for section in &report.element_analysis.section_analysis {
        out.push_str(&format!(
            "    {:<14} {:>3}  ({} issue{})\n",
            section.name,
            section.score,
            section.issues.len(),
            if section.issues.len() == 1 { "" } else { "s" }
        ));
    }

    if !report.suggestions.is_empty() {
        out.push_str("  Suggestions:\n");
        for suggestion in &report.suggestions {
            out.push_str(&format!("    - {}\n", suggestion));
        }
    }
    out
}

/// Pretty-printed JSON array of reports.
pub fn render_json(reports: &[&AuditReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{audit_html, ExternalScores};

    #[test]
    fn test_render_text_lists_issues_and_sections() {
        colored::control::set_override(false);
        let report = audit_html(
            "<html><head></head><body><img src=\"a.png\"></body></html>",
            Some("https://example.com"),
            ExternalScores::default(),
        );
        let text = render_text("page.html", &report);
        assert!(text.starts_with("page.html (https://example.com)"));
        assert!(text.contains("Missing page title"));
        assert!(text.contains("Main Content"));
        assert!(text.contains("Performance n/a"));
        assert!(!text.contains("placeholder report"));
    }

    #[test]
    fn test_render_json_is_array() {
        let report = audit_html("<html></html>", None, ExternalScores::default());
        let json = render_json(&[&report]).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(value[0]["placeholder"], false);
    }
}
