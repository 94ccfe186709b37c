//! Scores folded from document issues.

use crate::config::*;
use crate::models::{Issue, Severity};

fn clamp_score(score: i32) -> u8 {
    score.clamp(SCORE_MIN, SCORE_MAX) as u8
}

fn weighted_score<'a>(
    issues: impl IntoIterator<Item = &'a Issue>,
    weight: impl Fn(Severity) -> i32,
) -> u8 {
    let penalty: i32 = issues.into_iter().map(|issue| weight(issue.severity)).sum();
    clamp_score(SCORE_MAX - penalty)
}

/// 100 minus 10/5/2 per high/medium/low issue, clamped to `[0, 100]`.
pub fn seo_score(issues: &[Issue]) -> u8 {
    weighted_score(issues, |severity| match severity {
        Severity::High => SEO_WEIGHT_HIGH,
        Severity::Medium => SEO_WEIGHT_MEDIUM,
        Severity::Low => SEO_WEIGHT_LOW,
    })
}

/// Whether an issue title mentions an accessibility concern.
pub fn is_accessibility_issue(issue: &Issue) -> bool {
    let title = issue.title.to_lowercase();
    ACCESSIBILITY_KEYWORDS
        .iter()
        .any(|keyword| title.contains(keyword))
}

/// 100 minus 15/8/3 per high/medium/low accessibility issue, clamped.
///
/// Returns `ACCESSIBILITY_NO_ISSUES_SCORE` when no issue is
/// accessibility-related.
pub fn accessibility_score(issues: &[Issue]) -> u8 {
    let relevant: Vec<&Issue> = issues.iter().filter(|i| is_accessibility_issue(i)).collect();
    if relevant.is_empty() {
        return ACCESSIBILITY_NO_ISSUES_SCORE;
    }
    weighted_score(relevant, |severity| match severity {
        Severity::High => ACCESSIBILITY_WEIGHT_HIGH,
        Severity::Medium => ACCESSIBILITY_WEIGHT_MEDIUM,
        Severity::Low => ACCESSIBILITY_WEIGHT_LOW,
    })
}

/// Rounded mean of the available sub-scores; 0 when there are none.
pub fn overall_score(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u32 = scores.iter().map(|s| u32::from(*s)).sum();
    let count = scores.len() as u32;
    ((sum + count / 2) / count) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity, title: &str) -> Issue {
        Issue {
            id: 1,
            severity,
            title: title.to_string(),
            description: String::new(),
            how_to_fix: String::new(),
        }
    }

    #[test]
    fn test_seo_score_weights() {
        let issues = vec![
            issue(Severity::High, "Missing page title"),
            issue(Severity::Medium, "Missing structured data"),
            issue(Severity::Low, "Page title too long"),
        ];
        assert_eq!(seo_score(&issues), 100 - 10 - 5 - 2);
        assert_eq!(seo_score(&[]), 100);
    }

    #[test]
    fn test_seo_score_clamps_at_zero() {
        let issues: Vec<Issue> = (0..20)
            .map(|_| issue(Severity::High, "Missing page title"))
            .collect();
        assert_eq!(seo_score(&issues), 0);
    }

    #[test]
    fn test_accessibility_score_fallback_when_no_relevant_issue() {
        let issues = vec![issue(Severity::High, "Missing page title")];
        assert_eq!(accessibility_score(&issues), 90);
        assert_eq!(accessibility_score(&[]), 90);
    }

    #[test]
    fn test_accessibility_score_counts_only_relevant_issues() {
        let issues = vec![
            issue(Severity::High, "Missing page title"),
            issue(Severity::Medium, "Images missing alt text"),
            issue(Severity::High, "Missing viewport meta tag"),
            issue(Severity::Low, "H3 headings without H2"),
        ];
        assert_eq!(accessibility_score(&issues), 100 - 8 - 15 - 3);
    }

    #[test]
    fn test_accessibility_keywords_case_insensitive() {
        assert!(is_accessibility_issue(&issue(Severity::Low, "ARIA role misuse")));
        assert!(!is_accessibility_issue(&issue(Severity::Low, "Missing structured data")));
    }

    #[test]
    fn test_overall_score_rounds_mean() {
        assert_eq!(overall_score(&[100, 90]), 95);
        assert_eq!(overall_score(&[100, 91]), 96);
        assert_eq!(overall_score(&[80, 70, 61]), 70);
        assert_eq!(overall_score(&[]), 0);
    }
}
