//! Document analyzer.
//!
//! Extracts document-wide metadata and runs a fixed battery of SEO and
//! accessibility checks, in this order: title, meta description, H1 count,
//! H2 without H1, H3 without H2, image alt text, empty links, viewport,
//! structured data. Every check runs; each contributes at most one issue.

use scraper::Html;

use crate::config::*;
use crate::models::{HeadingCounts, HtmlAnalysisResult, ImageCounts, Issue, LinkCounts, Severity};
use crate::parse;
use crate::utils::char_len;

/// An issue before it has been numbered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDraft {
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub how_to_fix: String,
}

impl IssueDraft {
    fn new(
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
        how_to_fix: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            title: title.into(),
            description: description.into(),
            how_to_fix: how_to_fix.into(),
        }
    }
}

/// Numbers issues sequentially from 1 within one analysis run.
#[derive(Debug, Default)]
pub struct IssueCollector {
    issues: Vec<Issue>,
}

impl IssueCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the draft, if any, with the next id.
    pub fn record(mut self, draft: Option<IssueDraft>) -> Self {
        if let Some(draft) = draft {
            let id = self.issues.len() as u32 + 1;
            self.issues.push(Issue {
                id,
                severity: draft.severity,
                title: draft.title,
                description: draft.description,
                how_to_fix: draft.how_to_fix,
            });
        }
        self
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}

pub fn check_title(title: &str) -> Option<IssueDraft> {
    let length = char_len(title);
    if title.is_empty() {
        Some(IssueDraft::new(
            Severity::High,
            "Missing page title",
            "The page has no <title> element, so search engines have nothing to show as the result headline.",
            "Add a unique, descriptive <title> inside <head>.",
        ))
    } else if length < DOC_TITLE_MIN_LENGTH {
        Some(IssueDraft::new(
            Severity::Medium,
            "Page title too short",
            format!("The page title is only {length} characters long."),
            format!("Use a title of at least {DOC_TITLE_MIN_LENGTH} characters that describes the page."),
        ))
    } else if length > DOC_TITLE_MAX_LENGTH {
        Some(IssueDraft::new(
            Severity::Low,
            "Page title too long",
            format!("The page title is {length} characters long and may be truncated in search results."),
            format!("Keep the title within {DOC_TITLE_MAX_LENGTH} characters."),
        ))
    } else {
        None
    }
}

pub fn check_meta_description(description: &str) -> Option<IssueDraft> {
    let length = char_len(description);
    if description.is_empty() {
        Some(IssueDraft::new(
            Severity::High,
            "Missing meta description",
            "The page has no meta description, so search engines will pick an arbitrary snippet.",
            "Add <meta name=\"description\" content=\"...\"> summarising the page.",
        ))
    } else if length < DOC_DESCRIPTION_MIN_LENGTH {
        Some(IssueDraft::new(
            Severity::Medium,
            "Meta description too short",
            format!("The meta description is only {length} characters long."),
            format!("Write a meta description of at least {DOC_DESCRIPTION_MIN_LENGTH} characters."),
        ))
    } else if length > DOC_DESCRIPTION_MAX_LENGTH {
        Some(IssueDraft::new(
            Severity::Low,
            "Meta description too long",
            format!("The meta description is {length} characters long and may be truncated."),
            format!("Keep the meta description within {DOC_DESCRIPTION_MAX_LENGTH} characters."),
        ))
    } else {
        None
    }
}

pub fn check_h1_count(headings: &HeadingCounts) -> Option<IssueDraft> {
    match headings.h1 {
        0 => Some(IssueDraft::new(
            Severity::High,
            "Missing H1 heading",
            "The page has no H1 heading describing its main topic.",
            "Add exactly one H1 heading near the top of the main content.",
        )),
        1 => None,
        n => Some(IssueDraft::new(
            Severity::Medium,
            "Multiple H1 headings",
            format!("The page has {n} H1 headings, which dilutes the main topic."),
            "Keep a single H1 and demote the others to H2.",
        )),
    }
}

pub fn check_h2_without_h1(headings: &HeadingCounts) -> Option<IssueDraft> {
    (headings.h2 > 0 && headings.h1 == 0).then(|| {
        IssueDraft::new(
            Severity::Medium,
            "H2 headings without H1",
            format!(
                "The page uses {} H2 headings but no H1 above them.",
                headings.h2
            ),
            "Add an H1 heading before the H2 sections.",
        )
    })
}

pub fn check_h3_without_h2(headings: &HeadingCounts) -> Option<IssueDraft> {
    (headings.h3 > 0 && headings.h2 == 0).then(|| {
        IssueDraft::new(
            Severity::Low,
            "H3 headings without H2",
            format!(
                "The page uses {} H3 headings but no H2 headings.",
                headings.h3
            ),
            "Introduce H2 headings so the heading hierarchy has no gaps.",
        )
    })
}

pub fn check_image_alt(images: &ImageCounts) -> Option<IssueDraft> {
    (images.total > 0 && images.without_alt > 0).then(|| {
        IssueDraft::new(
            Severity::Medium,
            "Images missing alt text",
            format!(
                "{} of {} images have no alt attribute.",
                images.without_alt, images.total
            ),
            "Add alt text describing each image, or alt=\"\" for decorative images.",
        )
    })
}

pub fn check_empty_links(links: &LinkCounts) -> Option<IssueDraft> {
    (links.empty_text > 0).then(|| {
        IssueDraft::new(
            Severity::Medium,
            "Links without text",
            format!("{} links have no text content.", links.empty_text),
            "Give every link visible text or an aria-label describing its destination.",
        )
    })
}

pub fn check_viewport(has_viewport: bool) -> Option<IssueDraft> {
    (!has_viewport).then(|| {
        IssueDraft::new(
            Severity::High,
            "Missing viewport meta tag",
            "Without a viewport meta tag the page will not scale on mobile devices.",
            "Add <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">.",
        )
    })
}

pub fn check_structured_data(has_structured_data: bool) -> Option<IssueDraft> {
    (!has_structured_data).then(|| {
        IssueDraft::new(
            Severity::Medium,
            "Missing structured data",
            "No JSON-LD or microdata was found, so search engines cannot build rich results.",
            "Describe the page with schema.org JSON-LD in a <script type=\"application/ld+json\"> block.",
        )
    })
}

/// Analyzes document-wide metadata and SEO/accessibility basics.
///
/// Never fails: unparseable input yields empty metadata and the corresponding
/// "missing" issues.
///
/// # Arguments
///
/// * `html` - Raw HTML markup
/// * `reference_url` - Page URL used to classify links as internal by hostname
///
/// # Example
///
/// ```
/// use seo_audit::{analyze_document, Severity};
///
/// let result = analyze_document("<html><body><h1>Hi</h1></body></html>", None);
/// assert_eq!(result.issues[0].id, 1);
/// assert_eq!(result.issues[0].title, "Missing page title");
/// assert_eq!(result.issues[0].severity, Severity::High);
/// ```
pub fn analyze_document(html: &str, reference_url: Option<&str>) -> HtmlAnalysisResult {
    let document = Html::parse_document(html);

    let title = parse::extract_title(&document);
    let description = parse::extract_meta_description(&document);
    let (heading_counts, heading_structure) = parse::extract_headings(&document);
    let images = parse::count_images(&document);
    let links = parse::count_links(&document, reference_url);
    let has_viewport = parse::has_viewport(&document);
    let has_structured_data = parse::has_structured_data(&document);

    let issues = IssueCollector::new()
        .record(check_title(&title))
        .record(check_meta_description(&description))
        .record(check_h1_count(&heading_counts))
        .record(check_h2_without_h1(&heading_counts))
        .record(check_h3_without_h2(&heading_counts))
        .record(check_image_alt(&images))
        .record(check_empty_links(&links))
        .record(check_viewport(has_viewport))
        .record(check_structured_data(has_structured_data))
        .into_issues();

    log::debug!(
        "Document analysis: {} headings, {} images, {} links, {} issues",
        heading_counts.total(),
        images.total,
        links.total,
        issues.len()
    );

    HtmlAnalysisResult {
        title,
        description,
        keywords: parse::extract_meta_keywords(&document),
        open_graph: parse::extract_open_graph(&document),
        heading_counts,
        heading_structure,
        images,
        links,
        has_viewport,
        has_structured_data,
        issues,
    }
}
