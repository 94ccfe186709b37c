//! Per-category element checks.
//!
//! Each check inspects one category of elements and returns a `CheckOutcome`;
//! none of them touch shared state.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use super::ledger::CheckOutcome;
use crate::analysis::sections::Landmarks;
use crate::config::*;
use crate::models::{ElementIssue, Section, Severity};
use crate::parse::{
    extract_meta_description, extract_title, heading_level, HEADING_SELECTOR, IMAGE_SELECTOR,
    LINK_SELECTOR, META_DESCRIPTION_SELECTOR_STR, TITLE_SELECTOR_STR,
};
use crate::utils::{char_len, element_locator, element_text, parse_selector_unsafe};

static PARAGRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("p", "PARAGRAPH_SELECTOR"));

fn element_issue(
    selector: impl Into<String>,
    element: impl Into<String>,
    issue: impl Into<String>,
    severity: Severity,
    recommendation: impl Into<String>,
    section: Section,
) -> ElementIssue {
    ElementIssue {
        selector: selector.into(),
        element: element.into(),
        issue: issue.into(),
        severity,
        recommendation: recommendation.into(),
        section,
    }
}

/// Page title presence and length. Always counts as one element.
pub fn check_title(document: &Html) -> CheckOutcome {
    let mut outcome = CheckOutcome {
        examined: 1,
        ..Default::default()
    };
    let title = extract_title(document);
    let length = char_len(&title);

    let finding = if title.is_empty() {
        Some((
            Severity::High,
            "Missing page title".to_string(),
            "Add a descriptive <title> element inside <head>.".to_string(),
            PENALTY_TITLE_MISSING,
        ))
    } else if length < ELEMENT_TITLE_MIN_LENGTH {
        Some((
            Severity::Medium,
            format!("Page title is too short ({length} characters)"),
            format!(
                "Expand the title to at least {ELEMENT_TITLE_MIN_LENGTH} characters with relevant keywords."
            ),
            PENALTY_TITLE_SHORT,
        ))
    } else if length > ELEMENT_TITLE_MAX_LENGTH {
        Some((
            Severity::Low,
            format!("Page title is too long ({length} characters)"),
            format!(
                "Shorten the title to {ELEMENT_TITLE_MAX_LENGTH} characters or fewer so it is not truncated in search results."
            ),
            PENALTY_TITLE_LONG,
        ))
    } else {
        None
    };

    if let Some((severity, issue, recommendation, penalty)) = finding {
        outcome.push(
            element_issue(
                TITLE_SELECTOR_STR,
                "Page Title",
                issue,
                severity,
                recommendation,
                Section::Header,
            ),
            penalty,
        );
    }
    outcome
}

/// Meta description presence and length. Always counts as one element.
pub fn check_meta_description(document: &Html) -> CheckOutcome {
    let mut outcome = CheckOutcome {
        examined: 1,
        ..Default::default()
    };
    let description = extract_meta_description(document);
    let length = char_len(&description);

    let finding = if description.is_empty() {
        Some((
            Severity::High,
            "Missing meta description".to_string(),
            "Add a <meta name=\"description\"> tag summarising the page.".to_string(),
            PENALTY_DESCRIPTION_MISSING,
        ))
    } else if length < ELEMENT_DESCRIPTION_MIN_LENGTH {
        Some((
            Severity::Medium,
            format!("Meta description is too short ({length} characters)"),
            format!(
                "Write a meta description of at least {ELEMENT_DESCRIPTION_MIN_LENGTH} characters."
            ),
            PENALTY_DESCRIPTION_SHORT,
        ))
    } else if length > ELEMENT_DESCRIPTION_MAX_LENGTH {
        Some((
            Severity::Low,
            format!("Meta description is too long ({length} characters)"),
            format!(
                "Keep the meta description within {ELEMENT_DESCRIPTION_MAX_LENGTH} characters."
            ),
            PENALTY_DESCRIPTION_LONG,
        ))
    } else {
        None
    };

    if let Some((severity, issue, recommendation, penalty)) = finding {
        outcome.push(
            element_issue(
                META_DESCRIPTION_SELECTOR_STR,
                "Meta Description",
                issue,
                severity,
                recommendation,
                Section::Header,
            ),
            penalty,
        );
    }
    outcome
}

/// Images without any `alt` attribute. `alt=""` is accepted as decorative.
pub fn check_images(document: &Html, landmarks: &Landmarks<'_>) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();

    for image in document.select(&IMAGE_SELECTOR) {
        outcome.examined += 1;
        if image.value().attr("alt").is_none() {
            outcome.push(
                element_issue(
                    element_locator(&image),
                    "Image",
                    "Image is missing an alt attribute",
                    Severity::Medium,
                    "Add alt text describing the image, or alt=\"\" if it is purely decorative.",
                    landmarks.section_of(&image),
                ),
                PENALTY_IMAGE_MISSING_ALT,
            );
        }
    }
    outcome
}

/// Heading order in a single sequential pass.
///
/// Flags every H1 after the first, and every heading whose level is more than
/// one below the heading immediately before it in document order. When the
/// document has no H1 at all, a synthetic finding is charged to the main
/// content section.
pub fn check_headings(document: &Html, landmarks: &Landmarks<'_>) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();
    let mut previous_level: u8 = 0;
    let mut h1_count = 0usize;

    for heading in document.select(&HEADING_SELECTOR) {
        let Some(level) = heading_level(&heading) else {
            continue;
        };
        outcome.examined += 1;
        let section = landmarks.section_of(&heading);
        let label = format!("H{level} Heading");

        if level == 1 {
            h1_count += 1;
            if h1_count > 1 {
                outcome.push(
                    element_issue(
                        element_locator(&heading),
                        label.clone(),
                        "Multiple H1 headings",
                        Severity::Medium,
                        "Use a single H1 for the main topic and demote the others to H2.",
                        section,
                    ),
                    PENALTY_MULTIPLE_H1,
                );
            }
        }

        if previous_level > 0 && level > previous_level + 1 {
            outcome.push(
                element_issue(
                    element_locator(&heading),
                    label,
                    format!("Heading level skipped from H{previous_level} to H{level}"),
                    Severity::Low,
                    format!(
                        "Use H{} after H{previous_level} to keep a sequential heading hierarchy.",
                        previous_level + 1
                    ),
                    section,
                ),
                PENALTY_SKIPPED_HEADING,
            );
        }
        previous_level = level;
    }

    if h1_count == 0 {
        outcome.push(
            element_issue(
                "body",
                "H1 Heading",
                "Page has no H1 heading",
                Severity::High,
                "Add one H1 heading that states the main topic of the page.",
                Section::Content,
            ),
            PENALTY_NO_H1,
        );
    }

    log::debug!(
        "Heading check: {} headings, {} H1, {} findings",
        outcome.examined,
        h1_count,
        outcome.findings.len()
    );
    outcome
}

/// Links with no text or with non-descriptive text such as "click here".
pub fn check_links(document: &Html, landmarks: &Landmarks<'_>) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();

    for link in document.select(&LINK_SELECTOR) {
        outcome.examined += 1;
        let text = element_text(&link);

        let issue = if text.is_empty() {
            "Link has no text".to_string()
        } else if NON_DESCRIPTIVE_LINK_TEXTS
            .iter()
            .any(|generic| text.eq_ignore_ascii_case(generic))
        {
            format!("Link text \"{text}\" is not descriptive")
        } else {
            continue;
        };

        outcome.push(
            element_issue(
                element_locator(&link),
                "Link",
                issue,
                Severity::Medium,
                "Use link text that describes the destination.",
                landmarks.section_of(&link),
            ),
            PENALTY_POOR_LINK_TEXT,
        );
    }
    outcome
}

/// Paragraphs longer than `PARAGRAPH_MAX_LENGTH` characters.
pub fn check_paragraphs(document: &Html, landmarks: &Landmarks<'_>) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();

    for paragraph in document.select(&PARAGRAPH_SELECTOR) {
        outcome.examined += 1;
        let length = char_len(&element_text(&paragraph));
        if length > PARAGRAPH_MAX_LENGTH {
            outcome.push(
                element_issue(
                    element_locator(&paragraph),
                    "Paragraph",
                    format!("Paragraph is very long ({length} characters)"),
                    Severity::Low,
                    "Split long paragraphs into shorter ones for readability.",
                    landmarks.section_of(&paragraph),
                ),
                PENALTY_LONG_PARAGRAPH,
            );
        }
    }
    outcome
}
