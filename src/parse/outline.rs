//! Heading outline extraction.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::models::HeadingCounts;
use crate::utils::{element_text, parse_selector_unsafe};

pub(crate) static HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("h1, h2, h3, h4, h5, h6", "HEADING_SELECTOR"));

/// Heading level (1-6) of an `h1`..`h6` element.
pub fn heading_level(element: &ElementRef<'_>) -> Option<u8> {
    element
        .value()
        .name()
        .strip_prefix('h')
        .and_then(|s| s.parse::<u8>().ok())
        .filter(|level| (1..=6).contains(level))
}

/// Heading counts per level plus the textual outline.
///
/// The outline holds one `"H<n>: <text>"` entry per heading in document order,
/// with `Empty heading` standing in for headings without text.
pub fn extract_headings(document: &Html) -> (HeadingCounts, Vec<String>) {
    let mut counts = HeadingCounts::default();
    let mut outline = Vec::new();

    for element in document.select(&HEADING_SELECTOR) {
        let Some(level) = heading_level(&element) else {
            continue;
        };
        counts.increment(level);

        let text = element_text(&element);
        let text = if text.is_empty() {
            "Empty heading"
        } else {
            text.as_str()
        };
        outline.push(format!("H{level}: {text}"));
    }

    (counts, outline)
}
