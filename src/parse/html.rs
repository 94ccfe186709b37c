//! Basic HTML extraction utilities.
//!
//! This module provides functions to extract basic document metadata:
//! - Page title
//! - Meta description
//! - Meta keywords
//! - Viewport meta tag presence

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::utils::{element_text, parse_selector_unsafe};

// CSS selector strings
pub(crate) const TITLE_SELECTOR_STR: &str = "title";
pub(crate) const META_DESCRIPTION_SELECTOR_STR: &str = r#"meta[name="description"]"#;
const META_KEYWORDS_SELECTOR_STR: &str = r#"meta[name="keywords"]"#;
const META_VIEWPORT_SELECTOR_STR: &str = r#"meta[name="viewport"]"#;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));

static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(META_DESCRIPTION_SELECTOR_STR, "META_DESCRIPTION_SELECTOR")
});

static META_KEYWORDS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(META_KEYWORDS_SELECTOR_STR, "META_KEYWORDS_SELECTOR"));

static META_VIEWPORT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(META_VIEWPORT_SELECTOR_STR, "META_VIEWPORT_SELECTOR"));

/// Extracts the page title from an HTML document.
///
/// Returns the trimmed text content of the first `<title>` element, or an
/// empty string if there is none.
pub fn extract_title(document: &Html) -> String {
    match document.select(&TITLE_SELECTOR).next() {
        Some(element) => {
            let title = element_text(&element);
            log::debug!("Extracted title '{}' (length: {})", title, title.len());
            title
        }
        None => {
            log::debug!("No title element found in document");
            String::new()
        }
    }
}

/// Extracts the meta description from an HTML document.
///
/// Returns the trimmed `content` of `<meta name="description">`, or an empty
/// string if the tag or its `content` attribute is missing.
pub fn extract_meta_description(document: &Html) -> String {
    document
        .select(&META_DESCRIPTION_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default()
}

/// Extracts meta keywords from an HTML document.
///
/// Splits the `content` of `<meta name="keywords">` on commas, trimming each
/// keyword and discarding empty ones. Case is preserved.
pub fn extract_meta_keywords(document: &Html) -> Vec<String> {
    document
        .select(&META_KEYWORDS_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| {
            content
                .split(',')
                .map(|keyword| keyword.trim())
                .filter(|keyword| !keyword.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Checks whether the document declares a viewport meta tag.
pub fn has_viewport(document: &Html) -> bool {
    document.select(&META_VIEWPORT_SELECTOR).next().is_some()
}

/// Checks whether raw text plausibly is a complete HTML document.
///
/// True iff the text contains `<html`, `<head`, `<body` and `</html>`, in any
/// order. Case-sensitive; used to gate uploaded files before analysis.
pub fn is_valid_html(text: &str) -> bool {
    crate::config::REQUIRED_HTML_MARKERS
        .iter()
        .all(|marker| text.contains(marker))
}
