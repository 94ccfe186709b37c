//! CSS selector parsing and element locator utilities.

use scraper::{ElementRef, Selector};

/// Parses a CSS selector with a safe fallback.
///
/// If parsing fails, logs an error and returns a selector that matches nothing
/// (`*:not(*)`), so callers never panic on a dynamic selector.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error logging (e.g., "landmark lookup")
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' in {}: {}. Using fallback selector.",
            selector_str,
            context,
            e
        );
        parse_selector_unsafe("*:not(*)", "fallback selector")
    })
}

/// Parses a CSS selector that must succeed (for compile-time constants).
///
/// # Panics
///
/// Panics if the selector cannot be parsed (indicates a programming error).
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

/// Builds a CSS-like locator for an element, for display in element issues.
///
/// Preference order: `tag#id`, `tag.class1.class2`, `img[src="..."]`,
/// `a[href="..."]`, and finally `tag:nth-of-type(n)` computed among the
/// element's siblings.
pub fn element_locator(element: &ElementRef<'_>) -> String {
    let value = element.value();
    let tag = value.name();

    if let Some(id) = value.id().filter(|id| !id.trim().is_empty()) {
        return format!("{tag}#{id}");
    }

    let classes: Vec<&str> = value.classes().collect();
    if !classes.is_empty() {
        return format!("{}.{}", tag, classes.join("."));
    }

    let identifying_attr = match tag {
        "img" => Some("src"),
        "a" => Some("href"),
        _ => None,
    };
    if let Some(attr) = identifying_attr {
        if let Some(v) = value.attr(attr).filter(|v| !v.is_empty()) {
            return format!("{tag}[{attr}=\"{}\"]", v.replace('"', "\\\""));
        }
    }

    let position = element
        .prev_siblings()
        .filter_map(ElementRef::wrap)
        .filter(|sibling| sibling.value().name() == tag)
        .count()
        + 1;
    format!("{tag}:nth-of-type({position})")
}
