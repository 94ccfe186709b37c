//! Structured data extraction.
//!
//! This module extracts social and machine-readable metadata:
//! - Open Graph meta tags (og:*)
//! - Presence of JSON-LD scripts or microdata attributes

use scraper::{Html, Selector};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::utils::parse_selector_unsafe;

const OPEN_GRAPH_PREFIX: &str = "og:";

static OPEN_GRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(r#"meta[property^="og:"]"#, "OPEN_GRAPH_SELECTOR"));

static JSON_LD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(r#"script[type="application/ld+json"]"#, "JSON_LD_SELECTOR")
});

static MICRODATA_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("[itemscope], [itemprop]", "MICRODATA_SELECTOR"));

/// Extracts Open Graph meta tags from HTML.
///
/// Every `<meta property="og:*">` carrying both `property` and `content`
/// contributes one entry, keyed by the property name without the `og:` prefix.
/// Later duplicates overwrite earlier ones.
pub fn extract_open_graph(document: &Html) -> BTreeMap<String, String> {
    let mut og_tags = BTreeMap::new();

    for element in document.select(&OPEN_GRAPH_SELECTOR) {
        if let (Some(property), Some(content)) = (
            element.value().attr("property"),
            element.value().attr("content"),
        ) {
            let key = property.strip_prefix(OPEN_GRAPH_PREFIX).unwrap_or(property);
            og_tags.insert(key.to_string(), content.to_string());
        }
    }

    og_tags
}

/// Checks for JSON-LD scripts or microdata (`itemscope`/`itemprop`) markup.
pub fn has_structured_data(document: &Html) -> bool {
    document.select(&JSON_LD_SELECTOR).next().is_some()
        || document.select(&MICRODATA_SELECTOR).next().is_some()
}
