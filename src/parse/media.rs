//! Image and link inventory.
//!
//! Partitions images by their `alt` attribute and links by target (internal or
//! external relative to a reference URL).

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::models::{ImageCounts, LinkCounts};
use crate::utils::{element_text, parse_selector_unsafe};

pub(crate) static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("img", "IMAGE_SELECTOR"));

pub(crate) static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a[href]", "LINK_SELECTOR"));

/// Counts images with a non-empty `alt`, with `alt=""`, and without `alt`.
pub fn count_images(document: &Html) -> ImageCounts {
    let mut counts = ImageCounts::default();

    for element in document.select(&IMAGE_SELECTOR) {
        counts.total += 1;
        match element.value().attr("alt") {
            Some("") => counts.with_empty_alt += 1,
            Some(_) => counts.with_alt += 1,
            None => {}
        }
    }
    counts.without_alt = counts.total - counts.with_alt - counts.with_empty_alt;

    counts
}

/// Extracts the hostname of a reference URL.
///
/// Accepts URLs without a scheme (`example.com/page`). Returns `None` when no
/// non-empty host can be determined.
pub fn reference_host(reference_url: &str) -> Option<String> {
    let trimmed = reference_url.trim();
    if trimmed.is_empty() {
        return None;
    }
    let host_of = |candidate: &str| {
        url::Url::parse(candidate)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .filter(|host| !host.is_empty())
    };
    // "localhost:8080" parses with "localhost" as the scheme, so retry with one
    host_of(trimmed).or_else(|| host_of(&format!("https://{trimmed}")))
}

/// Classifies a link target as internal.
///
/// Internal when the href is a fragment or root-relative path, contains the
/// reference host, or is any other relative path (does not start with `http`).
pub fn is_internal_link(href: &str, host: Option<&str>) -> bool {
    if href.starts_with('#') || href.starts_with('/') {
        return true;
    }
    if let Some(host) = host {
        if href.contains(host) {
            return true;
        }
    }
    !href.starts_with("http")
}

/// Counts links by target and links without text.
pub fn count_links(document: &Html, reference_url: Option<&str>) -> LinkCounts {
    let host = reference_url.and_then(reference_host);
    let mut counts = LinkCounts::default();

    for element in document.select(&LINK_SELECTOR) {
        counts.total += 1;
        let href = element.value().attr("href").unwrap_or_default();
        if is_internal_link(href, host.as_deref()) {
            counts.internal += 1;
        } else {
            counts.external += 1;
        }
        if element_text(&element).is_empty() {
            counts.empty_text += 1;
        }
    }

    counts
}
