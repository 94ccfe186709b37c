//! Element analyzer.
//!
//! Attributes images, headings, links and paragraphs to page sections and
//! scores each section. Check order: title, meta description, images,
//! headings, links, paragraphs.

mod checks;
mod ledger;

use scraper::Html;

use crate::analysis::sections::Landmarks;
use crate::models::ElementAnalysisResult;

pub use checks::{
    check_headings, check_images, check_links, check_meta_description, check_paragraphs,
    check_title,
};
pub use ledger::{CheckOutcome, Finding, SectionLedger};

/// Analyzes the elements of an HTML document section by section.
///
/// Never fails: markup without any recognisable structure yields the synthetic
/// "no H1" finding plus missing title/description findings.
///
/// # Arguments
///
/// * `html` - Raw HTML markup
/// * `url` - URL reported back in the result (not fetched)
///
/// # Example
///
/// ```
/// use seo_audit::{analyze_elements, Section};
///
/// let html = r#"<html><body><footer><img src="logo.png"></footer></body></html>"#;
/// let result = analyze_elements(html, "https://example.com");
/// let footer = result.section(Section::Footer).unwrap();
/// assert_eq!(footer.issues.len(), 1);
/// assert_eq!(result.analyzed_elements, result.total_elements);
/// ```
pub fn analyze_elements(html: &str, url: &str) -> ElementAnalysisResult {
    let document = Html::parse_document(html);
    let landmarks = Landmarks::resolve(&document);

    let result = SectionLedger::new()
        .merge(check_title(&document))
        .merge(check_meta_description(&document))
        .merge(check_images(&document, &landmarks))
        .merge(check_headings(&document, &landmarks))
        .merge(check_links(&document, &landmarks))
        .merge(check_paragraphs(&document, &landmarks))
        .finish(url);

    log::debug!(
        "Element analysis of '{}': {} elements, {} issues",
        url,
        result.total_elements,
        result.element_issues.len()
    );
    result
}
