//! HTML parsing and data extraction.
//!
//! This module extracts structured data from HTML content including:
//! - Title, meta description, keywords and viewport
//! - Open Graph tags and structured data presence
//! - Heading counts and outline
//! - Image and link inventories
//!
//! All parsing is done using CSS selectors via the `scraper` crate. Extraction
//! never fails: missing elements yield empty values.

mod html;
mod media;
mod outline;
mod structured;

// Re-export public API
pub use html::{
    extract_meta_description, extract_meta_keywords, extract_title, has_viewport, is_valid_html,
};
pub(crate) use html::{META_DESCRIPTION_SELECTOR_STR, TITLE_SELECTOR_STR};
pub use media::{count_images, count_links, is_internal_link, reference_host};
pub(crate) use media::{IMAGE_SELECTOR, LINK_SELECTOR};
pub(crate) use outline::HEADING_SELECTOR;
pub use outline::{extract_headings, heading_level};
pub use structured::{extract_open_graph, has_structured_data};
