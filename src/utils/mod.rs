//! Utility functions shared by the parsers and analyzers.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - Element locators for issue reporting
//! - Character-based text helpers

mod selector;
mod text;

pub use selector::{element_locator, parse_selector_unsafe, parse_selector_with_fallback};
pub use text::{char_len, element_text, truncate_chars};
