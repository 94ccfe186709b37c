//! Configuration constants.
//!
//! This module defines every threshold, penalty and weight used by the analyzers
//! and by the report scoring, plus operational defaults for the CLI.

// Batch runner defaults
/// Default number of documents analysed concurrently
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;
/// Upper bound accepted by `Config::validate`
pub const MAX_CONCURRENCY_LIMIT: usize = 64;

// Document analyzer thresholds (character counts)
pub const DOC_TITLE_MIN_LENGTH: usize = 10;
pub const DOC_TITLE_MAX_LENGTH: usize = 60;
pub const DOC_DESCRIPTION_MIN_LENGTH: usize = 50;
pub const DOC_DESCRIPTION_MAX_LENGTH: usize = 160;

// Element analyzer thresholds (character counts)
pub const ELEMENT_TITLE_MIN_LENGTH: usize = 20;
pub const ELEMENT_TITLE_MAX_LENGTH: usize = 60;
pub const ELEMENT_DESCRIPTION_MIN_LENGTH: usize = 70;
pub const ELEMENT_DESCRIPTION_MAX_LENGTH: usize = 160;
/// Paragraphs longer than this are flagged as hard to read
pub const PARAGRAPH_MAX_LENGTH: usize = 300;

// Element analyzer score penalties
pub const PENALTY_TITLE_MISSING: i32 = 25;
pub const PENALTY_TITLE_SHORT: i32 = 15;
pub const PENALTY_TITLE_LONG: i32 = 10;
pub const PENALTY_DESCRIPTION_MISSING: i32 = 25;
pub const PENALTY_DESCRIPTION_SHORT: i32 = 15;
pub const PENALTY_DESCRIPTION_LONG: i32 = 10;
pub const PENALTY_IMAGE_MISSING_ALT: i32 = 10;
pub const PENALTY_MULTIPLE_H1: i32 = 15;
pub const PENALTY_SKIPPED_HEADING: i32 = 5;
pub const PENALTY_NO_H1: i32 = 20;
pub const PENALTY_POOR_LINK_TEXT: i32 = 10;
pub const PENALTY_LONG_PARAGRAPH: i32 = 5;

/// Link texts that say nothing about the target (compared case-insensitively)
pub const NON_DESCRIPTIVE_LINK_TEXTS: &[&str] = &["click here", "read more"];

// Section scoring
pub const SECTION_BASE_SCORE: i32 = 100;
pub const SCORE_MIN: i32 = 0;
pub const SCORE_MAX: i32 = 100;

// SEO score weights (per issue severity)
pub const SEO_WEIGHT_HIGH: i32 = 10;
pub const SEO_WEIGHT_MEDIUM: i32 = 5;
pub const SEO_WEIGHT_LOW: i32 = 2;

// Accessibility score weights (per issue severity)
pub const ACCESSIBILITY_WEIGHT_HIGH: i32 = 15;
pub const ACCESSIBILITY_WEIGHT_MEDIUM: i32 = 8;
pub const ACCESSIBILITY_WEIGHT_LOW: i32 = 3;
/// Accessibility score reported when no accessibility-related issue was found
pub const ACCESSIBILITY_NO_ISSUES_SCORE: u8 = 90;

/// Issue-title fragments (lowercase) that mark an issue as accessibility-related
pub const ACCESSIBILITY_KEYWORDS: &[&str] = &[
    "alt",
    "aria",
    "accessib",
    "contrast",
    "label",
    "heading",
    "link",
    "viewport",
];

/// Substrings a raw upload must contain to be accepted as an HTML document
pub const REQUIRED_HTML_MARKERS: &[&str] = &["<html", "<head", "<body", "</html>"];

// AI suggestions
pub const DEFAULT_SUGGESTION_MODEL: &str = "gemini-1.5-flash";
/// Maximum number of issues quoted in a suggestion prompt
pub const SUGGESTION_PROMPT_MAX_ISSUES: usize = 20;
/// Maximum number of suggestions kept from a model response
pub const SUGGESTION_MAX_COUNT: usize = 10;
