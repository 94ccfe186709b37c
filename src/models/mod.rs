//! Analysis result records.
//!
//! Everything here is produced fresh per analysis call and serialized with
//! camelCase field names for downstream consumers.

mod document;
mod element;

pub use document::{HeadingCounts, HtmlAnalysisResult, ImageCounts, Issue, LinkCounts, Severity};
pub use element::{ElementAnalysisResult, ElementIssue, Section, SectionAnalysis};
