//! Document-level analysis records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter as EnumIterMacro;

/// How urgently an issue should be fixed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIterMacro,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document-level SEO or accessibility deficiency.
///
/// Ids are 1-based and sequential within a single analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: u32,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub how_to_fix: String,
}

/// Number of headings per level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    pub h4: usize,
    pub h5: usize,
    pub h6: usize,
}

impl HeadingCounts {
    /// Count for a heading level (1-6); other levels count as zero.
    pub fn get(&self, level: u8) -> usize {
        match level {
            1 => self.h1,
            2 => self.h2,
            3 => self.h3,
            4 => self.h4,
            5 => self.h5,
            6 => self.h6,
            _ => 0,
        }
    }

    pub(crate) fn increment(&mut self, level: u8) {
        match level {
            1 => self.h1 += 1,
            2 => self.h2 += 1,
            3 => self.h3 += 1,
            4 => self.h4 += 1,
            5 => self.h5 += 1,
            6 => self.h6 += 1,
            _ => {}
        }
    }

    pub fn total(&self) -> usize {
        self.h1 + self.h2 + self.h3 + self.h4 + self.h5 + self.h6
    }
}

/// Images partitioned by their `alt` attribute.
///
/// `with_alt + without_alt + with_empty_alt == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageCounts {
    pub total: usize,
    /// Non-empty `alt`
    pub with_alt: usize,
    /// No `alt` attribute at all
    pub without_alt: usize,
    /// `alt=""` (decorative)
    pub with_empty_alt: usize,
}

/// Links partitioned into internal and external targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkCounts {
    pub total: usize,
    pub internal: usize,
    pub external: usize,
    /// Links whose text is empty or whitespace
    pub empty_text: usize,
}

/// Metadata, structural counts and issues for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlAnalysisResult {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Open Graph properties keyed without the `og:` prefix
    pub open_graph: BTreeMap<String, String>,
    pub heading_counts: HeadingCounts,
    /// `"H<n>: <text>"` per heading, in document order
    pub heading_structure: Vec<String>,
    pub images: ImageCounts,
    pub links: LinkCounts,
    pub has_viewport: bool,
    pub has_structured_data: bool,
    pub issues: Vec<Issue>,
}

impl HtmlAnalysisResult {
    /// Number of issues with the given severity.
    pub fn count_severity(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}
