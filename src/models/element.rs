//! Element-level analysis records.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;

use super::document::Severity;
use crate::config::{SCORE_MAX, SCORE_MIN, SECTION_BASE_SCORE};

/// A coarse zone of the page used for attribution and scoring.
///
/// Variant order is the order landmarks are tested for containment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIterMacro,
)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Header,
    Navigation,
    Content,
    Sidebar,
    Footer,
    General,
}

/// Canonical key, display label and importance weight for every section.
static SECTION_TABLE: [(Section, &str, &str, u8); 6] = [
    (Section::Header, "header", "Header", 9),
    (Section::Navigation, "navigation", "Navigation", 7),
    (Section::Content, "content", "Main Content", 10),
    (Section::Sidebar, "sidebar", "Sidebar", 5),
    (Section::Footer, "footer", "Footer", 6),
    (Section::General, "general", "General", 4),
];

impl Section {
    fn entry(&self) -> &'static (Section, &'static str, &'static str, u8) {
        // Table rows follow variant declaration order
        &SECTION_TABLE[*self as usize]
    }

    /// Lowercase key used in `ElementIssue::section`.
    pub fn key(&self) -> &'static str {
        self.entry().1
    }

    /// Display name used in `SectionAnalysis::name`.
    pub fn label(&self) -> &'static str {
        self.entry().2
    }

    /// Fixed importance weight (1-10).
    pub fn importance(&self) -> u8 {
        self.entry().3
    }

    /// Sections that correspond to a page landmark (everything but `General`).
    pub fn landmarks() -> impl Iterator<Item = Section> {
        Section::iter().filter(|s| *s != Section::General)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A violation attributed to a specific element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementIssue {
    /// CSS-like locator
    pub selector: String,
    /// Human label such as "Image" or "H1 Heading"
    pub element: String,
    pub issue: String,
    pub severity: Severity,
    pub recommendation: String,
    pub section: Section,
}

/// Score and issues for one page section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionAnalysis {
    pub name: String,
    pub section: Section,
    /// In `[0, 100]` once the analysis has finished
    pub score: i32,
    pub issues: Vec<ElementIssue>,
    pub importance: u8,
}

impl SectionAnalysis {
    /// Fresh record at the base score.
    pub fn new(section: Section) -> Self {
        Self {
            name: section.label().to_string(),
            section,
            score: SECTION_BASE_SCORE,
            issues: Vec::new(),
            importance: section.importance(),
        }
    }

    pub(crate) fn clamp_score(&mut self) {
        self.score = self.score.clamp(SCORE_MIN, SCORE_MAX);
    }
}

/// Section-level detail for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementAnalysisResult {
    pub url: String,
    pub total_elements: usize,
    pub analyzed_elements: usize,
    pub element_issues: Vec<ElementIssue>,
    /// One record per section, in `Section` declaration order
    pub section_analysis: Vec<SectionAnalysis>,
}

impl ElementAnalysisResult {
    /// Record for a section.
    pub fn section(&self, section: Section) -> Option<&SectionAnalysis> {
        self.section_analysis.iter().find(|s| s.section == section)
    }
}
