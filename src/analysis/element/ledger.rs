//! Accumulation of element findings into section scores.

use strum::IntoEnumIterator;

use crate::models::{ElementAnalysisResult, ElementIssue, Section, SectionAnalysis};

/// An element issue plus the score penalty it costs its section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub issue: ElementIssue,
    pub penalty: i32,
}

/// Result of one category check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Elements inspected by the check
    pub examined: usize,
    /// Violations, in the order they were detected
    pub findings: Vec<Finding>,
}

impl CheckOutcome {
    pub fn push(&mut self, issue: ElementIssue, penalty: i32) {
        self.findings.push(Finding { issue, penalty });
    }
}

/// Running totals for one element analysis.
///
/// Starts with one record per section at the base score; every merged finding
/// is appended to the flat list and to its section, and its penalty is
/// subtracted from that section's score. Scores are clamped by `finish`.
#[derive(Debug)]
pub struct SectionLedger {
    total_elements: usize,
    analyzed_elements: usize,
    element_issues: Vec<ElementIssue>,
    sections: Vec<SectionAnalysis>,
}

impl Default for SectionLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionLedger {
    pub fn new() -> Self {
        Self {
            total_elements: 0,
            analyzed_elements: 0,
            element_issues: Vec::new(),
            sections: Section::iter().map(SectionAnalysis::new).collect(),
        }
    }

    pub fn merge(mut self, outcome: CheckOutcome) -> Self {
        // Every discovered element is analysed
        self.total_elements += outcome.examined;
        self.analyzed_elements += outcome.examined;

        for Finding { issue, penalty } in outcome.findings {
            if let Some(record) = self.sections.iter_mut().find(|s| s.section == issue.section) {
                record.score -= penalty;
                record.issues.push(issue.clone());
            }
            self.element_issues.push(issue);
        }
        self
    }

    pub fn finish(mut self, url: &str) -> ElementAnalysisResult {
        for record in &mut self.sections {
            record.clamp_score();
        }
        ElementAnalysisResult {
            url: url.to_string(),
            total_elements: self.total_elements,
            analyzed_elements: self.analyzed_elements,
            element_issues: self.element_issues,
            section_analysis: self.sections,
        }
    }
}
