//! Batch statistics tracking.
//!
//! This module provides thread-safe counters for the outcome of every input in
//! a batch audit.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::OutcomeType;

/// Thread-safe batch statistics tracker.
///
/// Tracks outcomes using atomic counters, allowing concurrent access from
/// multiple tasks. All outcome types are initialized to zero on creation.
#[derive(Debug)]
pub struct BatchStats {
    outcomes: HashMap<OutcomeType, AtomicUsize>,
}

impl Default for BatchStats {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchStats {
    pub fn new() -> Self {
        let mut outcomes = HashMap::new();
        for outcome in OutcomeType::iter() {
            outcomes.insert(outcome, AtomicUsize::new(0));
        }
        BatchStats { outcomes }
    }

    /// Increment an outcome counter.
    pub fn increment(&self, outcome: OutcomeType) {
        if let Some(counter) = self.outcomes.get(&outcome) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment counter for {:?} which is not in the map. \
                 This indicates a bug in BatchStats initialization.",
                outcome
            );
        }
    }

    /// Get the count for an outcome type.
    pub fn get_count(&self, outcome: OutcomeType) -> usize {
        self.outcomes
            .get(&outcome)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total number of failed inputs.
    pub fn total_failures(&self) -> usize {
        OutcomeType::iter()
            .filter(OutcomeType::is_failure)
            .map(|o| self.get_count(o))
            .sum()
    }
}
