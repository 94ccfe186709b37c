//! Batch statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{BatchStats, OutcomeType};

/// Logs the count of every outcome that occurred at least once.
pub fn print_outcome_statistics(stats: &BatchStats) {
    let total_failures = stats.total_failures();
    if total_failures > 0 {
        info!("Failure Counts ({} total):", total_failures);
    }
    for outcome in OutcomeType::iter() {
        let count = stats.get_count(outcome);
        if count > 0 {
            info!("   {}: {}", outcome.as_str(), count);
        }
    }
}

/// Logs a one-line summary of the batch.
pub fn print_summary(total_inputs: usize, stats: &BatchStats, elapsed_seconds: f64) {
    info!(
        "Audited {} input{} ({} succeeded, {} failed, {} placeholder) in {:.2}s",
        total_inputs,
        if total_inputs == 1 { "" } else { "s" },
        stats.get_count(OutcomeType::Audited),
        stats.total_failures(),
        stats.get_count(OutcomeType::Placeholder),
        elapsed_seconds
    );
}
