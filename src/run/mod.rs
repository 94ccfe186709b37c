//! Batch audit runner.
//!
//! Audits every configured input concurrently. Each document is analysed on
//! the blocking pool, at most `max_concurrency` at a time, and the outcomes
//! are returned in input order.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{info, warn};
use tokio::sync::Semaphore;

use crate::app::{load_input, validate_and_normalize_url};
use crate::config::Config;
use crate::error_handling::{AuditError, BatchStats, OutcomeType};
use crate::report::fallback::placeholder_report;
use crate::report::{audit_html, AuditReport, ExternalScores};

/// Result of auditing one input.
#[derive(Debug)]
pub struct InputOutcome {
    /// Input path as given (`-` for stdin)
    pub input: PathBuf,
    /// The report, or why there is none
    pub result: Result<AuditReport, AuditError>,
}

/// Results of a batch audit.
#[derive(Debug)]
pub struct BatchReport {
    /// One outcome per input, in input order
    pub outcomes: Vec<InputOutcome>,
    /// Outcome counters
    pub stats: Arc<BatchStats>,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl BatchReport {
    /// Inputs that ended without any report.
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    /// Reports in input order, skipping failed inputs.
    pub fn reports(&self) -> impl Iterator<Item = (&Path, &AuditReport)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|r| (o.input.as_path(), r)))
    }
}

fn audit_input(
    input: &Path,
    reference_url: Option<&str>,
    require_valid_html: bool,
) -> Result<AuditReport, AuditError> {
    let html = load_input(input, require_valid_html)?;
    Ok(audit_html(&html, reference_url, ExternalScores::default()))
}

fn substitute_placeholder(input: &Path, reference_url: Option<&str>) -> AuditReport {
    let label = reference_url
        .map(str::to_string)
        .unwrap_or_else(|| input.display().to_string());
    placeholder_report(&label, &mut rand::rng())
}

/// Audits every input in `config`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid. Per-input failures are
/// reported in `BatchReport::outcomes` instead.
///
/// # Example
///
/// ```no_run
/// use seo_audit::{run_audit, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     inputs: vec![PathBuf::from("index.html")],
///     ..Default::default()
/// };
/// let batch = run_audit(config).await?;
/// println!("{} failed", batch.failed());
/// # Ok(())
/// # }
/// ```
pub async fn run_audit(config: Config) -> Result<BatchReport> {
    config.validate().context("Invalid configuration")?;

    let reference_url: Option<Arc<str>> = config
        .reference_url
        .as_deref()
        .and_then(validate_and_normalize_url)
        .map(Arc::from);

    let start_time = Instant::now();
    let stats = Arc::new(BatchStats::new());
    let semaphore = Arc::new(Semaphore::new(config.max_concurrency));
    let mut tasks = FuturesUnordered::new();

    info!(
        "Auditing {} input{} (max concurrency {})",
        config.inputs.len(),
        if config.inputs.len() == 1 { "" } else { "s" },
        config.max_concurrency
    );

    for (index, input) in config.inputs.iter().enumerate() {
        let permit = Arc::clone(&semaphore)
            .acquire_owned()
            .await
            .context("Concurrency semaphore closed")?;

        let input = input.clone();
        let reference_url = reference_url.clone();
        let require_valid_html = config.require_valid_html;
        let handle = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            audit_input(&input, reference_url.as_deref(), require_valid_html)
        });

        tasks.push(async move { (index, handle.await) });
    }

    let mut slots: Vec<Option<Result<AuditReport, AuditError>>> =
        (0..config.inputs.len()).map(|_| None).collect();

    while let Some((index, joined)) = tasks.next().await {
        let input = &config.inputs[index];
        let result = joined.unwrap_or_else(|e| {
            Err(AuditError::Task {
                path: input.clone(),
                message: e.to_string(),
            })
        });

        let result = match result {
            Ok(report) => {
                stats.increment(OutcomeType::Audited);
                Ok(report)
            }
            Err(e) => {
                stats.increment(e.outcome());
                warn!("Failed to audit {}: {}", input.display(), e);
                if config.fallback_on_error {
                    stats.increment(OutcomeType::Placeholder);
                    Ok(substitute_placeholder(input, reference_url.as_deref()))
                } else {
                    Err(e)
                }
            }
        };
        slots[index] = Some(result);
    }

    let outcomes = config
        .inputs
        .iter()
        .zip(slots)
        .map(|(input, slot)| InputOutcome {
            input: input.clone(),
            result: slot.unwrap_or_else(|| {
                Err(AuditError::Task {
                    path: input.clone(),
                    message: "task produced no result".to_string(),
                })
            }),
        })
        .collect();

    Ok(BatchReport {
        outcomes,
        stats,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    })
}
