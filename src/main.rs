//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All analysis is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use seo_audit::app::{print_outcome_statistics, print_summary, render_json, render_text};
use seo_audit::initialization::init_logger_with;
use seo_audit::{run_audit, Config, Opt, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let output = config.output;
    let total_inputs = config.inputs.len();

    let batch = match run_audit(config).await {
        Ok(batch) => batch,
        Err(e) => {
            eprintln!("seo_audit error: {:#}", e);
            process::exit(1);
        }
    };

    match output {
        OutputFormat::Json => {
            let reports: Vec<_> = batch.reports().map(|(_, report)| report).collect();
            let json = render_json(&reports).context("Failed to serialize reports")?;
            println!("{json}");
        }
        OutputFormat::Text => {
            for (input, report) in batch.reports() {
                println!("{}", render_text(&input.display().to_string(), report));
            }
        }
    }

    for outcome in &batch.outcomes {
        if let Err(e) = &outcome.result {
            eprintln!("seo_audit: {}", e);
        }
    }

    print_outcome_statistics(&batch.stats);
    print_summary(total_inputs, &batch.stats, batch.elapsed_seconds);

    if batch.failed() > 0 {
        process::exit(1);
    }
    Ok(())
}
