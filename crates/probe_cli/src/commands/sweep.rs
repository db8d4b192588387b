//! Sweep command implementation
//!
//! Runs the parallel probe-count sweep and writes the CSV reports.

use anyhow::{bail, Result};
use probe_harness::report::write_report;
use probe_harness::{run_sweep, HarnessConfig};
use std::time::Instant;
use tracing::{info, warn};

/// Run the sweep command
pub fn run(config: &HarnessConfig, strict: bool) -> Result<()> {
    info!("Running sweep...");
    info!("  Max samples: {}", config.max_samples);
    info!("  Runs per test: {}", config.runs_per_test);
    info!("  Workers: {}", config.resolved_workers());
    info!("  Output directory: {}", config.output_dir.display());

    let start = Instant::now();
    let report = run_sweep(config)?;
    let (results, samples) = write_report(config, &report)?;

    info!(
        "Sweep complete in {:.2}s: {} rows",
        start.elapsed().as_secs_f64(),
        report.rows.len()
    );
    info!("  Results: {}", results.display());
    info!("  Samples: {}", samples.display());

    if !report.failures.is_empty() {
        warn!("{} outcomes failed verification", report.failures.len());
        if strict {
            bail!(
                "{} outcomes failed verification (first: {} on {} with key {}: {})",
                report.failures.len(),
                report.failures[0].algorithm,
                report.failures[0].distribution,
                report.failures[0].key,
                report.failures[0].error
            );
        }
    }

    Ok(())
}
