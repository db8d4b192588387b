//! Perf command implementation
//!
//! Times every algorithm and prints a per-algorithm summary.

use anyhow::Result;
use probe_harness::perf::PerfReport;
use probe_harness::{run_perf, HarnessConfig};
use tracing::info;

use crate::OutputFormat;

/// Run the perf command
pub fn run(config: &HarnessConfig, format: OutputFormat, detail: bool) -> Result<()> {
    info!("Running perf...");
    info!("  Searches: {}", config.perf_searches);
    info!("  Samples: {}", config.max_samples);

    let report = run_perf(config)?;

    match format {
        OutputFormat::Table => {
            if detail {
                println!("{}", render_detail(&report));
            }
            println!("{}", render_table(&report));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn render_table(report: &PerfReport) -> String {
    let mut out = format!(
        "{:<16} {:>12} {:>14} {:>12}\n",
        "Algorithm", "Seconds", "Probes", "ns/probe"
    );
    for summary in &report.summaries {
        out.push_str(&format!(
            "{:<16} {:>12.6} {:>14} {:>12.3}\n",
            summary.algorithm.name(),
            summary.seconds,
            summary.probes,
            summary.nanos_per_probe
        ));
    }
    out
}

fn render_detail(report: &PerfReport) -> String {
    let mut out = format!(
        "{:<16} {:<16} {:>12} {:>14}\n",
        "Algorithm", "Distribution", "Seconds", "Probes"
    );
    for row in &report.rows {
        out.push_str(&format!(
            "{:<16} {:<16} {:>12.6} {:>14}\n",
            row.algorithm.name(),
            row.distribution.name(),
            row.seconds,
            row.probes
        ));
    }
    out
}
