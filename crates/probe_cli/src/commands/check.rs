//! Check command implementation
//!
//! Runs every algorithm over fixed edge-case scenarios and a quick sweep,
//! cross-checking each outcome against the linear oracle.

use anyhow::{bail, Result};
use probe_core::verify::verify_outcome;
use probe_core::SearchAlgorithm;
use probe_harness::{run_sweep, HarnessConfig};
use tracing::{error, info};

/// A named (sequence, keys) pair.
struct Scenario {
    name: &'static str,
    values: Vec<u64>,
    keys: Vec<u64>,
}

fn scenarios() -> Vec<Scenario> {
    let mut outlier: Vec<u64> = (0..100).map(|i| i * 2000 / 99).collect();
    outlier[99] = 200_000;

    vec![
        Scenario {
            name: "single element",
            values: vec![5],
            keys: vec![3, 5, 7],
        },
        Scenario {
            name: "even steps",
            values: vec![0, 10, 20, 30, 40, 50],
            keys: vec![0, 25, 30, 50, 51],
        },
        Scenario {
            name: "duplicates",
            values: vec![1, 1, 1, 4, 4, 9, 9, 9, 9],
            keys: vec![0, 1, 2, 4, 5, 9, 10],
        },
        Scenario {
            name: "flat",
            values: vec![7; 32],
            keys: vec![6, 7, 8],
        },
        Scenario {
            name: "linear outlier",
            keys: vec![0, 500, outlier[97] - 1, outlier[98], 150_000, 200_000, 300_000],
            values: outlier,
        },
        Scenario {
            name: "cliff",
            values: [0, 10, 20].into_iter().chain(std::iter::repeat(200).take(18)).collect(),
            keys: vec![5, 150, 200],
        },
    ]
}

/// Run the check command
pub fn run() -> Result<()> {
    info!("Checking search algorithms...");

    let mut failures = 0;
    for scenario in scenarios() {
        let before = failures;
        for algorithm in SearchAlgorithm::ALL {
            for &key in &scenario.keys {
                let outcome = algorithm.search(&scenario.values, key);
                if let Err(err) = verify_outcome(&scenario.values, key, &outcome) {
                    error!("  {} / {} / key {}: {}", scenario.name, algorithm, key, err);
                    failures += 1;
                }
            }
        }
        if failures == before {
            info!("  {}: ok", scenario.name);
        }
    }

    let config = HarnessConfig::quick();
    let report = run_sweep(&config)?;
    info!(
        "  Quick sweep: {} rows, {} failures",
        report.rows.len(),
        report.failures.len()
    );
    failures += report.failures.len();

    if failures > 0 {
        bail!("{} outcomes failed verification", failures);
    }

    info!("All checks passed");
    Ok(())
}
