//! Wall-clock timing of each algorithm over a fixed key set.
//!
//! Runs on the calling thread so timings are not perturbed by sweep workers.

use crate::config::HarnessConfig;
use crate::distributions::Distribution;
use crate::error::Result;
use crate::rng::ProbeRng;
use probe_core::SearchAlgorithm;
use serde::Serialize;
use std::hint::black_box;
use std::time::Instant;
use tracing::{debug, info};

/// Timing of one algorithm over one distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerfRow {
    /// Algorithm under test
    pub algorithm: SearchAlgorithm,
    /// Shape of the searched sequence
    pub distribution: Distribution,
    /// Elapsed seconds for the whole key set
    pub seconds: f64,
    /// Probes summed over the whole key set
    pub probes: usize,
}

/// Timing of one algorithm summed over every distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerfSummary {
    /// Algorithm under test
    pub algorithm: SearchAlgorithm,
    /// Elapsed seconds over all distributions
    pub seconds: f64,
    /// Probes over all distributions
    pub probes: usize,
    /// Average cost of one probe in nanoseconds, 0 when no probes were made
    pub nanos_per_probe: f64,
}

/// Result of [`run_perf`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct PerfReport {
    /// Per (algorithm, distribution) timings, algorithm-major
    pub rows: Vec<PerfRow>,
    /// Per algorithm totals, in configuration order
    pub summaries: Vec<PerfSummary>,
}

impl PerfReport {
    /// Summary for `algorithm`, if it was timed.
    pub fn summary(&self, algorithm: SearchAlgorithm) -> Option<&PerfSummary> {
        self.summaries.iter().find(|s| s.algorithm == algorithm)
    }
}

/// Times `perf_searches` random keys against every algorithm and distribution.
///
/// Every algorithm sees the same keys and the same `max_samples`-long
/// sequences. Each distribution is generated once, from its own stream.
///
/// # Errors
///
/// Returns an error if `config` fails validation.
pub fn run_perf(config: &HarnessConfig) -> Result<PerfReport> {
    config.validate()?;

    let keys = ProbeRng::from_seed(config.seed).keys(config.perf_searches, config.max_value);
    let datasets: Vec<(Distribution, Vec<u64>)> = config
        .distributions
        .iter()
        .enumerate()
        .map(|(index, &distribution)| {
            let mut rng = ProbeRng::for_worker(config.seed, index);
            let values = distribution.generate(config.max_samples, config.max_value, &mut rng);
            (distribution, values)
        })
        .collect();
    let mut report = PerfReport::default();

    info!(
        searches = keys.len(),
        samples = config.max_samples,
        "starting perf run"
    );

    for &algorithm in &config.algorithms {
        let mut seconds = 0.0;
        let mut probes = 0;

        for (distribution, values) in &datasets {
            let distribution = *distribution;
            let start = Instant::now();
            let mut row_probes = 0;
            for &key in &keys {
                row_probes += black_box(algorithm.search(black_box(values), key)).probes;
            }
            let row_seconds = start.elapsed().as_secs_f64();

            debug!(%algorithm, %distribution, seconds = row_seconds, probes = row_probes, "timed");
            seconds += row_seconds;
            probes += row_probes;
            report.rows.push(PerfRow {
                algorithm,
                distribution,
                seconds: row_seconds,
                probes: row_probes,
            });
        }

        let nanos_per_probe = if probes > 0 {
            seconds * 1e9 / probes as f64
        } else {
            0.0
        };
        info!(%algorithm, seconds, probes, nanos_per_probe, "algorithm timed");
        report.summaries.push(PerfSummary {
            algorithm,
            seconds,
            probes,
            nanos_per_probe,
        });
    }

    Ok(report)
}
