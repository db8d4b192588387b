//! Parallel probe-count sweep over every distribution and algorithm.
//!
//! Work is divided by distribution. Each pool thread repeatedly claims the
//! next unswept distribution from a shared atomic counter and sweeps every
//! configured algorithm and sequence length for it with its own
//! [`ProbeRng`]. Threads share nothing else, so no locks are taken.
//!
//! Verification failures are logged and collected, never fatal.

use crate::config::HarnessConfig;
use crate::distributions::Distribution;
use crate::error::Result;
use crate::rng::ProbeRng;
use crate::stats::{ProbeStats, SweepRow};
use probe_core::types::VerificationError;
use probe_core::verify::verify_outcome;
use probe_core::{SearchAlgorithm, SearchOutcome};
use rayon::ThreadPoolBuilder;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info, warn};

/// One outcome that disagreed with the linear oracle.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationFailure {
    /// Shape of the searched sequence
    pub distribution: Distribution,
    /// Algorithm that produced the outcome
    pub algorithm: SearchAlgorithm,
    /// Sequence length
    pub samples: usize,
    /// Searched key
    pub key: u64,
    /// Outcome returned by the algorithm
    pub outcome: SearchOutcome,
    /// Reason the outcome was rejected
    pub error: VerificationError,
}

/// Last sequence generated for a distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionSample {
    /// Shape of the sequence
    pub distribution: Distribution,
    /// The sequence itself
    pub values: Vec<u64>,
}

/// Result of [`run_sweep`].
#[derive(Debug, Clone, Default)]
pub struct SweepReport {
    /// Statistics ordered by distribution, then algorithm, then length
    pub rows: Vec<SweepRow>,
    /// Last generated sequence per distribution, in configuration order
    pub samples: Vec<DistributionSample>,
    /// Every rejected outcome
    pub failures: Vec<VerificationFailure>,
}

impl SweepReport {
    /// Rows for one (distribution, algorithm) pair, by increasing length.
    pub fn series(
        &self,
        distribution: Distribution,
        algorithm: SearchAlgorithm,
    ) -> impl Iterator<Item = &SweepRow> {
        self.rows
            .iter()
            .filter(move |row| row.distribution == distribution && row.algorithm == algorithm)
    }
}

/// Everything one worker produced for one distribution.
struct DistributionSweep {
    rows: Vec<SweepRow>,
    sample: DistributionSample,
    failures: Vec<VerificationFailure>,
}

/// Sweeps every configured distribution, algorithm and sequence length.
///
/// # Errors
///
/// Returns an error if `config` fails validation or the worker pool cannot
/// be built.
pub fn run_sweep(config: &HarnessConfig) -> Result<SweepReport> {
    config.validate()?;

    let workers = config
        .resolved_workers()
        .min(config.distributions.len())
        .max(1);
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|index| format!("probe-sweep-{index}"))
        .build()?;

    info!(
        workers,
        distributions = config.distributions.len(),
        algorithms = config.algorithms.len(),
        max_samples = config.max_samples,
        runs = config.runs_per_test,
        "starting sweep"
    );

    let next_unit = AtomicUsize::new(0);
    let per_worker: Vec<Vec<(usize, DistributionSweep)>> = pool.broadcast(|ctx| {
        let mut rng = ProbeRng::for_worker(config.seed, ctx.index());
        let mut claimed = Vec::new();
        loop {
            let unit = next_unit.fetch_add(1, Ordering::Relaxed);
            let Some(&distribution) = config.distributions.get(unit) else {
                break;
            };
            claimed.push((unit, sweep_distribution(config, distribution, &mut rng)));
        }
        claimed
    });

    let mut units: Vec<(usize, DistributionSweep)> = per_worker.into_iter().flatten().collect();
    units.sort_by_key(|(unit, _)| *unit);

    let mut report = SweepReport::default();
    for (_, sweep) in units {
        report.rows.extend(sweep.rows);
        report.samples.push(sweep.sample);
        report.failures.extend(sweep.failures);
    }

    info!(
        rows = report.rows.len(),
        failures = report.failures.len(),
        "sweep complete"
    );
    Ok(report)
}

fn sweep_distribution(
    config: &HarnessConfig,
    distribution: Distribution,
    rng: &mut ProbeRng,
) -> DistributionSweep {
    info!(%distribution, seed = rng.seed(), "sweeping distribution");

    let mut rows = Vec::with_capacity(config.algorithms.len() * config.sample_counts().count());
    let mut failures = Vec::new();
    let mut values = Vec::with_capacity(config.max_samples);

    for &algorithm in &config.algorithms {
        debug!(%distribution, %algorithm, "sweeping algorithm");

        for samples in config.sample_counts() {
            let mut stats = ProbeStats::new();

            for _ in 0..config.runs_per_test {
                let key = rng.gen_key(config.max_value);
                if distribution.is_random() || values.len() != samples {
                    distribution.fill(&mut values, samples, config.max_value, rng);
                }

                let outcome = algorithm.search(&values, key);
                if config.verify {
                    if let Err(error) = verify_outcome(&values, key, &outcome) {
                        warn!(
                            %distribution,
                            %algorithm,
                            samples,
                            key,
                            %outcome,
                            %error,
                            "verification failed"
                        );
                        failures.push(VerificationFailure {
                            distribution,
                            algorithm,
                            samples,
                            key,
                            outcome,
                            error,
                        });
                    }
                }
                stats.record(outcome.probes);
            }

            rows.push(stats.to_row(distribution, algorithm, samples));
        }
    }

    info!(%distribution, failures = failures.len(), "distribution complete");

    DistributionSweep {
        rows,
        sample: DistributionSample {
            distribution,
            values,
        },
        failures,
    }
}
