//! Probe count statistics.

use crate::distributions::Distribution;
use probe_core::SearchAlgorithm;
use serde::Serialize;

/// Running min / max / mean of probe counts over repeated trials.
///
/// # Examples
///
/// ```rust
/// use probe_harness::ProbeStats;
///
/// let mut stats = ProbeStats::new();
/// for probes in [4, 2, 6] {
///     stats.record(probes);
/// }
///
/// assert_eq!(stats.min(), 2);
/// assert_eq!(stats.max(), 6);
/// assert_eq!(stats.single(), 6);
/// assert!((stats.avg() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProbeStats {
    count: usize,
    min: usize,
    max: usize,
    avg: f64,
    single: usize,
}

impl ProbeStats {
    /// Empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the probe count of one trial.
    pub fn record(&mut self, probes: usize) {
        if self.count == 0 {
            self.min = probes;
            self.max = probes;
        } else {
            self.min = self.min.min(probes);
            self.max = self.max.max(probes);
        }
        self.count += 1;
        // Incremental mean: avg moves 1/n of the way toward the new sample.
        self.avg += (probes as f64 - self.avg) / self.count as f64;
        self.single = probes;
    }

    /// Trials recorded so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Fewest probes seen, 0 when empty.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Most probes seen, 0 when empty.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Mean probes, 0 when empty.
    pub fn avg(&self) -> f64 {
        self.avg
    }

    /// Probes of the most recent trial.
    pub fn single(&self) -> usize {
        self.single
    }

    /// Freezes the statistics into a report row.
    pub fn to_row(
        &self,
        distribution: Distribution,
        algorithm: SearchAlgorithm,
        samples: usize,
    ) -> SweepRow {
        SweepRow {
            distribution,
            algorithm,
            samples,
            min: self.min,
            max: self.max,
            avg: self.avg,
            single: self.single,
        }
    }
}

/// Aggregate probe statistics for one (distribution, algorithm, length) triple.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    /// Shape of the searched sequences
    pub distribution: Distribution,
    /// Algorithm under test
    pub algorithm: SearchAlgorithm,
    /// Sequence length
    pub samples: usize,
    /// Fewest probes over all trials
    pub min: usize,
    /// Most probes over all trials
    pub max: usize,
    /// Mean probes over all trials
    pub avg: f64,
    /// Probes of the last trial
    pub single: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_empty_stats() {
        let stats = ProbeStats::new();
        assert_eq!(stats.count(), 0);
        assert_eq!(stats.min(), 0);
        assert_eq!(stats.max(), 0);
        assert_eq!(stats.avg(), 0.0);
    }

    #[test]
    fn test_single_record() {
        let mut stats = ProbeStats::new();
        stats.record(7);
        assert_eq!(stats.min(), 7);
        assert_eq!(stats.max(), 7);
        assert_eq!(stats.single(), 7);
        assert_relative_eq!(stats.avg(), 7.0);
    }

    #[test]
    fn test_zero_probes_lower_min() {
        let mut stats = ProbeStats::new();
        stats.record(3);
        stats.record(0);
        assert_eq!(stats.min(), 0);
        assert_eq!(stats.single(), 0);
        assert_relative_eq!(stats.avg(), 1.5);
    }

    #[test]
    fn test_to_row() {
        let mut stats = ProbeStats::new();
        stats.record(1);
        stats.record(2);

        let row = stats.to_row(Distribution::Cubic, SearchAlgorithm::Hybrid, 40);
        assert_eq!(row.distribution, Distribution::Cubic);
        assert_eq!(row.algorithm, SearchAlgorithm::Hybrid);
        assert_eq!(row.samples, 40);
        assert_eq!((row.min, row.max, row.single), (1, 2, 2));
        assert_relative_eq!(row.avg, 1.5);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property test: the running mean matches the batch mean.
        #[test]
        fn prop_matches_batch(samples in proptest::collection::vec(0..10_000usize, 1..300)) {
            let mut stats = ProbeStats::new();
            for &probes in &samples {
                stats.record(probes);
            }

            let mean = samples.iter().sum::<usize>() as f64 / samples.len() as f64;
            prop_assert_eq!(stats.count(), samples.len());
            prop_assert_eq!(stats.min(), *samples.iter().min().unwrap());
            prop_assert_eq!(stats.max(), *samples.iter().max().unwrap());
            prop_assert_eq!(stats.single(), *samples.last().unwrap());
            prop_assert!((stats.avg() - mean).abs() <= 1e-9 * mean.max(1.0));
        }
    }
}
