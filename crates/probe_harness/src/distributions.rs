//! Synthetic sorted sequences.
//!
//! Every generator produces a non-decreasing sequence of `count` values in
//! `[0, max_value]`. The single exception is [`Distribution::LinearOutlier`],
//! whose last element is `max_value * 100`.
//!
//! ## Shapes
//!
//! | Distribution    | value at `x = i / (n - 1)`          |
//! |-----------------|-------------------------------------|
//! | `Random`        | uniform draw, then sorted           |
//! | `Linear`        | `x * max`                           |
//! | `LinearOutlier` | `x * max`, last element `max * 100` |
//! | `Quadratic`     | `x² * max`                          |
//! | `Cubic`         | `x³ * max`                          |
//! | `Log`           | `ln(i + 2) / ln(n + 1) * max`       |

use crate::error::ParseDistributionError;
use crate::rng::ProbeRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outlier multiplier applied to the last element of [`Distribution::LinearOutlier`].
pub const OUTLIER_FACTOR: u64 = 100;

/// Shape of a generated sorted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Distribution {
    /// Uniform random values, sorted
    Random,
    /// Evenly spaced ramp
    Linear,
    /// Evenly spaced ramp with one extreme last element
    LinearOutlier,
    /// Squared ramp
    Quadratic,
    /// Cubed ramp
    Cubic,
    /// Logarithmic ramp
    Log,
}

impl Distribution {
    /// Every distribution, in report order.
    pub const ALL: [Distribution; 6] = [
        Distribution::Random,
        Distribution::Linear,
        Distribution::LinearOutlier,
        Distribution::Quadratic,
        Distribution::Cubic,
        Distribution::Log,
    ];

    /// Display name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Distribution::Random => "Random",
            Distribution::Linear => "Linear",
            Distribution::LinearOutlier => "Linear Outlier",
            Distribution::Quadratic => "Quadratic",
            Distribution::Cubic => "Cubic",
            Distribution::Log => "Log",
        }
    }

    /// Short kebab-case identifier used on the command line and in TOML.
    pub fn id(self) -> &'static str {
        match self {
            Distribution::Random => "random",
            Distribution::Linear => "linear",
            Distribution::LinearOutlier => "linear-outlier",
            Distribution::Quadratic => "quadratic",
            Distribution::Cubic => "cubic",
            Distribution::Log => "log",
        }
    }

    /// Whether two calls with equal arguments can produce different sequences.
    pub fn is_random(self) -> bool {
        matches!(self, Distribution::Random)
    }

    /// Generates a fresh sequence of `count` values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_harness::{Distribution, ProbeRng};
    ///
    /// let mut rng = ProbeRng::from_seed(1);
    /// let values = Distribution::Quadratic.generate(5, 2000, &mut rng);
    /// assert_eq!(values, vec![0, 125, 500, 1125, 2000]);
    /// ```
    pub fn generate(self, count: usize, max_value: u64, rng: &mut ProbeRng) -> Vec<u64> {
        let mut values = Vec::with_capacity(count);
        self.fill(&mut values, count, max_value, rng);
        values
    }

    /// Overwrites `values` with a sequence of `count` values, reusing its allocation.
    ///
    /// Only [`Distribution::Random`] draws from `rng`.
    pub fn fill(self, values: &mut Vec<u64>, count: usize, max_value: u64, rng: &mut ProbeRng) {
        values.clear();
        if count == 0 {
            return;
        }

        match self {
            Distribution::Random => {
                values.extend((0..count).map(|_| rng.gen_key(max_value)));
                values.sort_unstable();
            }
            Distribution::Linear => extend_curve(values, count, max_value, |x| x),
            Distribution::LinearOutlier => {
                extend_curve(values, count, max_value, |x| x);
                if let Some(last) = values.last_mut() {
                    *last = max_value.saturating_mul(OUTLIER_FACTOR);
                }
            }
            Distribution::Quadratic => extend_curve(values, count, max_value, |x| x * x),
            Distribution::Cubic => extend_curve(values, count, max_value, |x| x * x * x),
            Distribution::Log => {
                let denominator = (count as f64).ln_1p();
                let max = max_value as f64;
                values.extend((0..count).map(|i| {
                    let y = ((i + 1) as f64).ln_1p() / denominator * max;
                    (y as u64).min(max_value)
                }));
            }
        }
    }
}

/// Appends `shape(x) * max_value` for `x` evenly spaced over `[0, 1]`.
///
/// A single-element sequence sits at `x = 0`.
fn extend_curve(values: &mut Vec<u64>, count: usize, max_value: u64, shape: impl Fn(f64) -> f64) {
    let divisor = if count > 1 { (count - 1) as f64 } else { 1.0 };
    let max = max_value as f64;
    values.extend((0..count).map(|i| {
        let x = i as f64 / divisor;
        // The float-to-int cast saturates, so the min only guards rounding at x = 1.
        ((shape(x) * max) as u64).min(max_value)
    }));
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Distribution {
    type Err = ParseDistributionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Distribution::ALL
            .into_iter()
            .find(|d| d.id().eq_ignore_ascii_case(wanted) || d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseDistributionError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_sorted(values: &[u64]) -> bool {
        values.windows(2).all(|w| w[0] <= w[1])
    }

    // ===== Shape Tests =====

    #[test]
    fn test_linear_shape() {
        let mut rng = ProbeRng::from_seed(0);
        let values = Distribution::Linear.generate(6, 50, &mut rng);
        assert_eq!(values, vec![0, 10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_linear_outlier_shape() {
        let mut rng = ProbeRng::from_seed(0);
        let values = Distribution::LinearOutlier.generate(6, 50, &mut rng);
        assert_eq!(values, vec![0, 10, 20, 30, 40, 5000]);
    }

    #[test]
    fn test_cubic_shape() {
        let mut rng = ProbeRng::from_seed(0);
        let values = Distribution::Cubic.generate(3, 2000, &mut rng);
        assert_eq!(values, vec![0, 250, 2000]);
    }

    #[test]
    fn test_log_shape() {
        let mut rng = ProbeRng::from_seed(0);
        let values = Distribution::Log.generate(3, 2000, &mut rng);
        // ln2/ln4 = 0.5, ln3/ln4 = 0.792..
        assert_eq!(values, vec![1000, 1584, 2000]);
    }

    #[test]
    fn test_single_element_curves() {
        let mut rng = ProbeRng::from_seed(0);
        assert_eq!(Distribution::Linear.generate(1, 2000, &mut rng), vec![0]);
        assert_eq!(Distribution::LinearOutlier.generate(1, 2000, &mut rng), vec![200_000]);
        assert_eq!(Distribution::Log.generate(1, 2000, &mut rng), vec![2000]);
    }

    #[test]
    fn test_zero_count_is_empty() {
        let mut rng = ProbeRng::from_seed(0);
        for distribution in Distribution::ALL {
            assert!(distribution.generate(0, 2000, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_random_is_sorted_and_seeded() {
        let mut a = ProbeRng::from_seed(77);
        let mut b = ProbeRng::from_seed(77);
        let first = Distribution::Random.generate(500, 2000, &mut a);
        let second = Distribution::Random.generate(500, 2000, &mut b);

        assert!(is_sorted(&first));
        assert!(first.iter().all(|&v| v <= 2000));
        assert_eq!(first, second);
    }

    #[test]
    fn test_fill_reuses_buffer() {
        let mut rng = ProbeRng::from_seed(0);
        let mut values = Distribution::Cubic.generate(100, 2000, &mut rng);
        Distribution::Linear.fill(&mut values, 3, 10, &mut rng);
        assert_eq!(values, vec![0, 5, 10]);
    }

    #[test]
    fn test_only_random_is_random() {
        let random: Vec<_> = Distribution::ALL.into_iter().filter(|d| d.is_random()).collect();
        assert_eq!(random, vec![Distribution::Random]);
    }

    // ===== Naming Tests =====

    #[test]
    fn test_parse_by_id_and_name() {
        for distribution in Distribution::ALL {
            assert_eq!(distribution.id().parse::<Distribution>(), Ok(distribution));
            assert_eq!(distribution.name().parse::<Distribution>(), Ok(distribution));
            assert_eq!(distribution.to_string(), distribution.name());
        }
        assert_eq!(
            " LINEAR-OUTLIER ".parse::<Distribution>(),
            Ok(Distribution::LinearOutlier)
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "zipf".parse::<Distribution>().unwrap_err();
        assert_eq!(err.to_string(), "unknown distribution: zipf");
    }

    // ===== Property Tests =====

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property test: every shape is sorted and bounded.
        #[test]
        fn prop_sorted_and_bounded(
            seed in any::<u64>(),
            count in 1..2000usize,
            max_value in 1u64..1_000_000,
            index in 0..6usize,
        ) {
            let distribution = Distribution::ALL[index];
            let mut rng = ProbeRng::from_seed(seed);
            let values = distribution.generate(count, max_value, &mut rng);

            prop_assert_eq!(values.len(), count);
            prop_assert!(is_sorted(&values));

            let body = if distribution == Distribution::LinearOutlier {
                &values[..count - 1]
            } else {
                &values[..]
            };
            prop_assert!(body.iter().all(|&v| v <= max_value));
        }
    }
}
