//! Harness configuration management.
//!
//! Handles loading of sweep and perf parameters from TOML files with
//! environment variable override support. Every tunable the driver uses lives
//! here; nothing is compiled in as a global constant.

use crate::distributions::Distribution;
use crate::error::ConfigError;
use probe_core::SearchAlgorithm;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Largest `max_value` for which the outlier element (`max_value * 100`) fits.
const MAX_VALUE_LIMIT: u64 = u64::MAX / 100;

/// Upper bound on sequence length, to keep a mistyped config from exhausting memory.
const MAX_SAMPLES_LIMIT: usize = 10_000_000;

/// File name of the per-row sweep statistics.
pub const RESULTS_FILE: &str = "results.csv";

/// File name of the per-distribution sample sequences.
pub const SAMPLES_FILE: &str = "samples.csv";

/// Harness configuration.
///
/// Missing TOML keys fall back to [`HarnessConfig::default`].
///
/// # Examples
///
/// ```rust
/// use probe_harness::HarnessConfig;
///
/// let config: HarnessConfig = toml::from_str("max_samples = 64\nseed = 9").unwrap();
/// assert_eq!(config.max_samples, 64);
/// assert_eq!(config.seed, 9);
/// assert_eq!(config.max_value, 2000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Largest generated value and largest random key
    pub max_value: u64,

    /// Largest sequence length swept (and the perf sequence length)
    pub max_samples: usize,

    /// Stride between swept sequence lengths
    pub sample_step: usize,

    /// Random keys searched per (distribution, algorithm, length)
    pub runs_per_test: usize,

    /// Keys searched per (algorithm, distribution) in the perf run
    pub perf_searches: usize,

    /// Base seed; each worker derives its own stream from it
    pub seed: u64,

    /// Worker threads; 0 means one per logical CPU
    pub workers: usize,

    /// Cross-check every outcome against the linear oracle
    pub verify: bool,

    /// Directory receiving the CSV reports
    pub output_dir: PathBuf,

    /// Write a header line at the top of each CSV
    pub csv_headers: bool,

    /// Distributions to exercise, in report order
    pub distributions: Vec<Distribution>,

    /// Algorithms to exercise, in report order
    pub algorithms: Vec<SearchAlgorithm>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            max_value: 2000,
            max_samples: 1000,
            sample_step: 1,
            runs_per_test: 100,
            perf_searches: 100_000,
            seed: 0x5EED,
            workers: 0,
            verify: true,
            output_dir: PathBuf::from("."),
            csv_headers: false,
            distributions: Distribution::ALL.to_vec(),
            algorithms: SearchAlgorithm::ALL.to_vec(),
        }
    }
}

impl HarnessConfig {
    /// Small, fast parameters for tests and smoke checks.
    pub fn quick() -> Self {
        Self {
            max_samples: 64,
            sample_step: 7,
            runs_per_test: 8,
            perf_searches: 500,
            workers: 2,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults if the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    ///
    /// Recognised variables: `PROBE_MAX_VALUE`, `PROBE_MAX_SAMPLES`,
    /// `PROBE_SAMPLE_STEP`, `PROBE_RUNS`, `PROBE_PERF_SEARCHES`, `PROBE_SEED`,
    /// `PROBE_WORKERS`, `PROBE_VERIFY`, `PROBE_OUTPUT_DIR`. Unparseable values
    /// are ignored.
    pub fn with_env_override(mut self) -> Self {
        override_parsed("PROBE_MAX_VALUE", &mut self.max_value);
        override_parsed("PROBE_MAX_SAMPLES", &mut self.max_samples);
        override_parsed("PROBE_SAMPLE_STEP", &mut self.sample_step);
        override_parsed("PROBE_RUNS", &mut self.runs_per_test);
        override_parsed("PROBE_PERF_SEARCHES", &mut self.perf_searches);
        override_parsed("PROBE_SEED", &mut self.seed);
        override_parsed("PROBE_WORKERS", &mut self.workers);
        override_parsed("PROBE_VERIFY", &mut self.verify);

        if let Ok(output_dir) = std::env::var("PROBE_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.max_value == 0 {
            errors.push("max_value must be greater than 0".to_string());
        }
        if self.max_value > MAX_VALUE_LIMIT {
            errors.push(format!(
                "max_value {} exceeds maximum allowed ({})",
                self.max_value, MAX_VALUE_LIMIT
            ));
        }

        if self.max_samples == 0 {
            errors.push("max_samples must be greater than 0".to_string());
        }
        if self.max_samples > MAX_SAMPLES_LIMIT {
            errors.push(format!(
                "max_samples {} exceeds maximum allowed ({})",
                self.max_samples, MAX_SAMPLES_LIMIT
            ));
        }

        if self.sample_step == 0 {
            errors.push("sample_step must be greater than 0".to_string());
        }
        if self.runs_per_test == 0 {
            errors.push("runs_per_test must be greater than 0".to_string());
        }
        if self.perf_searches == 0 {
            errors.push("perf_searches must be greater than 0".to_string());
        }

        if self.output_dir.as_os_str().is_empty() {
            errors.push("output_dir cannot be empty".to_string());
        }

        if self.distributions.is_empty() {
            errors.push("at least one distribution must be selected".to_string());
        }
        if self.algorithms.is_empty() {
            errors.push("at least one algorithm must be selected".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }

    /// Worker thread count with `0` resolved to the logical CPU count.
    pub fn resolved_workers(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get()
        } else {
            self.workers
        }
    }

    /// Sequence lengths swept: `1, 1 + step, 1 + 2*step, ...` up to `max_samples`.
    pub fn sample_counts(&self) -> impl Iterator<Item = usize> {
        (1..=self.max_samples).step_by(self.sample_step.max(1))
    }

    /// Number of rows a sweep with this configuration produces.
    pub fn expected_rows(&self) -> usize {
        self.distributions.len() * self.algorithms.len() * self.sample_counts().count()
    }

    /// Path of the sweep statistics CSV.
    pub fn results_path(&self) -> PathBuf {
        self.output_dir.join(RESULTS_FILE)
    }

    /// Path of the sample sequences CSV.
    pub fn samples_path(&self) -> PathBuf {
        self.output_dir.join(SAMPLES_FILE)
    }
}

fn override_parsed<T: std::str::FromStr>(var: &str, target: &mut T) {
    if let Some(value) = std::env::var(var).ok().and_then(|v| v.trim().parse().ok()) {
        *target = value;
    }
}
