//! # probe_harness: Benchmark Driver for probe_core
//!
//! ## Orchestration Layer Role
//!
//! probe_harness exercises every probe_core algorithm against synthetic
//! sorted data and aggregates the results:
//! - Synthetic sorted sequences: `Distribution` (`distributions`)
//! - Explicit run parameters: `HarnessConfig` (`config`)
//! - Seeded, per-worker random keys: `ProbeRng` (`rng`)
//! - Min / max / average probe statistics: `ProbeStats` (`stats`)
//! - Parallel sweep over distributions with verification: `run_sweep` (`sweep`)
//! - Wall-clock timing of fixed key sets: `run_perf` (`perf`)
//! - CSV output of sweep rows and sample sequences (`report`)
//!
//! ## Concurrency
//!
//! The sweep parallelises across distributions, never within a search. Each
//! pool thread claims the next distribution from a shared atomic counter and
//! owns its own random source; nothing else is shared.
//!
//! ## Usage Examples
//!
//! ```rust
//! use probe_harness::{run_sweep, HarnessConfig};
//!
//! let config = HarnessConfig::quick();
//! let report = run_sweep(&config).unwrap();
//!
//! assert!(report.failures.is_empty());
//! assert_eq!(report.rows.len(), config.expected_rows());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod distributions;
pub mod error;
pub mod perf;
pub mod report;
pub mod rng;
pub mod stats;
pub mod sweep;

pub use config::HarnessConfig;
pub use distributions::Distribution;
pub use error::{ConfigError, HarnessError, Result};
pub use perf::{run_perf, PerfReport};
pub use rng::ProbeRng;
pub use stats::{ProbeStats, SweepRow};
pub use sweep::{run_sweep, SweepReport};
