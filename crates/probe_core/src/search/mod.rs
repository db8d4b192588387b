//! Probe-counting search algorithms over sorted `u64` sequences.
//!
//! ## Available Algorithms
//!
//! - [`linear_search`]: Forward scan; the correctness oracle
//! - [`binary_search`]: Classic half-interval elimination
//! - [`line_fit_search`]: Interpolation search through the bracket endpoints
//! - [`line_fit_blind_search`]: Line fit, charging the two endpoint reads
//! - [`hybrid_search`]: Alternates line-fit and bisection guesses
//! - [`gradient_search`]: Quadratic model from end tangents, bisection fallback
//!
//! [`SearchAlgorithm`] wraps all six behind one `search(values, key)` call for
//! table-driven callers such as the benchmark harness.
//!
//! ## Probe Accounting
//!
//! `probes` counts guesses: each read of `values[i]` made to decide where to
//! look next. The three interpolating searches read both endpoints up front
//! and do not charge them; [`line_fit_blind_search`] exists to show the cost
//! when that endpoint knowledge is not free.
//!
//! ## Example
//!
//! ```
//! use probe_core::search::{binary_search, line_fit_search};
//!
//! let values: Vec<u64> = (0..1000).map(|i| i * 3).collect();
//!
//! let by_line = line_fit_search(&values, 2400);
//! let by_halving = binary_search(&values, 2400);
//! assert_eq!(by_line.index, 800);
//! assert_eq!(by_halving.index, 800);
//! assert!(by_line.probes < by_halving.probes);
//! ```

mod algorithm;
mod baseline;
mod binary;
mod bracket;
pub mod gradient;
mod hybrid;
mod line_fit;

pub use algorithm::SearchAlgorithm;
pub use baseline::linear_search;
pub use binary::binary_search;
pub use gradient::gradient_search;
pub use hybrid::hybrid_search;
pub use line_fit::{line_fit_blind_search, line_fit_search, ENDPOINT_PROBES};
