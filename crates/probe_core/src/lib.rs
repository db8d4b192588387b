//! # probe_core: Probe-Counting Search over Sorted Sequences
//!
//! ## Foundation Layer Role
//!
//! probe_core is the bottom layer of the workspace, providing:
//! - The shared result envelope: [`SearchOutcome`] (`types`)
//! - Line and quadratic fits used to guess an index from a value (`math`)
//! - Six probe-counting search algorithms behind [`SearchAlgorithm`] (`search`)
//! - Cross-checking of any outcome against the linear-scan oracle (`verify`)
//!
//! A "probe" is one read of `values[i]` made while searching. Every algorithm
//! reports how many it needed, which is what the harness layer aggregates.
//!
//! ## Minimal Dependencies
//!
//! - num-traits: generic floating-point line fits
//! - thiserror: verification error types
//! - serde: serialisation support (optional, `serde` feature)
//!
//! ## Usage Examples
//!
//! ```rust
//! use probe_core::search::SearchAlgorithm;
//! use probe_core::verify::verify_outcome;
//!
//! let values = [0_u64, 10, 20, 30, 40, 50];
//!
//! for algorithm in SearchAlgorithm::ALL {
//!     let outcome = algorithm.search(&values, 30);
//!     assert!(outcome.found);
//!     assert_eq!(outcome.index, 3);
//!     assert!(verify_outcome(&values, 30, &outcome).is_ok());
//! }
//! ```
//!
//! ## Preconditions
//!
//! Every search assumes `values` is sorted ascending (duplicates allowed).
//! Unsorted input is not detected; results are then unspecified.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod search;
pub mod types;
pub mod verify;

pub use search::SearchAlgorithm;
pub use types::SearchOutcome;
