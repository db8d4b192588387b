//! Error types for structured error handling.
//!
//! This module provides:
//! - `VerificationError`: An outcome disagrees with the linear-scan oracle
//! - `ParseAlgorithmError`: An algorithm name could not be recognised

use thiserror::Error;

/// Disagreement between a search outcome and the linear-scan oracle.
///
/// Searches themselves never fail; these errors are diagnostics raised by
/// [`verify_outcome`](crate::verify::verify_outcome) so that a harness or
/// test suite can surface defects instead of silently absorbing them.
///
/// # Variants
/// - `FoundMismatch`: The `found` flag differs from the oracle
/// - `IndexOutOfRange`: A found outcome points past the end of the sequence
/// - `ValueMismatch`: A found outcome points at a different value
/// - `InvalidInsertionPoint`: A not-found index is not a valid insertion neighbourhood
///
/// # Examples
/// ```
/// use probe_core::types::VerificationError;
///
/// let err = VerificationError::FoundMismatch { expected: true, actual: false };
/// assert_eq!(format!("{}", err), "found flag mismatch: expected true, got false");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// The `found` flag differs from the oracle.
    #[error("found flag mismatch: expected {expected}, got {actual}")]
    FoundMismatch {
        /// Oracle's answer
        expected: bool,
        /// Algorithm's answer
        actual: bool,
    },

    /// A found outcome indexes past the end of the sequence.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// Returned index
        index: usize,
        /// Sequence length
        len: usize,
    },

    /// A found outcome points at a value different from the oracle's.
    #[error("index {index} holds a different value than oracle index {expected_index}")]
    ValueMismatch {
        /// Returned index
        index: usize,
        /// Index the oracle found
        expected_index: usize,
    },

    /// A not-found index is not a valid place to insert the key.
    #[error("index {index} is not a valid insertion point for key {key}")]
    InvalidInsertionPoint {
        /// Returned index
        index: usize,
        /// Key that was searched for
        key: u64,
    },
}

/// Unknown search algorithm name.
///
/// # Examples
/// ```
/// use probe_core::SearchAlgorithm;
///
/// let err = "quantum".parse::<SearchAlgorithm>().unwrap_err();
/// assert!(err.to_string().contains("quantum"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown search algorithm: {0}")]
pub struct ParseAlgorithmError(pub String);
