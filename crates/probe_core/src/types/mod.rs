//! Core result and error types.
//!
//! This module provides:
//! - `outcome`: [`SearchOutcome`], the value every search algorithm returns
//! - `error`: Structured error types for verification and name parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`SearchOutcome`] from `outcome`
//! - [`VerificationError`], [`ParseAlgorithmError`] from `error`

pub mod error;
pub mod outcome;

// Re-export commonly used types at module level
pub use error::{ParseAlgorithmError, VerificationError};
pub use outcome::SearchOutcome;
