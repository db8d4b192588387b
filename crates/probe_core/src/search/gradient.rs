//! Gradient search: quadratic inversion with bisection fallback.
//!
//! Instead of one global line through the bracket endpoints, each iteration
//! samples a tangent near either end, models the second derivative as
//! constant between them, and inverts the resulting parabola for the key.
//! Strongly curved data (cubic and steeper) is usually tracked better than
//! by a chord; on gentle curves the extra model cost rarely pays off.
//!
//! The model is rebuilt from the current bracket on every iteration. When it
//! cannot be built (bracket narrower than
//! [`TANGENT_DIVISOR`](crate::math::TANGENT_DIVISOR) elements,
//! degenerate tangent) or has no usable root (negative discriminant, flat
//! second derivative, roots outside the bracket), that single iteration falls
//! back to bisection.
//!
//! Tangent samples read `values` but only the guess itself counts as a probe,
//! so probe counts stay comparable with line-fit search.

use super::bracket::{run_bracketed, Bracket};
use crate::math::QuadraticModel;
use crate::types::SearchOutcome;

/// Where a guess came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessSource {
    /// Root of the fitted quadratic.
    Model,
    /// Bracket midpoint, used when the model is unavailable.
    Bisection,
}

/// One gradient-search guess, before clamping into the bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guess {
    /// Proposed index.
    pub index: usize,
    /// How it was produced.
    pub source: GuessSource,
}

/// Compute the gradient-search guess for the bracket `[lo, hi]`.
///
/// Exposed so callers can observe when the quadratic model is used and when
/// the bisection fallback kicks in.
///
/// # Example
///
/// ```
/// use probe_core::search::gradient::{next_guess, GuessSource};
///
/// let squares: Vec<u64> = (0..100).map(|i| i * i).collect();
/// let guess = next_guess(&squares, 0, 99, 2500);
/// assert_eq!(guess.source, GuessSource::Model);
///
/// // Ten elements are too few to sample tangents.
/// let guess = next_guess(&squares, 0, 9, 40);
/// assert_eq!(guess.source, GuessSource::Bisection);
/// assert_eq!(guess.index, 4);
/// ```
pub fn next_guess(values: &[u64], lo: usize, hi: usize, key: u64) -> Guess {
    QuadraticModel::from_bracket(values, lo, hi)
        .and_then(|model| model.select_root(key as f64, lo, hi))
        .map(|index| Guess {
            index,
            source: GuessSource::Model,
        })
        .unwrap_or(Guess {
            index: lo + (hi - lo) / 2,
            source: GuessSource::Bisection,
        })
}

/// Gradient search.
///
/// Fast paths, clamping, probe counting and termination match
/// [`line_fit_search`](super::line_fit_search); only the guess differs.
///
/// # Example
///
/// ```
/// use probe_core::search::{gradient_search, line_fit_search};
///
/// let cubes: Vec<u64> = (0..1000).map(|i| i * i * i / 1000).collect();
/// let key = cubes[700];
///
/// let gradient = gradient_search(&cubes, key);
/// assert!(gradient.found);
/// assert_eq!(cubes[gradient.index], key);
/// assert!(gradient.probes <= line_fit_search(&cubes, key).probes);
/// ```
pub fn gradient_search(values: &[u64], key: u64) -> SearchOutcome {
    run_bracketed(values, key, |bracket: &Bracket, _| {
        next_guess(values, bracket.lo, bracket.hi, key).index
    })
}
