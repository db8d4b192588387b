//! Endpoint line-fit (interpolation) search.

use super::bracket::{run_bracketed, Bracket};
use crate::math::nearest_index;
use crate::types::SearchOutcome;

/// Reads charged by [`line_fit_blind_search`] for peeking at both endpoints.
pub const ENDPOINT_PROBES: usize = 2;

/// Guess where `key` sits on the line through the bracket endpoints.
#[inline]
pub(crate) fn line_guess(bracket: &Bracket, key: u64) -> usize {
    bracket
        .endpoint_line()
        .and_then(|line| line.invert(key as f64))
        .and_then(nearest_index)
        .unwrap_or_else(|| bracket.midpoint())
}

/// Interpolation search.
///
/// Fits `y = m x + b` through `(min_index, min)` and `(max_index, max)`,
/// inverts it for `key`, reads the nearest index, and replaces whichever
/// endpoint the read proves wrong. Keys outside or equal to the endpoint
/// values are answered without a probe.
///
/// Excellent on evenly spread data; degrades towards a linear scan when one
/// extreme value flattens the fitted line (see [`hybrid_search`]).
///
/// [`hybrid_search`]: super::hybrid_search
///
/// # Example
///
/// ```
/// use probe_core::search::line_fit_search;
/// use probe_core::SearchOutcome;
///
/// let values = [0, 10, 20, 30, 40, 50];
/// assert_eq!(line_fit_search(&values, 30), SearchOutcome::found(3, 1));
/// assert_eq!(line_fit_search(&values, 50), SearchOutcome::found(5, 0));
/// ```
pub fn line_fit_search(values: &[u64], key: u64) -> SearchOutcome {
    run_bracketed(values, key, |bracket, _| line_guess(bracket, key))
}

/// [`line_fit_search`] with the two endpoint reads charged as probes.
///
/// Models the cost when endpoint values cannot be known in advance.
///
/// # Example
///
/// ```
/// use probe_core::search::{line_fit_blind_search, line_fit_search};
///
/// let values = [3, 9, 27, 81];
/// let sighted = line_fit_search(&values, 27);
/// let blind = line_fit_blind_search(&values, 27);
/// assert_eq!(blind.index, sighted.index);
/// assert_eq!(blind.probes, sighted.probes + 2);
/// ```
pub fn line_fit_blind_search(values: &[u64], key: u64) -> SearchOutcome {
    line_fit_search(values, key).with_extra_probes(ENDPOINT_PROBES)
}
