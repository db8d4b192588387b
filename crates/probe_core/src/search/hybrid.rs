//! Alternating line-fit / bisection search.

use super::bracket::run_bracketed;
use super::line_fit::line_guess;
use crate::types::SearchOutcome;

/// Line-fit search that takes a bisection step every other iteration.
///
/// Iterations 0, 2, 4, ... guess from the endpoint line; 1, 3, 5, ... guess the
/// midpoint. Pure line fit can crawl one index per probe when an extreme
/// outlier flattens the line; the bisection steps halve the bracket regardless,
/// bounding the worst case at roughly twice binary search while keeping most
/// of the interpolation benefit on evenly spread data.
///
/// # Example
///
/// ```
/// use probe_core::search::{hybrid_search, line_fit_search};
///
/// let mut values: Vec<u64> = (0..100).map(|i| i * 20).collect();
/// values[99] = 200_000;
///
/// let hybrid = hybrid_search(&values, 1000);
/// let line = line_fit_search(&values, 1000);
/// assert!(hybrid.found);
/// assert!(hybrid.probes < line.probes);
/// ```
pub fn hybrid_search(values: &[u64], key: u64) -> SearchOutcome {
    run_bracketed(values, key, |bracket, iteration| {
        if iteration % 2 == 0 {
            line_guess(bracket, key)
        } else {
            bracket.midpoint()
        }
    })
}
