//! Half-interval search.

use std::cmp::Ordering;

use crate::types::SearchOutcome;

/// Classic binary search over `[min_index, max_index]`.
///
/// Each probe reads the midpoint and discards the half that cannot hold the
/// key. A miss returns the last probed index, which is always a valid
/// insertion neighbourhood. Never exceeds `ceil(log2(len)) + 1` probes.
///
/// # Example
///
/// ```
/// use probe_core::search::binary_search;
///
/// let values = [0, 10, 20, 30, 40, 50];
/// let outcome = binary_search(&values, 30);
/// assert!(outcome.found);
/// assert_eq!(outcome.index, 3);
///
/// let miss = binary_search(&values, 25);
/// assert!(!miss.found);
/// assert!(miss.index == 2 || miss.index == 3);
/// ```
pub fn binary_search(values: &[u64], key: u64) -> SearchOutcome {
    if values.is_empty() {
        return SearchOutcome::not_found(0, 0);
    }

    let mut min_index = 0;
    let mut max_index = values.len() - 1;
    let mut probes = 0;

    loop {
        let guess_index = min_index + (max_index - min_index) / 2;
        probes += 1;

        match values[guess_index].cmp(&key) {
            Ordering::Equal => return SearchOutcome::found(guess_index, probes),
            Ordering::Less => min_index = guess_index + 1,
            Ordering::Greater => {
                // underflow guard
                if guess_index == 0 {
                    return SearchOutcome::not_found(0, probes);
                }
                max_index = guess_index - 1;
            }
        }

        if min_index > max_index {
            return SearchOutcome::not_found(guess_index, probes);
        }
    }
}
