//! Linear scan: the correctness oracle.

use crate::types::SearchOutcome;

/// Scan forward from index 0 until the key or a larger value is met.
///
/// Every element read is a probe. A key larger than every element (or an
/// empty sequence) yields `not_found(len, len)`, the only outcome in the crate
/// whose index may equal the sequence length.
///
/// Reserved for verification; it is the ground truth the other algorithms
/// are checked against.
///
/// # Example
///
/// ```
/// use probe_core::search::linear_search;
/// use probe_core::SearchOutcome;
///
/// let values = [1, 3, 3, 8];
/// assert_eq!(linear_search(&values, 3), SearchOutcome::found(1, 2));
/// assert_eq!(linear_search(&values, 5), SearchOutcome::not_found(3, 4));
/// assert_eq!(linear_search(&values, 9), SearchOutcome::not_found(4, 4));
/// ```
pub fn linear_search(values: &[u64], key: u64) -> SearchOutcome {
    for (index, &value) in values.iter().enumerate() {
        if value == key {
            return SearchOutcome::found(index, index + 1);
        }
        if value > key {
            return SearchOutcome::not_found(index, index + 1);
        }
    }
    SearchOutcome::not_found(values.len(), values.len())
}
