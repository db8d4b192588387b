//! Cross-checking search outcomes against the linear-scan oracle.
//!
//! A mismatch is a diagnostic, never a recoverable runtime condition: the
//! harness logs and counts failures, the test suites assert there are none.
//!
//! The insertion-neighbourhood test is local. It checks ordering around the
//! returned index only, which is sufficient for sorted input and not meant
//! to detect unsorted sequences.

use crate::search::linear_search;
use crate::types::{SearchOutcome, VerificationError};

/// Whether `index` is a defensible place to insert `key`.
///
/// True when `index == 0 || values[index - 1] <= key` and
/// `index + 1 >= len || key <= values[index + 1]`.
///
/// # Example
///
/// ```
/// use probe_core::verify::is_insertion_point;
///
/// let values = [0, 10, 20, 30, 40, 50];
/// assert!(is_insertion_point(&values, 25, 2));
/// assert!(is_insertion_point(&values, 25, 3));
/// assert!(!is_insertion_point(&values, 25, 4));
/// ```
pub fn is_insertion_point(values: &[u64], key: u64, index: usize) -> bool {
    let above_previous = index == 0 || values.get(index - 1).is_some_and(|&v| v <= key);
    let below_next = values.get(index + 1).is_none_or(|&v| key <= v);
    above_previous && below_next
}

/// Check `outcome` for `key` against the oracle.
///
/// - `found` must agree with the oracle
/// - a found index must hold a value equal to the oracle's (any duplicate
///   is acceptable)
/// - a not-found index must be an insertion neighbourhood
///
/// # Example
///
/// ```
/// use probe_core::verify::verify_outcome;
/// use probe_core::types::VerificationError;
/// use probe_core::SearchOutcome;
///
/// let values = [1, 4, 4, 9];
/// assert!(verify_outcome(&values, 4, &SearchOutcome::found(2, 1)).is_ok());
/// assert_eq!(
///     verify_outcome(&values, 5, &SearchOutcome::found(2, 1)),
///     Err(VerificationError::FoundMismatch { expected: false, actual: true })
/// );
/// ```
pub fn verify_outcome(
    values: &[u64],
    key: u64,
    outcome: &SearchOutcome,
) -> Result<(), VerificationError> {
    let expected = linear_search(values, key);

    if outcome.found != expected.found {
        return Err(VerificationError::FoundMismatch {
            expected: expected.found,
            actual: outcome.found,
        });
    }

    if outcome.found {
        let actual = values
            .get(outcome.index)
            .ok_or(VerificationError::IndexOutOfRange {
                index: outcome.index,
                len: values.len(),
            })?;
        if *actual != values[expected.index] {
            return Err(VerificationError::ValueMismatch {
                index: outcome.index,
                expected_index: expected.index,
            });
        }
    } else if !is_insertion_point(values, key, outcome.index) {
        return Err(VerificationError::InvalidInsertionPoint {
            index: outcome.index,
            key,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_point_edges() {
        let values = [10, 20, 30];
        assert!(is_insertion_point(&values, 5, 0));
        assert!(is_insertion_point(&values, 35, 2));
        assert!(!is_insertion_point(&values, 35, 0));
        assert!(!is_insertion_point(&values, 5, 2));
    }

    #[test]
    fn test_insertion_point_single_and_empty() {
        assert!(is_insertion_point(&[5], 3, 0));
        assert!(is_insertion_point(&[5], 9, 0));
        assert!(is_insertion_point(&[], 9, 0));
    }

    #[test]
    fn test_insertion_point_past_end() {
        // index == len, as the oracle reports for a key above everything
        assert!(is_insertion_point(&[1, 2, 3], 9, 3));
        assert!(!is_insertion_point(&[1, 2, 3], 0, 3));
    }

    #[test]
    fn test_insertion_point_at_last_index() {
        // no right neighbour to compare against
        assert!(is_insertion_point(&[1, 2, 3], 9, 2));
        assert!(is_insertion_point(&[1, 2, 3], 3, 2));
        assert!(!is_insertion_point(&[1, 2, 3], 1, 2));
    }

    #[test]
    fn test_duplicate_index_is_accepted() {
        let values = [3, 7, 7, 7, 12];
        for index in 1..=3 {
            assert!(verify_outcome(&values, 7, &SearchOutcome::found(index, 1)).is_ok());
        }
    }

    #[test]
    fn test_wrong_value_is_rejected() {
        let values = [3, 7, 7, 7, 12];
        assert_eq!(
            verify_outcome(&values, 7, &SearchOutcome::found(4, 1)),
            Err(VerificationError::ValueMismatch {
                index: 4,
                expected_index: 1
            })
        );
    }

    #[test]
    fn test_out_of_range_found_is_rejected() {
        let values = [3, 7];
        assert_eq!(
            verify_outcome(&values, 7, &SearchOutcome::found(9, 1)),
            Err(VerificationError::IndexOutOfRange { index: 9, len: 2 })
        );
    }

    #[test]
    fn test_bad_insertion_point_is_rejected() {
        let values = [0, 10, 20, 30, 40, 50];
        assert_eq!(
            verify_outcome(&values, 25, &SearchOutcome::not_found(0, 1)),
            Err(VerificationError::InvalidInsertionPoint { index: 0, key: 25 })
        );
    }

    #[test]
    fn test_missed_key_is_rejected() {
        let values = [0, 10, 20];
        assert_eq!(
            verify_outcome(&values, 10, &SearchOutcome::not_found(1, 1)),
            Err(VerificationError::FoundMismatch {
                expected: true,
                actual: false
            })
        );
    }
}
