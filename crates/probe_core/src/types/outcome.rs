//! The result envelope shared by every search algorithm.

use std::fmt;

/// Result of one search call.
///
/// Constructed fresh per call and never updated afterwards.
///
/// # Fields
///
/// - `found`: whether the key is present
/// - `index`: where the key is (when found), or an insertion neighbourhood
///   `i` with `values[i - 1] <= key <= values[i + 1]` (when not found)
/// - `probes`: number of `values[i]` reads the algorithm made
///
/// # Examples
/// ```
/// use probe_core::SearchOutcome;
///
/// let hit = SearchOutcome::found(3, 2);
/// assert!(hit.found);
/// assert_eq!(hit.index, 3);
///
/// let miss = SearchOutcome::not_found(0, 1);
/// assert!(!miss.found);
/// assert_eq!(format!("{}", miss), "not found near 0 (1 probes)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Whether the key was located.
    pub found: bool,
    /// Location of the key, or the insertion neighbourhood when absent.
    pub index: usize,
    /// Number of sequence reads performed.
    pub probes: usize,
}

impl SearchOutcome {
    /// Outcome for a key located at `index`.
    #[inline]
    pub fn found(index: usize, probes: usize) -> Self {
        Self {
            found: true,
            index,
            probes,
        }
    }

    /// Outcome for an absent key whose insertion neighbourhood is `index`.
    #[inline]
    pub fn not_found(index: usize, probes: usize) -> Self {
        Self {
            found: false,
            index,
            probes,
        }
    }

    /// Returns a copy with `extra` probes added.
    ///
    /// Used to charge reads that happen outside the algorithm proper, such as
    /// the endpoint peek of the blind line-fit variant.
    #[inline]
    pub fn with_extra_probes(self, extra: usize) -> Self {
        Self {
            probes: self.probes + extra,
            ..self
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.found {
            write!(f, "found at {} ({} probes)", self.index, self.probes)
        } else {
            write!(f, "not found near {} ({} probes)", self.index, self.probes)
        }
    }
}
