//! Static dispatch over the search algorithms.

use std::fmt;
use std::str::FromStr;

use super::{
    binary_search, gradient_search, hybrid_search, line_fit_blind_search, line_fit_search,
    linear_search,
};
use crate::types::{ParseAlgorithmError, SearchOutcome};

/// Every search algorithm in the crate, selectable by value.
///
/// Wraps the free functions in [`crate::search`] so that tables of
/// algorithms can be iterated, named, parsed from configuration, and shipped
/// across threads without function pointers.
///
/// # Variants
///
/// - `Linear`: Forward scan, the verification oracle
/// - `LineFit`: Endpoint interpolation search
/// - `LineFitBlind`: Line fit charging the endpoint reads
/// - `Binary`: Half-interval search
/// - `Hybrid`: Alternating line fit and bisection
/// - `Gradient`: Quadratic inversion with bisection fallback
///
/// # Example
///
/// ```
/// use probe_core::SearchAlgorithm;
///
/// let algorithm: SearchAlgorithm = "line-fit".parse().unwrap();
/// assert_eq!(algorithm, SearchAlgorithm::LineFit);
/// assert_eq!(algorithm.to_string(), "Line Fit");
///
/// let outcome = algorithm.search(&[1, 2, 3, 4, 5], 4);
/// assert_eq!(outcome.index, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SearchAlgorithm {
    /// Forward scan (oracle)
    Linear,
    /// Endpoint line fit
    LineFit,
    /// Endpoint line fit with endpoint reads charged
    LineFitBlind,
    /// Half-interval search
    Binary,
    /// Alternating line fit and bisection
    Hybrid,
    /// Quadratic model with bisection fallback
    Gradient,
}

impl SearchAlgorithm {
    /// All algorithms, oracle first.
    pub const ALL: [SearchAlgorithm; 6] = [
        SearchAlgorithm::Linear,
        SearchAlgorithm::LineFit,
        SearchAlgorithm::LineFitBlind,
        SearchAlgorithm::Binary,
        SearchAlgorithm::Hybrid,
        SearchAlgorithm::Gradient,
    ];

    /// Display name used in reports.
    ///
    /// # Example
    ///
    /// ```
    /// use probe_core::SearchAlgorithm;
    ///
    /// assert_eq!(SearchAlgorithm::Binary.name(), "Binary Search");
    /// assert_eq!(SearchAlgorithm::LineFitBlind.name(), "Line Fit Blind");
    /// ```
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "Linear Search",
            SearchAlgorithm::LineFit => "Line Fit",
            SearchAlgorithm::LineFitBlind => "Line Fit Blind",
            SearchAlgorithm::Binary => "Binary Search",
            SearchAlgorithm::Hybrid => "Hybrid",
            SearchAlgorithm::Gradient => "Gradient",
        }
    }

    /// Kebab-case identifier used on the command line and in config files.
    #[inline]
    pub fn id(&self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "linear",
            SearchAlgorithm::LineFit => "line-fit",
            SearchAlgorithm::LineFitBlind => "line-fit-blind",
            SearchAlgorithm::Binary => "binary",
            SearchAlgorithm::Hybrid => "hybrid",
            SearchAlgorithm::Gradient => "gradient",
        }
    }

    /// Whether this is the linear-scan oracle rather than a contender.
    #[inline]
    pub fn is_oracle(&self) -> bool {
        matches!(self, SearchAlgorithm::Linear)
    }

    /// Run the algorithm.
    #[inline]
    pub fn search(&self, values: &[u64], key: u64) -> SearchOutcome {
        match self {
            SearchAlgorithm::Linear => linear_search(values, key),
            SearchAlgorithm::LineFit => line_fit_search(values, key),
            SearchAlgorithm::LineFitBlind => line_fit_blind_search(values, key),
            SearchAlgorithm::Binary => binary_search(values, key),
            SearchAlgorithm::Hybrid => hybrid_search(values, key),
            SearchAlgorithm::Gradient => gradient_search(values, key),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = ParseAlgorithmError;

    /// Accepts the kebab-case id or the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SearchAlgorithm::ALL
            .into_iter()
            .find(|a| a.id().eq_ignore_ascii_case(wanted) || a.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}
