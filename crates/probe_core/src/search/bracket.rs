//! Shared bracket state machine for the interpolating searches.
//!
//! Line fit, hybrid and gradient search differ only in how they pick the
//! next index. Everything else lives here: endpoint fast paths, clamping the
//! guess strictly inside the bracket, narrowing, and the collapse check.

use crate::math::Line;
use crate::types::SearchOutcome;

/// Known-value interval `[lo, hi]` with `values[lo] < key < values[hi]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Bracket {
    pub lo: usize,
    pub hi: usize,
    pub min: u64,
    pub max: u64,
}

/// Result of peeking at the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Opening {
    /// The endpoints already decide the search.
    Resolved(SearchOutcome),
    /// The key lies strictly between the endpoints.
    Open(Bracket),
}

impl Bracket {
    /// Read both endpoints and resolve the trivial cases.
    ///
    /// Endpoint reads are not charged as probes.
    pub fn open(values: &[u64], key: u64) -> Opening {
        let Some((&min, &max)) = values.first().zip(values.last()) else {
            return Opening::Resolved(SearchOutcome::not_found(0, 0));
        };
        let hi = values.len() - 1;

        if key < min {
            Opening::Resolved(SearchOutcome::not_found(0, 0))
        } else if key > max {
            Opening::Resolved(SearchOutcome::not_found(hi, 0))
        } else if key == min {
            Opening::Resolved(SearchOutcome::found(0, 0))
        } else if key == max {
            Opening::Resolved(SearchOutcome::found(hi, 0))
        } else {
            Opening::Open(Self { lo: 0, hi, min, max })
        }
    }

    /// No unread index remains between the endpoints.
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.lo + 1 >= self.hi
    }

    /// Bisection guess.
    #[inline]
    pub fn midpoint(&self) -> usize {
        self.lo + (self.hi - self.lo) / 2
    }

    /// Line through `(lo, min)` and `(hi, max)`.
    #[inline]
    pub fn endpoint_line(&self) -> Option<Line<f64>> {
        Line::through(
            (self.lo as f64, self.min as f64),
            (self.hi as f64, self.max as f64),
        )
    }

    /// Force a guess into `[lo + 1, hi - 1]` so every probe shrinks the bracket.
    ///
    /// Must not be called on a collapsed bracket.
    #[inline]
    pub fn clamp(&self, guess: usize) -> usize {
        guess.clamp(self.lo + 1, self.hi - 1)
    }

    /// Replace one endpoint with the probed index.
    #[inline]
    fn narrow(&mut self, index: usize, value: u64, key: u64) {
        if value < key {
            self.lo = index;
            self.min = value;
        } else {
            self.hi = index;
            self.max = value;
        }
    }
}

/// Drive a bracketed search with `guess` choosing each probe.
///
/// `guess` receives the current bracket and the zero-based iteration number
/// and may return any index; it is clamped into the open bracket before the
/// read.
pub(crate) fn run_bracketed<G>(values: &[u64], key: u64, mut guess: G) -> SearchOutcome
where
    G: FnMut(&Bracket, usize) -> usize,
{
    let mut bracket = match Bracket::open(values, key) {
        Opening::Resolved(outcome) => return outcome,
        Opening::Open(bracket) => bracket,
    };

    let mut probes = 0;
    loop {
        if bracket.is_collapsed() {
            return SearchOutcome::not_found(bracket.lo, probes);
        }

        let index = bracket.clamp(guess(&bracket, probes));
        let value = values[index];
        probes += 1;

        if value == key {
            return SearchOutcome::found(index, probes);
        }
        bracket.narrow(index, value, key);
    }
}
