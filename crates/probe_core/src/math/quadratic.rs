//! Quadratic model fitted from the end tangents of a bracket.
//!
//! The model assumes a constant second derivative:
//!
//! ```text
//! y'' = c1
//! y'  = c1 x + c2
//! y   = c1/2 x² + c2 x + c3
//! ```
//!
//! `y'` is the line through the two tangent slopes sampled near the bracket
//! ends, and `c3` pins the curve to the known lower endpoint.

use super::{nearest_index, Line};

/// Tangent sample distance as a fraction of the bracket width (`width / 10`).
pub const TANGENT_DIVISOR: usize = 10;

/// Quadratic `y = c1/2 x² + c2 x + c3` used by gradient search.
///
/// # Example
///
/// ```
/// use probe_core::math::QuadraticModel;
///
/// // y = (x - 10)², i.e. c1 = 2, c2 = -20, c3 = 100
/// let model = QuadraticModel::new(2.0, -20.0, 100.0);
/// assert_eq!(model.eval(10.0), 0.0);
///
/// // Both roots of y = 49 (x = 3 and x = 17) lie inside (0, 20);
/// // concave up keeps the larger one.
/// assert_eq!(model.select_root(49.0, 0, 20), Some(17));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticModel {
    c1: f64,
    c2: f64,
    c3: f64,
}

impl QuadraticModel {
    /// Construct a model from its coefficients.
    #[inline]
    pub fn new(c1: f64, c2: f64, c3: f64) -> Self {
        Self { c1, c2, c3 }
    }

    /// Fit the model to the bracket `[lo, hi]` of a sorted sequence.
    ///
    /// Samples one tangent at each end, `width / TANGENT_DIVISOR` elements
    /// inward, and fits `y'` through the two slopes. Returns `None` when the
    /// bracket is too narrow for a non-zero offset or any line is degenerate.
    ///
    /// The tangent samples read `values` but are not guesses; callers do not
    /// charge them as probes.
    pub fn from_bracket(values: &[u64], lo: usize, hi: usize) -> Option<Self> {
        if hi <= lo || hi >= values.len() {
            return None;
        }

        let width = hi - lo;
        let offset = width / TANGENT_DIVISOR;
        if offset == 0 || offset > width {
            return None;
        }

        let point = |i: usize| (i as f64, values[i] as f64);
        let tangent_lo = Line::through(point(lo), point(lo + offset))?;
        let tangent_hi = Line::through(point(hi), point(hi - offset))?;

        let prime = Line::through(
            (lo as f64, tangent_lo.slope()),
            (hi as f64, tangent_hi.slope()),
        )?;

        let c1 = prime.slope();
        let c2 = prime.intercept();
        let x = lo as f64;
        let c3 = values[lo] as f64 - x * x / 2.0 * c1 - x * c2;

        Some(Self { c1, c2, c3 })
    }

    /// Returns the second-derivative coefficient `c1`.
    #[inline]
    pub fn c1(&self) -> f64 {
        self.c1
    }

    /// Returns the linear coefficient `c2`.
    #[inline]
    pub fn c2(&self) -> f64 {
        self.c2
    }

    /// Returns the constant coefficient `c3`.
    #[inline]
    pub fn c3(&self) -> f64 {
        self.c3
    }

    /// Whether the parabola opens upwards.
    #[inline]
    pub fn is_concave_up(&self) -> bool {
        self.c1 > 0.0
    }

    /// Evaluate the model at `x`.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.c1 / 2.0 * x * x + self.c2 * x + self.c3
    }

    /// Real solutions of `model(x) = y`, as `(x1, x2)` with `x1` taking the
    /// `+sqrt` branch.
    ///
    /// Returns `None` for a negative (or non-finite) discriminant and for
    /// `c1 == 0`, where the model degenerates to a line.
    pub fn roots(&self, y: f64) -> Option<(f64, f64)> {
        if self.c1 == 0.0 {
            return None;
        }

        let discriminant = self.c2 * self.c2 - 2.0 * self.c1 * (self.c3 - y);
        if !discriminant.is_finite() || discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        Some((
            (-self.c2 + root) / self.c1,
            (-self.c2 - root) / self.c1,
        ))
    }

    /// Invert the model for `y` and pick an index strictly inside `(lo, hi)`.
    ///
    /// Roots are rounded to the nearest index and discarded if they fall on or
    /// outside the bracket. With two survivors, a concave-up model keeps the
    /// larger and a concave-down model the smaller: the data is
    /// non-decreasing, so only that branch of the inverted parabola is rising
    /// through the bracket.
    pub fn select_root(&self, y: f64, lo: usize, hi: usize) -> Option<usize> {
        let (x1, x2) = self.roots(y)?;

        let inside = |x: f64| nearest_index(x).filter(|&i| i > lo && i < hi);
        match (inside(x1), inside(x2)) {
            (None, None) => None,
            (Some(i), None) | (None, Some(i)) => Some(i),
            (Some(a), Some(b)) => {
                if self.is_concave_up() {
                    Some(a.max(b))
                } else {
                    Some(a.min(b))
                }
            }
        }
    }
}
