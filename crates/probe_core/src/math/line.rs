//! Straight-line fit through two points.

use num_traits::Float;

/// A line `y = slope * x + intercept`.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use probe_core::math::Line;
///
/// let line = Line::through((1.0, 3.0), (3.0, 7.0)).unwrap();
/// assert_eq!(line.slope(), 2.0);
/// assert_eq!(line.intercept(), 1.0);
/// assert_eq!(line.eval(2.0), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<T: Float> {
    slope: T,
    intercept: T,
}

impl<T: Float> Line<T> {
    /// Construct a line from slope and intercept.
    #[inline]
    pub fn new(slope: T, intercept: T) -> Self {
        Self { slope, intercept }
    }

    /// Fit the line through two points.
    ///
    /// Point order does not matter. Returns `None` when both points share the
    /// same x-coordinate (zero run), since no finite slope exists.
    ///
    /// # Example
    ///
    /// ```
    /// use probe_core::math::Line;
    ///
    /// assert!(Line::through((2.0, 1.0), (2.0, 5.0)).is_none());
    ///
    /// let a = Line::through((0.0, 0.0), (4.0, 8.0)).unwrap();
    /// let b = Line::through((4.0, 8.0), (0.0, 0.0)).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn through(a: (T, T), b: (T, T)) -> Option<Self> {
        let (a, b) = if a.0 > b.0 { (b, a) } else { (a, b) };

        let run = b.0 - a.0;
        if run == T::zero() {
            return None;
        }

        let slope = (b.1 - a.1) / run;
        let intercept = a.1 - slope * a.0;
        Some(Self { slope, intercept })
    }

    /// Returns the slope.
    #[inline]
    pub fn slope(&self) -> T {
        self.slope
    }

    /// Returns the y-intercept.
    #[inline]
    pub fn intercept(&self) -> T {
        self.intercept
    }

    /// Evaluate the line at `x`.
    #[inline]
    pub fn eval(&self, x: T) -> T {
        self.slope * x + self.intercept
    }

    /// Solve for the `x` at which the line reaches `y`.
    ///
    /// Returns `None` for a flat line or a non-finite result.
    #[inline]
    pub fn invert(&self, y: T) -> Option<T> {
        if self.slope == T::zero() {
            return None;
        }
        let x = (y - self.intercept) / self.slope;
        x.is_finite().then_some(x)
    }
}
