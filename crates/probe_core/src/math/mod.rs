//! Numeric models used to turn a key into an index guess.
//!
//! ## Available Models
//!
//! - [`Line`]: Line through two points; the endpoint fit of line-fit search
//!   and the tangent estimates of gradient search
//! - [`QuadraticModel`]: Constant-second-derivative model fitted from the two
//!   end tangents of a bracket, inverted with the quadratic formula
//!
//! ## Numeric Type
//!
//! Guess computation is done in `f64` throughout. [`Line`] is generic over
//! `T: num_traits::Float` so it can also be exercised in `f32` when comparing
//! rounding behaviour near bracket edges.
//!
//! ## Example
//!
//! ```
//! use probe_core::math::{nearest_index, Line};
//!
//! let line = Line::through((0.0, 0.0), (5.0, 50.0)).unwrap();
//! let x = line.invert(30.0).unwrap();
//! assert_eq!(nearest_index(x), Some(3));
//! ```

mod line;
mod quadratic;

pub use line::Line;
pub use quadratic::{QuadraticModel, TANGENT_DIVISOR};

use num_traits::Float;

/// Round a fitted position to the nearest index (halves round up).
///
/// Returns `None` for negative, non-finite or unrepresentable positions.
///
/// # Example
///
/// ```
/// use probe_core::math::nearest_index;
///
/// assert_eq!(nearest_index(2.49_f64), Some(2));
/// assert_eq!(nearest_index(2.5_f64), Some(3));
/// assert_eq!(nearest_index(-0.4_f64), Some(0));
/// assert_eq!(nearest_index(-3.0_f64), None);
/// assert_eq!(nearest_index(f64::NAN), None);
/// ```
#[inline]
pub fn nearest_index<T: Float>(x: T) -> Option<usize> {
    let half = T::from(0.5)?;
    (x + half).floor().to_usize()
}
