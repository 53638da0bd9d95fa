//! Distance metric on the one-dimensional location line.

use crate::models::{Distance, Location};

/// Absolute distance between two line coordinates.
///
/// Defined for every coordinate pair: `abs_diff` widens to `u64`, so the
/// subtraction cannot overflow.
///
/// # Examples
///
/// ```
/// use van_routing::distance::distance;
///
/// assert_eq!(distance(0, 5), 5);
/// assert_eq!(distance(5, 0), 5);
/// assert_eq!(distance(-2, 9), 11);
/// assert_eq!(distance(7, 7), 0);
/// ```
pub fn distance(a: Location, b: Location) -> Distance {
    a.abs_diff(b)
}
