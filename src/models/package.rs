//! Package type: one pickup/delivery request.

use serde::{Deserialize, Serialize};

use super::{Location, Weight};

/// A package to move from a pickup location to a delivery location.
///
/// Locations are integer coordinates on the line; the depot sits at 0.
///
/// # Examples
///
/// ```
/// use van_routing::models::Package;
///
/// let p = Package::new(-1, 5, 4.0);
/// assert_eq!(p.pickup(), -1);
/// assert_eq!(p.delivery(), 5);
/// assert_eq!(p.weight(), 4.0);
/// assert!(p.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pickup: Location,
    delivery: Location,
    weight: Weight,
}

impl Package {
    /// Creates a package request.
    ///
    /// No validation happens here; candidate packages pass through
    /// [`filter_valid_input`](crate::filter::filter_valid_input), which
    /// rejects (and warns about) invalid ones.
    pub fn new(pickup: Location, delivery: Location, weight: Weight) -> Self {
        Self {
            pickup,
            delivery,
            weight,
        }
    }

    /// Pickup location.
    pub fn pickup(&self) -> Location {
        self.pickup
    }

    /// Delivery location.
    pub fn delivery(&self) -> Location {
        self.delivery
    }

    /// Package weight.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns `true` if the weight is positive and the pickup and delivery
    /// locations differ.
    pub fn is_valid(&self) -> bool {
        self.weight > 0.0 && self.pickup != self.delivery
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_new() {
        let p = Package::new(6, 2, 9.0);
        assert_eq!(p.pickup(), 6);
        assert_eq!(p.delivery(), 2);
        assert_eq!(p.weight(), 9.0);
    }

    #[test]
    fn test_package_valid() {
        assert!(Package::new(-1, 5, 4.0).is_valid());
        assert!(Package::new(5, -1, 0.001).is_valid());
    }

    #[test]
    fn test_package_nonpositive_weight() {
        assert!(!Package::new(-1, 5, 0.0).is_valid());
        assert!(!Package::new(-1, 5, -4.0).is_valid());
        assert!(!Package::new(-1, 5, f64::NAN).is_valid());
    }

    #[test]
    fn test_package_same_endpoints() {
        assert!(!Package::new(3, 3, 4.0).is_valid());
        assert!(!Package::new(0, 0, 1.0).is_valid());
    }
}
