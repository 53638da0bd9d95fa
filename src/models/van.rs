//! Van type with capacity and fuel cost.

use serde::{Deserialize, Serialize};

use super::{Fuel, Weight};

/// A delivery van with a load capacity and a fuel cost per unit distance.
///
/// # Examples
///
/// ```
/// use van_routing::models::Van;
///
/// let van = Van::new(10.0, 8.0);
/// assert_eq!(van.capacity(), 10.0);
/// assert_eq!(van.fuel_per_unit(), 8.0);
/// assert!(van.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Van {
    capacity: Weight,
    fuel_per_unit: Fuel,
}

impl Van {
    /// Creates a van with the given capacity and fuel cost per unit distance.
    ///
    /// No validation happens here; candidate vans pass through
    /// [`filter_valid_input`](crate::filter::filter_valid_input) before any
    /// planning uses them.
    pub fn new(capacity: Weight, fuel_per_unit: Fuel) -> Self {
        Self {
            capacity,
            fuel_per_unit,
        }
    }

    /// Maximum load this van can carry at once.
    pub fn capacity(&self) -> Weight {
        self.capacity
    }

    /// Fuel consumed per unit of distance traveled.
    pub fn fuel_per_unit(&self) -> Fuel {
        self.fuel_per_unit
    }

    /// Returns `true` if both capacity and fuel rate are positive.
    ///
    /// NaN fails the positivity comparison, so NaN-valued vans are invalid.
    pub fn is_valid(&self) -> bool {
        self.capacity > 0.0 && self.fuel_per_unit > 0.0
    }
}
