//! Planning results for single-van and fleet optimization.

use serde::{Deserialize, Serialize};

use super::{Distance, Fuel, Package, Route, Van};

/// Result of optimizing one package batch over a set of candidate vans.
///
/// When no van completed a pickup, `van()` is `None`, the route is empty,
/// and `not_completed()` holds the entire filtered batch.
///
/// # Examples
///
/// ```
/// use van_routing::models::RoutePlan;
///
/// let plan = RoutePlan::empty(Vec::new());
/// assert!(plan.van().is_none());
/// assert_eq!(plan.total_distance(), 0);
/// assert_eq!(plan.total_fuel(), 0.0);
/// assert!(plan.route().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    van: Option<Van>,
    total_distance: Distance,
    total_fuel: Fuel,
    route: Route,
    not_completed: Vec<Package>,
}

impl RoutePlan {
    /// Creates a plan from a finished attempt.
    pub fn new(
        van: Option<Van>,
        total_distance: Distance,
        total_fuel: Fuel,
        route: Route,
        not_completed: Vec<Package>,
    ) -> Self {
        Self {
            van,
            total_distance,
            total_fuel,
            route,
            not_completed,
        }
    }

    /// Creates the degenerate plan: no van, zero cost, empty route.
    pub fn empty(not_completed: Vec<Package>) -> Self {
        Self::new(None, 0, 0.0, Route::new(), not_completed)
    }

    /// The van chosen for the route, if any attempt succeeded.
    pub fn van(&self) -> Option<Van> {
        self.van
    }

    /// Total distance driven.
    pub fn total_distance(&self) -> Distance {
        self.total_distance
    }

    /// Total fuel consumed.
    pub fn total_fuel(&self) -> Fuel {
        self.total_fuel
    }

    /// The constructed route.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Packages this plan could not serve, available for reassignment.
    pub fn not_completed(&self) -> &[Package] {
        &self.not_completed
    }

    /// Consumes the plan, returning the unserved packages.
    pub fn into_not_completed(self) -> Vec<Package> {
        self.not_completed
    }
}

/// Result of allocating a package pool across a shortlist of vans.
///
/// Routes are listed in allocation order; `vans_used()` and `routes()`
/// always have equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetPlan {
    vans_used: Vec<Van>,
    total_distance: Distance,
    total_fuel: Fuel,
    routes: Vec<Route>,
    not_completed: Vec<Package>,
}

impl FleetPlan {
    /// Creates a fleet plan from accumulated allocation results.
    pub fn new(
        vans_used: Vec<Van>,
        total_distance: Distance,
        total_fuel: Fuel,
        routes: Vec<Route>,
        not_completed: Vec<Package>,
    ) -> Self {
        Self {
            vans_used,
            total_distance,
            total_fuel,
            routes,
            not_completed,
        }
    }

    /// Vans that received a route, in allocation order.
    pub fn vans_used(&self) -> &[Van] {
        &self.vans_used
    }

    /// Total distance driven across all routes.
    pub fn total_distance(&self) -> Distance {
        self.total_distance
    }

    /// Total fuel consumed across all routes.
    pub fn total_fuel(&self) -> Fuel {
        self.total_fuel
    }

    /// One route per van used, in allocation order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Packages no shortlisted van could serve.
    pub fn not_completed(&self) -> &[Package] {
        &self.not_completed
    }

    /// Number of vans that received a route.
    pub fn num_vans_used(&self) -> usize {
        self.vans_used.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Action, Stop};

    #[test]
    fn test_route_plan_empty() {
        let leftovers = vec![Package::new(-1, 5, 4.0)];
        let plan = RoutePlan::empty(leftovers.clone());
        assert!(plan.van().is_none());
        assert_eq!(plan.total_distance(), 0);
        assert_eq!(plan.total_fuel(), 0.0);
        assert!(plan.route().is_empty());
        assert_eq!(plan.not_completed(), leftovers.as_slice());
        assert_eq!(plan.into_not_completed(), leftovers);
    }

    #[test]
    fn test_route_plan_accessors() {
        let mut route = Route::new();
        route.push(Stop {
            location: 0,
            action: Action::Start,
            weight: 0.0,
            package: None,
        });
        route.push(Stop {
            location: 0,
            action: Action::End,
            weight: 0.0,
            package: None,
        });
        let van = Van::new(9.0, 8.0);
        let plan = RoutePlan::new(Some(van), 22, 176.0, route.clone(), Vec::new());
        assert_eq!(plan.van(), Some(van));
        assert_eq!(plan.total_distance(), 22);
        assert_eq!(plan.total_fuel(), 176.0);
        assert_eq!(plan.route(), &route);
        assert!(plan.not_completed().is_empty());
    }

    #[test]
    fn test_fleet_plan_accessors() {
        let van = Van::new(10.0, 10.0);
        let plan = FleetPlan::new(vec![van], 6, 60.0, vec![Route::new()], Vec::new());
        assert_eq!(plan.vans_used(), &[van]);
        assert_eq!(plan.num_vans_used(), 1);
        assert_eq!(plan.routes().len(), 1);
        assert_eq!(plan.total_distance(), 6);
        assert_eq!(plan.total_fuel(), 60.0);
        assert!(plan.not_completed().is_empty());
    }
}
