//! Route types: actions, stops, and the stop sequence for one van.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Location, PackageId, Weight};

/// What a van does at a stop.
///
/// `Display` renders the lowercase action names used in warning messages
/// and serialized routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Leave the depot.
    Start,
    /// Pick a package up.
    Pick,
    /// Drop a package off.
    Drop,
    /// Return to the depot.
    End,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Start => "start",
            Action::Pick => "pick",
            Action::Drop => "drop",
            Action::End => "end",
        };
        f.write_str(name)
    }
}

/// A single stop in a route.
///
/// Start and end stops sit at the depot with zero weight and no package id;
/// pick and drop stops carry the weight moved and the id of the package
/// within the planning batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Line coordinate of this stop.
    pub location: Location,
    /// Action performed here.
    pub action: Action,
    /// Weight picked up or dropped off; zero for start and end stops.
    pub weight: Weight,
    /// Batch id of the package involved, if any.
    pub package: Option<PackageId>,
}

/// An ordered sequence of stops driven by one van.
///
/// A route that ran to completion starts with a `(0, start)` stop and ends
/// with a `(0, end)` stop. A route abandoned mid-build (no feasible move
/// left) keeps only the stops made up to that point.
///
/// # Examples
///
/// ```
/// use van_routing::models::{Action, Route, Stop};
///
/// let mut route = Route::new();
/// route.push(Stop {
///     location: 0,
///     action: Action::Start,
///     weight: 0.0,
///     package: None,
/// });
/// assert_eq!(route.len(), 1);
/// assert_eq!(route.stops()[0].action, Action::Start);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Route {
    stops: Vec<Stop>,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self { stops: Vec::new() }
    }

    /// Appends a stop to the end of this route.
    pub fn push(&mut self, stop: Stop) {
        self.stops.push(stop);
    }

    /// Returns the stops in driving order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Number of stops, including depot start and end.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if this route has no stops at all.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Returns the `(location, action)` pairs in driving order.
    ///
    /// Handy for comparing route shapes without weights or package ids.
    pub fn shape(&self) -> Vec<(Location, Action)> {
        self.stops.iter().map(|s| (s.location, s.action)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Start.to_string(), "start");
        assert_eq!(Action::Pick.to_string(), "pick");
        assert_eq!(Action::Drop.to_string(), "drop");
        assert_eq!(Action::End.to_string(), "end");
    }

    #[test]
    fn test_route_empty() {
        let r = Route::new();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert!(r.shape().is_empty());
    }

    #[test]
    fn test_route_push() {
        let mut r = Route::new();
        r.push(Stop {
            location: 0,
            action: Action::Start,
            weight: 0.0,
            package: None,
        });
        r.push(Stop {
            location: -1,
            action: Action::Pick,
            weight: 4.0,
            package: Some(0),
        });
        assert_eq!(r.len(), 2);
        assert_eq!(r.shape(), vec![(0, Action::Start), (-1, Action::Pick)]);
        assert_eq!(r.stops()[1].package, Some(0));
    }

    #[test]
    fn test_route_default() {
        assert!(Route::default().is_empty());
    }
}
