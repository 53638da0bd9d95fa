//! Greedy route construction for a single van.
//!
//! # Algorithm
//!
//! One attempt pairs a van with a batch of packages. Construction first
//! windows the batch down to the `window_size` packages nearest the depot,
//! then repeatedly applies the nearest valid move: among pending pickups
//! that fit the remaining capacity and pending deliveries for packages on
//! board, drive to the closest, preferring a pickup when the distances tie.
//! When nothing is pending or the event cap is reached the van returns to
//! the depot. If at some step no pickup fits and nothing is on board, the
//! attempt gives up where it stands: the partial route is final and
//! everything still pending is reported as not completed.
//!
//! # Complexity
//!
//! O(w²) for one attempt, with w = window size (each of at most 2w moves
//! rescans the pending lists).

use crate::config::RouterConfig;
use crate::distance::distance;
use crate::models::{
    Action, Distance, Fuel, Location, Package, PackageId, Route, Stop, Van, Weight,
};

/// Selects the `limit` packages nearest the depot from a batch.
///
/// Returns `(selected, excluded)` as batch ids: `selected` in ascending
/// pickup distance from the depot (stable, so equal distances keep batch
/// order) and `excluded` in batch order. The selected ids seed an
/// attempt's pending pickups; the excluded ids are recorded as not
/// completed right away, regardless of whether another van could serve
/// them later.
///
/// # Examples
///
/// ```
/// use van_routing::models::Package;
/// use van_routing::router::nearest_window;
///
/// let batch = vec![
///     Package::new(7, 1, 1.0),
///     Package::new(-1, 5, 4.0),
///     Package::new(3, 9, 2.0),
/// ];
/// let (selected, excluded) = nearest_window(&batch, 2);
/// assert_eq!(selected, vec![1, 2]);
/// assert_eq!(excluded, vec![0]);
/// ```
pub fn nearest_window(batch: &[Package], limit: usize) -> (Vec<PackageId>, Vec<PackageId>) {
    let mut ids: Vec<PackageId> = (0..batch.len()).collect();
    ids.sort_by_key(|&id| distance(0, batch[id].pickup()));
    if ids.len() <= limit {
        return (ids, Vec::new());
    }
    let mut excluded = ids.split_off(limit);
    excluded.sort_unstable();
    (ids, excluded)
}

/// A pending pickup or delivery for one windowed package.
#[derive(Debug, Clone, Copy)]
struct Pending {
    id: PackageId,
    location: Location,
    weight: Weight,
}

/// The move chosen for one construction step, by pending-list index.
#[derive(Debug, Clone, Copy)]
enum NextMove {
    Pick(usize),
    Drop(usize),
}

/// Outcome of one route-construction attempt.
#[derive(Debug, Clone)]
pub struct RouteOutcome {
    /// Total distance driven, saturating at `u64::MAX`.
    pub total_distance: Distance,
    /// Total fuel consumed.
    pub total_fuel: Fuel,
    /// The constructed route (partial if the attempt gave up).
    pub route: Route,
    /// Number of completed pickups.
    pub picked_up: usize,
    /// Number of completed deliveries.
    pub delivered: usize,
    /// Batch ids of packages this attempt did not serve.
    pub not_completed: Vec<PackageId>,
}

/// Greedy route builder for one (van, batch) attempt.
///
/// A router is created fresh per attempt and consumed by
/// [`construct_route`](VanRouter::construct_route), so attempt state can
/// never be reused or shared between vans.
///
/// # Examples
///
/// ```
/// use van_routing::config::RouterConfig;
/// use van_routing::models::{Package, Van};
/// use van_routing::router::VanRouter;
///
/// let batch = vec![Package::new(-1, 5, 4.0)];
/// let router = VanRouter::new(Van::new(9.0, 8.0), &batch, &RouterConfig::default());
/// let outcome = router.construct_route();
/// assert_eq!(outcome.picked_up, 1);
/// assert_eq!(outcome.delivered, 1);
/// // depot -> -1 -> 5 -> depot
/// assert_eq!(outcome.total_distance, 12);
/// ```
pub struct VanRouter<'a> {
    van: Van,
    batch: &'a [Package],
    max_events: usize,
    route: Route,
    current_location: Location,
    total_distance: Distance,
    total_fuel: Fuel,
    current_load: Weight,
    picked_up: usize,
    delivered: usize,
    pickups: Vec<Pending>,
    deliveries: Vec<Pending>,
    not_completed: Vec<PackageId>,
}

impl<'a> VanRouter<'a> {
    /// Creates a router for one attempt, windowing the batch immediately.
    pub fn new(van: Van, batch: &'a [Package], config: &RouterConfig) -> Self {
        let (selected, excluded) = nearest_window(batch, config.window_size());
        let pickups = selected
            .into_iter()
            .map(|id| Pending {
                id,
                location: batch[id].pickup(),
                weight: batch[id].weight(),
            })
            .collect();

        let mut route = Route::new();
        route.push(Stop {
            location: 0,
            action: Action::Start,
            weight: 0.0,
            package: None,
        });

        Self {
            van,
            batch,
            max_events: config.max_events(),
            route,
            current_location: 0,
            total_distance: 0,
            total_fuel: 0.0,
            current_load: 0.0,
            picked_up: 0,
            delivered: 0,
            pickups,
            deliveries: Vec::new(),
            not_completed: excluded,
        }
    }

    /// Runs the greedy construction to completion.
    pub fn construct_route(mut self) -> RouteOutcome {
        while (!self.pickups.is_empty() || !self.deliveries.is_empty())
            && self.picked_up + self.delivered < self.max_events
        {
            let Some(next) = self.nearest_valid_move() else {
                // Stuck: no pending pickup fits and nothing is on board.
                // The partial route stands; no depot return.
                self.drain_pending();
                return self.finish();
            };
            match next {
                NextMove::Pick(idx) => self.apply_pickup(idx),
                NextMove::Drop(idx) => self.apply_delivery(idx),
            }
        }

        self.return_to_depot();
        self.drain_pending();
        self.finish()
    }

    /// Chooses the nearest feasible move from the current location.
    ///
    /// A pickup wins when its distance is less than or equal to the
    /// nearest delivery's distance, or when no delivery is pending.
    fn nearest_valid_move(&self) -> Option<NextMove> {
        let nearest_pickup = self.nearest_pending(&self.pickups, true);
        let nearest_delivery = self.nearest_pending(&self.deliveries, false);

        match (nearest_pickup, nearest_delivery) {
            (Some((idx, pick_d)), Some((_, drop_d))) if pick_d <= drop_d => {
                Some(NextMove::Pick(idx))
            }
            (Some((idx, _)), None) => Some(NextMove::Pick(idx)),
            (_, Some((idx, _))) => Some(NextMove::Drop(idx)),
            (None, None) => None,
        }
    }

    /// Index and distance of the nearest entry, scanning in list order.
    ///
    /// Equal distances keep the earliest entry. The capacity gate applies
    /// to pickups only.
    fn nearest_pending(&self, list: &[Pending], check_capacity: bool) -> Option<(usize, Distance)> {
        let mut best: Option<(usize, Distance)> = None;
        for (idx, entry) in list.iter().enumerate() {
            if check_capacity && self.current_load + entry.weight > self.van.capacity() {
                continue;
            }
            let d = distance(self.current_location, entry.location);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((idx, d));
            }
        }
        best
    }

    fn apply_pickup(&mut self, idx: usize) {
        let entry = self.pickups.remove(idx);
        self.travel_to(entry.location);
        self.route.push(Stop {
            location: entry.location,
            action: Action::Pick,
            weight: entry.weight,
            package: Some(entry.id),
        });
        self.current_load += entry.weight;
        self.deliveries.push(Pending {
            id: entry.id,
            location: self.batch[entry.id].delivery(),
            weight: entry.weight,
        });
        self.picked_up += 1;
    }

    fn apply_delivery(&mut self, idx: usize) {
        let entry = self.deliveries.remove(idx);
        self.travel_to(entry.location);
        self.route.push(Stop {
            location: entry.location,
            action: Action::Drop,
            weight: entry.weight,
            package: Some(entry.id),
        });
        self.current_load -= entry.weight;
        self.delivered += 1;
    }

    /// Adds the travelled distance and its fuel cost, then moves there.
    ///
    /// A single leg can measure up to `u64::MAX`, so the distance total
    /// saturates instead of wrapping; fuel keeps accumulating in `f64`.
    fn travel_to(&mut self, location: Location) {
        let d = distance(self.current_location, location);
        self.total_distance = self.total_distance.saturating_add(d);
        self.total_fuel += d as f64 * self.van.fuel_per_unit();
        self.current_location = location;
    }

    fn return_to_depot(&mut self) {
        self.travel_to(0);
        self.route.push(Stop {
            location: 0,
            action: Action::End,
            weight: 0.0,
            package: None,
        });
    }

    /// Moves everything still pending into not-completed, pickups first.
    fn drain_pending(&mut self) {
        self.not_completed.extend(self.pickups.drain(..).map(|p| p.id));
        self.not_completed.extend(self.deliveries.drain(..).map(|d| d.id));
    }

    fn finish(self) -> RouteOutcome {
        RouteOutcome {
            total_distance: self.total_distance,
            total_fuel: self.total_fuel,
            route: self.route,
            picked_up: self.picked_up,
            delivered: self.delivered,
            not_completed: self.not_completed,
        }
    }
}
