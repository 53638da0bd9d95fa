//! Optimizer entry points: best single van and fleet allocation.
//!
//! [`RoutePlanner`] owns the knobs shared by every planning call: the
//! construction bounds in [`RouterConfig`] and the warning sink that
//! receives filter rejections and unserved-package reports. The planner
//! holds no state across calls; each call filters its input, runs
//! one-shot construction attempts, and returns a plan.

use std::ops::Deref;

use crate::config::RouterConfig;
use crate::filter::filter_valid_input;
use crate::models::{Action, Distance, Fuel, FleetPlan, Package, Route, RoutePlan, Stop, Van};
use crate::router::{RouteOutcome, VanRouter};
use crate::warnings::{stderr_sink, Warning, WarningSink};

/// Plans routes for a single van or a small fleet over a package batch.
///
/// By default warnings go to stderr; tests and embedding applications
/// usually swap in a collecting sink.
///
/// # Examples
///
/// ```
/// use van_routing::config::RouterConfig;
/// use van_routing::planner::RoutePlanner;
/// use van_routing::warnings::null_sink;
///
/// let planner = RoutePlanner::new()
///     .with_config(RouterConfig::default().with_window_size(8))
///     .with_warning_sink(null_sink());
/// assert_eq!(planner.config().window_size(), 8);
/// ```
#[derive(Clone)]
pub struct RoutePlanner {
    config: RouterConfig,
    sink: WarningSink,
}

impl RoutePlanner {
    /// Creates a planner with default bounds, warning to stderr.
    pub fn new() -> Self {
        Self {
            config: RouterConfig::default(),
            sink: stderr_sink(),
        }
    }

    /// Sets the construction bounds.
    pub fn with_config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the sink that receives this planner's warnings.
    pub fn with_warning_sink(mut self, sink: WarningSink) -> Self {
        self.sink = sink;
        self
    }

    /// The construction bounds in effect.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Picks the van that serves the batch on the least fuel.
    ///
    /// Input is filtered first; every valid van gets one construction
    /// attempt over the same batch and the lowest-fuel attempt that
    /// picked at least one package up wins, earlier vans winning ties.
    /// When the winner leaves packages unserved they are reported
    /// through the warning sink and returned in the plan. When no van
    /// picks anything up the plan carries no van, an empty route, and
    /// the whole batch as not completed.
    ///
    /// # Examples
    ///
    /// ```
    /// use van_routing::models::{Package, Van};
    /// use van_routing::planner::RoutePlanner;
    ///
    /// let vans = vec![Van::new(10.0, 10.0), Van::new(9.0, 8.0)];
    /// let packages = vec![
    ///     Package::new(-1, 5, 4.0),
    ///     Package::new(6, 2, 9.0),
    ///     Package::new(-2, 9, 3.0),
    /// ];
    /// let plan = RoutePlanner::new().plan_single_van(&vans, &packages);
    /// assert_eq!(plan.van(), Some(Van::new(9.0, 8.0)));
    /// assert_eq!(plan.total_distance(), 22);
    /// assert_eq!(plan.total_fuel(), 176.0);
    /// ```
    pub fn plan_single_van(&self, vans: &[Van], packages: &[Package]) -> RoutePlan {
        let (vans, batch) = filter_valid_input(vans, packages, &self.sink);
        self.plan_filtered(&vans, &batch, true)
    }

    /// Allocates the batch across the most fuel-efficient vans.
    ///
    /// Input is filtered first. Vans are shortlisted by ascending fuel
    /// rate (ties keep input order) down to
    /// [`shortlist_size`](RouterConfig::shortlist_size), then each
    /// shortlisted van in turn plans a route over whatever the previous
    /// vans left unserved. Allocation stops early once the pool is
    /// empty or a van completes no pickup at all; anything still
    /// unserved afterwards is reported through the warning sink and
    /// returned in the plan.
    pub fn plan_multi_van(&self, vans: &[Van], packages: &[Package]) -> FleetPlan {
        let (mut shortlist, batch) = filter_valid_input(vans, packages, &self.sink);
        shortlist.sort_by(|a, b| a.fuel_per_unit().total_cmp(&b.fuel_per_unit()));
        shortlist.truncate(self.config.shortlist_size());

        let mut vans_used = Vec::new();
        let mut routes = Vec::new();
        let mut total_distance: Distance = 0;
        let mut total_fuel: Fuel = 0.0;
        let mut pool = batch;

        for van in shortlist {
            if pool.is_empty() {
                break;
            }
            let plan = self.plan_filtered(std::slice::from_ref(&van), &pool, false);
            let Some(chosen) = plan.van() else {
                // This van picked nothing up; later vans are not tried.
                break;
            };
            vans_used.push(chosen);
            total_distance = total_distance.saturating_add(plan.total_distance());
            total_fuel += plan.total_fuel();
            routes.push(plan.route().clone());
            pool = plan.into_not_completed();
        }

        if !pool.is_empty() {
            self.sink.deref()(&Warning::UnservedAfterFleet {
                packages: pool.clone(),
            });
        }

        FleetPlan::new(vans_used, total_distance, total_fuel, routes, pool)
    }

    /// Single-van optimization over already-filtered input.
    ///
    /// `warn_leftovers` is false for the per-van calls inside fleet
    /// allocation, which report one aggregate warning at the end
    /// instead.
    fn plan_filtered(&self, vans: &[Van], batch: &[Package], warn_leftovers: bool) -> RoutePlan {
        if batch.is_empty() {
            return match vans.first() {
                Some(&van) => RoutePlan::new(Some(van), 0, 0.0, trivial_route(), Vec::new()),
                None => RoutePlan::empty(Vec::new()),
            };
        }

        let mut best: Option<(Van, RouteOutcome)> = None;
        for &van in vans {
            let outcome = VanRouter::new(van, batch, &self.config).construct_route();
            if outcome.picked_up == 0 {
                continue;
            }
            if best
                .as_ref()
                .map_or(true, |(_, b)| outcome.total_fuel < b.total_fuel)
            {
                best = Some((van, outcome));
            }
        }

        let Some((van, outcome)) = best else {
            return RoutePlan::empty(batch.to_vec());
        };

        let not_completed: Vec<Package> = outcome
            .not_completed
            .iter()
            .map(|&id| batch[id])
            .collect();
        if warn_leftovers && !not_completed.is_empty() {
            self.sink.deref()(&Warning::UnservedPackages {
                packages: not_completed.clone(),
            });
        }

        RoutePlan::new(
            Some(van),
            outcome.total_distance,
            outcome.total_fuel,
            outcome.route,
            not_completed,
        )
    }
}

impl Default for RoutePlanner {
    fn default() -> Self {
        Self::new()
    }
}

/// The start-then-end route of a van with nothing to do.
fn trivial_route() -> Route {
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
    route
}
