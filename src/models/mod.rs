//! Domain model types for van routing.
//!
//! Provides the core abstractions: vans with capacity and fuel cost,
//! packages as pickup/delivery requests on the location line, routes as
//! ordered stop sequences, and the plan types returned by the optimizers.

mod package;
mod plan;
mod route;
mod van;

pub use package::Package;
pub use plan::{FleetPlan, RoutePlan};
pub use route::{Action, Route, Stop};
pub use van::Van;

/// Integer coordinate on the one-dimensional location line (depot = 0).
pub type Location = i64;
/// Package weight, van load, or van capacity.
pub type Weight = f64;
/// Fuel quantity.
pub type Fuel = f64;
/// Travel distance along the line.
pub type Distance = u64;
/// Position of a package within one planning batch.
pub type PackageId = usize;
