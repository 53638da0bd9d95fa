//! # van-routing
//!
//! Greedy nearest-neighbor route planning for a fleet of delivery vans on
//! a one-dimensional line of integer locations. Every route starts and
//! ends at the depot (location 0), picks packages up within the van's
//! capacity, and always drives to the nearest feasible stop next.
//!
//! ## Modules
//!
//! - [`models`]: domain types (Van, Package, Route, planning results)
//! - [`distance`]: line distance between locations
//! - [`config`]: tunable construction bounds
//! - [`filter`]: input validation and filtering
//! - [`router`]: greedy route construction for one van
//! - [`planner`]: single-van and fleet optimization entry points
//! - [`warnings`]: warning values and pluggable sinks

pub mod config;
pub mod distance;
pub mod filter;
pub mod models;
pub mod planner;
pub mod router;
pub mod warnings;
