//! Warning side-channel for filtering and planning diagnostics.
//!
//! Nothing in this crate fails with an error: malformed input is filtered
//! out, and packages no van can serve come back as data. Everything the
//! caller should additionally know about flows through an injectable
//! [`WarningSink`] instead of a process-wide logger, so tests and
//! embedders can collect warnings rather than configure global state.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::models::Package;

/// A diagnostic raised while filtering input or planning routes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Warning {
    /// A candidate package was rejected by the input filter.
    InvalidPackage {
        /// The rejected package as supplied.
        package: Package,
    },
    /// The winning single-van attempt left packages unserved.
    UnservedPackages {
        /// Packages the chosen van could not serve.
        packages: Vec<Package>,
    },
    /// Fleet allocation exhausted its shortlist with packages unserved.
    UnservedAfterFleet {
        /// Packages no shortlisted van served.
        packages: Vec<Package>,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::InvalidPackage { package } => {
                write!(f, "invalid package: {}", fmt_package(package))
            }
            Warning::UnservedPackages { packages } => {
                write!(
                    f,
                    "not completed pickups/deliveries for single van: {}",
                    fmt_packages(packages)
                )
            }
            Warning::UnservedAfterFleet { packages } => {
                write!(
                    f,
                    "not completed pickups/deliveries for multiple vans: {}",
                    fmt_packages(packages)
                )
            }
        }
    }
}

fn fmt_package(p: &Package) -> String {
    format!("({}, {}, {})", p.pickup(), p.delivery(), p.weight())
}

fn fmt_packages(packages: &[Package]) -> String {
    let items: Vec<String> = packages.iter().map(fmt_package).collect();
    format!("[{}]", items.join(", "))
}

/// Receives warnings during filtering and planning.
pub type WarningSink = Arc<dyn Fn(&Warning) + Send + Sync>;

/// A sink that writes each warning to standard error.
pub fn stderr_sink() -> WarningSink {
    Arc::new(|warning| eprintln!("warning: {warning}"))
}

/// A sink that discards every warning.
pub fn null_sink() -> WarningSink {
    Arc::new(|_| {})
}

/// Collects warnings into a list for later inspection.
///
/// Clones share the same underlying list, so a collector can be kept
/// while its [`sink`](WarningCollector::sink) is handed to a planner.
///
/// # Examples
///
/// ```
/// use van_routing::models::{Package, Van};
/// use van_routing::planner::RoutePlanner;
/// use van_routing::warnings::{Warning, WarningCollector};
///
/// let collector = WarningCollector::new();
/// let planner = RoutePlanner::new().with_warning_sink(collector.sink());
///
/// let bad = Package::new(3, 3, 1.0);
/// planner.plan_single_van(&[Van::new(10.0, 1.0)], &[bad]);
/// assert_eq!(
///     collector.warnings(),
///     vec![Warning::InvalidPackage { package: bad }]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct WarningCollector {
    collected: Arc<Mutex<Vec<Warning>>>,
}

impl WarningCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a sink that appends to this collector.
    pub fn sink(&self) -> WarningSink {
        let collected = Arc::clone(&self.collected);
        Arc::new(move |warning| {
            collected
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(warning.clone());
        })
    }

    /// All warnings collected so far, in emission order.
    pub fn warnings(&self) -> Vec<Warning> {
        self.collected
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns `true` if nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.collected
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::ops::Deref;

    use super::*;

    #[test]
    fn test_invalid_package_message() {
        let w = Warning::InvalidPackage {
            package: Package::new(-1, 5, 0.0),
        };
        assert_eq!(w.to_string(), "invalid package: (-1, 5, 0)");
    }

    #[test]
    fn test_unserved_message() {
        let w = Warning::UnservedPackages {
            packages: vec![Package::new(6, 2, 9.0), Package::new(-2, 9, 3.0)],
        };
        assert_eq!(
            w.to_string(),
            "not completed pickups/deliveries for single van: [(6, 2, 9), (-2, 9, 3)]"
        );
    }

    #[test]
    fn test_fleet_message_empty_list() {
        let w = Warning::UnservedAfterFleet { packages: vec![] };
        assert_eq!(
            w.to_string(),
            "not completed pickups/deliveries for multiple vans: []"
        );
    }

    #[test]
    fn test_collector_collects() {
        let collector = WarningCollector::new();
        assert!(collector.is_empty());

        let sink = collector.sink();
        sink.deref()(&Warning::InvalidPackage {
            package: Package::new(1, 1, 2.0),
        });
        sink.deref()(&Warning::UnservedPackages { packages: vec![] });

        let warnings = collector.warnings();
        assert_eq!(warnings.len(), 2);
        assert!(matches!(warnings[0], Warning::InvalidPackage { .. }));
        assert!(matches!(warnings[1], Warning::UnservedPackages { .. }));
    }

    #[test]
    fn test_collector_clone_shares_list() {
        let collector = WarningCollector::new();
        let other = collector.clone();
        let sink = other.sink();
        sink.deref()(&Warning::UnservedAfterFleet { packages: vec![] });
        assert_eq!(collector.warnings().len(), 1);
    }

    #[test]
    fn test_null_sink_discards() {
        let sink = null_sink();
        sink.deref()(&Warning::UnservedPackages { packages: vec![] });
    }
}
