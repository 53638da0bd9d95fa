//! Heuristic bounds for route construction and fleet allocation.

use serde::{Deserialize, Serialize};

/// Default number of nearest packages considered per attempt.
pub const DEFAULT_WINDOW_SIZE: usize = 5;
/// Default cap on completed pick/drop events per route.
pub const DEFAULT_MAX_EVENTS: usize = 10;
/// Default number of vans shortlisted for fleet allocation.
pub const DEFAULT_SHORTLIST_SIZE: usize = 3;

/// Bounds for one planning run.
///
/// The defaults keep construction small-batch: each van attempt windows
/// the 5 packages nearest the depot, a route performs at most 10
/// pick/drop events, and fleet allocation shortlists the 3 most
/// fuel-efficient vans. The window and event cap are deliberate limits
/// of the heuristic, not derived from van capacity.
///
/// # Examples
///
/// ```
/// use van_routing::config::RouterConfig;
///
/// let config = RouterConfig::default()
///     .with_window_size(8)
///     .with_max_events(16);
/// assert_eq!(config.window_size(), 8);
/// assert_eq!(config.max_events(), 16);
/// assert_eq!(config.shortlist_size(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    window_size: usize,
    max_events: usize,
    shortlist_size: usize,
}

impl RouterConfig {
    /// Number of nearest packages a single attempt considers.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Maximum completed pick/drop events per route.
    pub fn max_events(&self) -> usize {
        self.max_events
    }

    /// Number of vans the fleet allocator shortlists.
    pub fn shortlist_size(&self) -> usize {
        self.shortlist_size
    }

    /// Sets the per-attempt package window size.
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Sets the per-route event cap.
    pub fn with_max_events(mut self, max_events: usize) -> Self {
        self.max_events = max_events;
        self
    }

    /// Sets the fleet shortlist size.
    pub fn with_shortlist_size(mut self, shortlist_size: usize) -> Self {
        self.shortlist_size = shortlist_size;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            max_events: DEFAULT_MAX_EVENTS,
            shortlist_size: DEFAULT_SHORTLIST_SIZE,
        }
    }
}
