//! Planner observer trait for progress reporting and diagnostics.

use sr_network::{NetworkError, ResolvedPair, Route};

use crate::compare::RouteComparison;

/// Callbacks invoked by
/// [`RoutePlanner::plan_observed`][crate::RoutePlanner::plan_observed] at key
/// points in the pipeline.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — repair counter
///
/// ```rust,ignore
/// struct RepairCounter(usize);
///
/// impl PlanObserver for RepairCounter {
///     fn on_resolved(&mut self, pair: &ResolvedPair) {
///         if pair.repaired {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait PlanObserver {
    /// Called once both endpoints are snapped to connected nodes.
    fn on_resolved(&mut self, _pair: &ResolvedPair) {}

    /// Called after each successful solve (fastest, then safest).
    fn on_route(&mut self, _route: &Route) {}

    /// Called when the risk-aware solve fails and the safest route falls
    /// back to the fastest.
    fn on_fallback(&mut self, _error: &NetworkError) {}

    /// Called with the finished comparison.
    fn on_plan_end(&mut self, _comparison: &RouteComparison) {}
}

/// A [`PlanObserver`] that does nothing.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}
