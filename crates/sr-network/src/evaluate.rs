//! Route evaluation: real travel time and accumulated risk along a path.
//!
//! Regardless of which weighting produced a route, the evaluator reports
//! plain travel time and raw risk so that a fastest and a safest route can
//! be compared on the same scale.  The representative edge for each step is
//! the time-cheapest parallel edge.

use sr_core::EdgeId;

use crate::network::RoadNetwork;
use crate::router::Route;
use crate::weight::{Weighting, risk_score, time_cost};
use crate::{NetworkError, NetworkResult};

/// Totals accumulated along a route.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteMetrics {
    /// Seconds.
    pub total_time: f64,
    /// Sum of per-edge risk scores, unitless.
    pub total_risk: f64,
}

/// Representative edge for every step of `route`, in traversal order.
///
/// A step with no connecting edge is an [`NetworkError::InvariantViolation`].
pub fn route_edges(route: &Route, network: &RoadNetwork) -> NetworkResult<Vec<EdgeId>> {
    route
        .steps()
        .map(|(from, to)| {
            network
                .best_edge(from, to, Weighting::Time)
                .ok_or(NetworkError::InvariantViolation { from, to })
        })
        .collect()
}

/// Sum `time_cost` and risk over the route's edges.
pub fn evaluate(route: &Route, network: &RoadNetwork) -> NetworkResult<RouteMetrics> {
    let mut metrics = RouteMetrics::default();
    for edge in route_edges(route, network)? {
        let attrs = network.edge(edge);
        metrics.total_time += time_cost(attrs);
        metrics.total_risk += risk_score(attrs);
    }
    Ok(metrics)
}
