//! Render-ready route data for a map front-end.
//!
//! Nothing here draws anything; a [`MapOverlay`] carries exactly what a
//! renderer needs (polylines, markers, popups) and serialises to JSON with
//! the `serde` feature.

use sr_core::{GeoPoint, NodeId};
use sr_network::{NetworkError, RiskPoint, RoadNetwork};

use crate::compare::{EvaluatedRoute, RouteComparison};
use crate::error::{PlannerError, PlannerResult};

/// One route as a polyline plus its risk markers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteLayer {
    pub label: String,
    pub coordinates: Vec<GeoPoint>,
    pub risk_points: Vec<RiskPoint>,
    pub total_time_secs: f64,
    pub total_risk: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapOverlay {
    pub start: GeoPoint,
    pub end: GeoPoint,
    /// Suggested initial map centre: midway between start and end.
    pub center: GeoPoint,
    pub fastest: RouteLayer,
    pub safest: RouteLayer,
    pub time_difference: f64,
    pub risk_reduction: f64,
    pub degraded: bool,
}

impl RouteComparison {
    /// Build the overlay for this comparison.  `start` and `end` are the
    /// user's requested points, not the snapped nodes.
    pub fn overlay(
        &self,
        network: &RoadNetwork,
        start: GeoPoint,
        end: GeoPoint,
    ) -> PlannerResult<MapOverlay> {
        Ok(MapOverlay {
            start,
            end,
            center: start.midpoint(end),
            fastest: layer("Fastest", &self.fastest, network)?,
            safest: layer("Safest", &self.safest, network)?,
            time_difference: self.metrics.time_difference,
            risk_reduction: self.metrics.risk_reduction,
            degraded: self.is_degraded(),
        })
    }
}

fn layer(label: &str, evaluated: &EvaluatedRoute, network: &RoadNetwork) -> PlannerResult<RouteLayer> {
    Ok(RouteLayer {
        label: label.to_owned(),
        coordinates: coordinates(&evaluated.route.nodes, network)?,
        risk_points: evaluated.risk_points.clone(),
        total_time_secs: evaluated.metrics.total_time,
        total_risk: evaluated.metrics.total_risk,
    })
}

fn coordinates(nodes: &[NodeId], network: &RoadNetwork) -> PlannerResult<Vec<GeoPoint>> {
    nodes
        .iter()
        .map(|&n| {
            network
                .node_coordinates(n)
                .ok_or(PlannerError::Network(NetworkError::NodeNotFound(n)))
        })
        .collect()
}
