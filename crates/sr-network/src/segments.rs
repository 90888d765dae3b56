//! High-risk segment extraction for map overlays.

use crate::evaluate::route_edges;
use crate::network::RoadNetwork;
use crate::router::Route;
use crate::weight::risk_score;
use crate::{NetworkError, NetworkResult};

/// Risk above which an edge is flagged.
pub const DEFAULT_RISK_THRESHOLD: f64 = 2.0;

/// A flagged edge, placed at its origin node.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskPoint {
    pub lat: f64,
    pub lon: f64,
    pub risk: f64,
}

/// One [`RiskPoint`] per traversed edge whose risk is strictly above
/// `threshold`, in traversal order.  Revisited edges repeat.
pub fn extract_risk_points(
    route: &Route,
    network: &RoadNetwork,
    threshold: f64,
) -> NetworkResult<Vec<RiskPoint>> {
    let mut points = Vec::new();
    for edge in route_edges(route, network)? {
        let risk = risk_score(network.edge(edge));
        if risk > threshold {
            let (from, _) = network.edge_endpoints(edge);
            let pos = network
                .node_coordinates(from)
                .ok_or(NetworkError::NodeNotFound(from))?;
            points.push(RiskPoint { lat: pos.lat, lon: pos.lon, risk });
        }
    }
    Ok(points)
}
