//! Nearest-node snapping with disconnected-component repair.
//!
//! The raw network can contain islands: nodes that are only reachable
//! through one-way restrictions, or fragments the extraction cut off from
//! the main mesh.  Snapping a point to its nearest node can land on such an
//! island and make an otherwise sensible trip unroutable.
//!
//! [`NodeLocator::resolve_pair`] therefore works in two tiers:
//!
//! ```text
//! 1. snap both points (projected nearest); directed path exists → done
//! 2. largest weakly connected component C
//!      re-snap both points to argmin_{n ∈ C} haversine(point, n)
//!      directed path exists → done (repaired)
//! 3. NoPath
//! ```
//!
//! If several components tie for largest there is no dominant mesh to
//! repair onto and step 2 is skipped.

use sr_core::{GeoPoint, NodeId};

use crate::network::RoadNetwork;
use crate::router::has_path;
use crate::{NetworkError, NetworkResult};

/// Origin and destination nodes for a trip.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedPair {
    pub origin: NodeId,
    pub destination: NodeId,
    /// `true` if the largest-component repair moved the endpoints.
    pub repaired: bool,
}

/// Snapping front-end over a borrowed network.
#[derive(Copy, Clone)]
pub struct NodeLocator<'a> {
    network: &'a RoadNetwork,
}

impl<'a> NodeLocator<'a> {
    pub fn new(network: &'a RoadNetwork) -> Self {
        Self { network }
    }

    /// Node nearest to `point` in projected distance, ties to the lowest id.
    pub fn nearest_node(&self, point: GeoPoint) -> NetworkResult<NodeId> {
        if !point.is_finite() {
            return Err(NetworkError::InvalidPoint(point));
        }
        self.network
            .snap_to_node(point)
            .ok_or(NetworkError::EmptyNetwork)
    }

    /// Snap a trip's endpoints, repairing onto the largest component if the
    /// direct snap is not connected.
    pub fn resolve_pair(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> NetworkResult<ResolvedPair> {
        let o = self.nearest_node(origin)?;
        let d = self.nearest_node(destination)?;

        if has_path(self.network, o, d) {
            return Ok(ResolvedPair { origin: o, destination: d, repaired: false });
        }

        let Some(component) = self.largest_component() else {
            log::debug!("no unique largest component; cannot repair {o} -> {d}");
            return Err(NetworkError::NoPath { from: o, to: d });
        };

        let ro = self.nearest_in(&component, origin).ok_or(NetworkError::EmptyNetwork)?;
        let rd = self.nearest_in(&component, destination).ok_or(NetworkError::EmptyNetwork)?;
        log::debug!(
            "re-snapped {o} -> {d} onto largest component ({} nodes): {ro} -> {rd}",
            component.len()
        );

        if has_path(self.network, ro, rd) {
            Ok(ResolvedPair { origin: ro, destination: rd, repaired: true })
        } else {
            Err(NetworkError::NoPath { from: ro, to: rd })
        }
    }

    /// Weakly connected components (edge direction ignored), each sorted
    /// ascending, ordered by their lowest node id.
    pub fn connected_components(&self) -> Vec<Vec<NodeId>> {
        let net = self.network;
        let n = net.node_count();

        // Undirected adjacency: out-edges plus reversed out-edges.
        let mut undirected: Vec<Vec<NodeId>> = vec![Vec::new(); n];
        for u in net.all_node_ids() {
            for v in net.neighbors_out(u) {
                undirected[u.index()].push(v);
                undirected[v.index()].push(u);
            }
        }

        let mut seen = vec![false; n];
        let mut components = Vec::new();
        for start in net.all_node_ids() {
            if seen[start.index()] {
                continue;
            }
            seen[start.index()] = true;
            let mut members = vec![start];
            let mut stack = vec![start];
            while let Some(u) = stack.pop() {
                for &v in &undirected[u.index()] {
                    if !seen[v.index()] {
                        seen[v.index()] = true;
                        members.push(v);
                        stack.push(v);
                    }
                }
            }
            members.sort_unstable();
            components.push(members);
        }
        components
    }

    /// The unique largest weakly connected component, or `None` if the
    /// network is empty or two or more components share the maximum size.
    pub fn largest_component(&self) -> Option<Vec<NodeId>> {
        let mut components = self.connected_components();
        let max = components.iter().map(Vec::len).max()?;
        if components.iter().filter(|c| c.len() == max).count() > 1 {
            return None;
        }
        let idx = components.iter().position(|c| c.len() == max)?;
        Some(components.swap_remove(idx))
    }

    /// Geodesically nearest member of `candidates` to `point`.  `candidates`
    /// is ascending, so the first minimum is also the lowest id.
    fn nearest_in(&self, candidates: &[NodeId], point: GeoPoint) -> Option<NodeId> {
        let mut best: Option<(NodeId, f64)> = None;
        for &node in candidates {
            let Some(pos) = self.network.node_coordinates(node) else {
                continue;
            };
            let d = point.distance_m(pos);
            match best {
                Some((_, bd)) if bd <= d => {}
                _ => best = Some((node, d)),
            }
        }
        best.map(|(n, _)| n)
    }
}
