//! Road network representation and builder.
//!
//! # Data layout
//!
//! The graph is a directed **multigraph** stored in Compressed Sparse Row
//! (CSR) format.  Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_attrs`) are sorted by
//! source node and indexed by `EdgeId`.  The sort is stable, so parallel
//! edges `u → v` keep the order in which they were added; that order is the
//! final tie-break when two parallel edges cost the same.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps a point to its nearest `NodeId`.  Points are
//! stored in an equirectangular projection around the network's mean
//! latitude (`[lat, lon * cos(lat₀)]`) so that one degree of longitude and
//! one degree of latitude weigh roughly the same on the ground.
//!
//! # Lifecycle
//!
//! A `RoadNetwork` is built once and never mutated.  It is `Send + Sync`
//! and is shared across concurrent route computations behind an `Arc`.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use sr_core::{AttrValue, EdgeId, GeoPoint, NodeId};

use crate::weight::Weighting;

// ── Edge record ───────────────────────────────────────────────────────────────

/// Attributes of one directed edge.
///
/// Only `length_m` is required.  The optional fields carry whatever the
/// offline pipeline produced; the weight functions coerce them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeAttrs {
    /// Physical length in metres.
    pub length_m: f64,
    /// Precomputed free-flow travel time in seconds.
    pub base_travel_time: Option<f64>,
    /// Posted speed limit in km/h, raw.
    pub maxspeed: Option<AttrValue>,
    /// Risk score, nominally `0..=5`, raw.
    pub normalized_risk: Option<AttrValue>,
}

impl EdgeAttrs {
    pub fn new(length_m: f64) -> Self {
        Self { length_m, ..Self::default() }
    }

    pub fn with_travel_time(mut self, secs: f64) -> Self {
        self.base_travel_time = Some(secs);
        self
    }

    pub fn with_maxspeed(mut self, maxspeed: impl Into<AttrValue>) -> Self {
        self.maxspeed = Some(maxspeed.into());
        self
    }

    pub fn with_risk(mut self, risk: impl Into<AttrValue>) -> Self {
        self.normalized_risk = Some(risk.into());
        self
    }
}

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a projected `[y, x]` point and its `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2],
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dy = self.point[0] - point[0];
        let dx = self.point[1] - point[1];
        dy * dy + dx * dx
    }
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Immutable directed multigraph in CSR format plus a spatial index.
///
/// Do not construct directly; use [`RoadNetworkBuilder`] or
/// [`crate::loader::load_csv`].
pub struct RoadNetwork {
    // ── Node data ─────────────────────────────────────────────────────────
    node_pos: Vec<GeoPoint>,
    /// Identifier from the source artifact (e.g. OSM id), if any.
    node_ext_id: Vec<Option<i64>>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// Length = `node_count + 1`.
    node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId) ─────────────────────────────────────
    edge_from: Vec<NodeId>,
    edge_to: Vec<NodeId>,
    edge_attrs: Vec<EdgeAttrs>,

    // ── Spatial index ─────────────────────────────────────────────────────
    spatial_idx: RTree<NodeEntry>,
    /// `cos(mean latitude)`, the longitude scale of the projection.
    lon_scale: f64,
}

impl RoadNetwork {
    /// Construct an empty network with no nodes or edges.
    ///
    /// Every snapping request against it fails with
    /// [`NetworkError::EmptyNetwork`](crate::NetworkError::EmptyNetwork).
    pub fn empty() -> Self {
        RoadNetworkBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    #[inline]
    pub fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.node_pos.len()
    }

    // ── Node queries ──────────────────────────────────────────────────────

    /// All node ids in ascending order.
    pub fn all_node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_pos.len()).map(NodeId::from_index)
    }

    /// Position of `node`, or `None` for an unknown id.
    #[inline]
    pub fn node_coordinates(&self, node: NodeId) -> Option<GeoPoint> {
        self.node_pos.get(node.index()).copied()
    }

    /// Identifier the node carried in the source artifact.
    pub fn external_id(&self, node: NodeId) -> Option<i64> {
        self.node_ext_id.get(node.index()).copied().flatten()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// This is a contiguous index range — no heap allocation.  Empty for
    /// an unknown id.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.out_range(node).map(EdgeId::from_index)
    }

    /// Out-degree of `node`, counting parallel edges separately.
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.out_range(node).len()
    }

    #[inline]
    fn out_range(&self, node: NodeId) -> std::ops::Range<usize> {
        if !self.contains_node(node) {
            return 0..0;
        }
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        start..end
    }

    /// Heads of the outgoing edges of `node`.  A neighbour reached by
    /// parallel edges appears once per edge.
    pub fn neighbors_out(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.out_edges(node).map(|e| self.edge_to[e.index()])
    }

    /// All edges `u → v`, in insertion order.  Empty if none.
    pub fn edges_between(&self, u: NodeId, v: NodeId) -> Vec<EdgeId> {
        if !self.contains_node(u) {
            return Vec::new();
        }
        self.out_edges(u)
            .filter(|e| self.edge_to[e.index()] == v)
            .collect()
    }

    /// The representative edge `u → v` under `weighting`: the cheapest
    /// parallel edge, ties going to the lowest `EdgeId`.
    pub fn best_edge(&self, u: NodeId, v: NodeId, weighting: Weighting) -> Option<EdgeId> {
        if !self.contains_node(u) {
            return None;
        }
        let mut best: Option<(EdgeId, f64)> = None;
        for e in self.out_edges(u) {
            if self.edge_to[e.index()] != v {
                continue;
            }
            let cost = weighting.cost(&self.edge_attrs[e.index()]);
            match best {
                Some((_, c)) if c <= cost => {}
                _ => best = Some((e, cost)),
            }
        }
        best.map(|(e, _)| e)
    }

    // ── Edge queries ──────────────────────────────────────────────────────

    #[inline]
    pub fn edge(&self, edge: EdgeId) -> &EdgeAttrs {
        &self.edge_attrs[edge.index()]
    }

    /// `(from, to)` of `edge`.
    #[inline]
    pub fn edge_endpoints(&self, edge: EdgeId) -> (NodeId, NodeId) {
        (self.edge_from[edge.index()], self.edge_to[edge.index()])
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    fn project(&self, pos: GeoPoint) -> [f64; 2] {
        [pos.lat, pos.lon * self.lon_scale]
    }

    /// Return the node nearest to `pos` in projected distance.
    ///
    /// Equidistant candidates resolve to the lowest `NodeId`.  Returns
    /// `None` if the network has no nodes or `pos` is not finite.
    pub fn snap_to_node(&self, pos: GeoPoint) -> Option<NodeId> {
        if !pos.is_finite() {
            return None;
        }
        let query = self.project(pos);
        let mut iter = self.spatial_idx.nearest_neighbor_iter_with_distance_2(&query);
        let (first, d0) = iter.next()?;
        let mut best = first.id;
        for (entry, d) in iter {
            if d > d0 {
                break;
            }
            best = best.min(entry.id);
        }
        Some(best)
    }

    /// Return up to `k` nearest nodes to `pos`, sorted by ascending distance.
    /// Empty if `pos` is not finite.
    pub fn k_nearest_nodes(&self, pos: GeoPoint, k: usize) -> Vec<NodeId> {
        if !pos.is_finite() {
            return Vec::new();
        }
        self.spatial_idx
            .nearest_neighbor_iter(&self.project(pos))
            .take(k)
            .map(|e| e.id)
            .collect()
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts nodes and directed edges in any order.  `build()`
/// stably sorts edges by source node, constructs the CSR arrays, and
/// bulk-loads the R-tree.
///
/// # Example
///
/// ```
/// use sr_core::GeoPoint;
/// use sr_network::{EdgeAttrs, RoadNetworkBuilder};
///
/// let mut b = RoadNetworkBuilder::new();
/// let a = b.add_node(GeoPoint::new(53.80, -1.55));
/// let c = b.add_node(GeoPoint::new(53.81, -1.54));
/// b.add_road(a, c, EdgeAttrs::new(1_200.0).with_maxspeed("30"));
/// let net = b.build();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 2); // bidirectional
/// ```
pub struct RoadNetworkBuilder {
    nodes: Vec<GeoPoint>,
    ext_ids: Vec<Option<i64>>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from: NodeId,
    to: NodeId,
    attrs: EdgeAttrs,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), ext_ids: Vec::new(), raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of nodes and edges to reduce
    /// reallocations when bulk-loading an artifact.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            ext_ids: Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: GeoPoint) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(pos);
        self.ext_ids.push(None);
        id
    }

    /// Like [`add_node`](Self::add_node), remembering the artifact's own id.
    pub fn add_external_node(&mut self, external_id: i64, pos: GeoPoint) -> NodeId {
        let id = self.add_node(pos);
        self.ext_ids[id.index()] = Some(external_id);
        id
    }

    /// Add a **directed** edge from `from` to `to`.  Both nodes must already
    /// have been added.  Parallel edges are allowed.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, attrs: EdgeAttrs) {
        debug_assert!(from.index() < self.nodes.len() && to.index() < self.nodes.len());
        self.raw_edges.push(RawEdge { from, to, attrs });
    }

    /// Convenience: add the same attributes in **both directions**.
    pub fn add_road(&mut self, a: NodeId, b: NodeId, attrs: EdgeAttrs) {
        self.add_edge(a, b, attrs.clone());
        self.add_edge(b, a, attrs);
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`RoadNetwork`].
    ///
    /// Time complexity: O(E log E) for the edge sort + O(N log N) for the
    /// R-tree bulk load.
    pub fn build(self) -> RoadNetwork {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        let mut edge_from = Vec::with_capacity(edge_count);
        let mut edge_to = Vec::with_capacity(edge_count);
        let mut edge_attrs = Vec::with_capacity(edge_count);
        for e in raw {
            edge_from.push(e.from);
            edge_to.push(e.to);
            edge_attrs.push(e.attrs);
        }

        let mean_lat = if node_count == 0 {
            0.0
        } else {
            self.nodes.iter().map(|p| p.lat).sum::<f64>() / node_count as f64
        };
        let lon_scale = mean_lat.to_radians().cos();

        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, pos)| NodeEntry {
                point: [pos.lat, pos.lon * lon_scale],
                id: NodeId::from_index(i),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        log::debug!("built road network: {node_count} nodes, {edge_count} edges");

        RoadNetwork {
            node_pos: self.nodes,
            node_ext_id: self.ext_ids,
            node_out_start,
            edge_from,
            edge_to,
            edge_attrs,
            spatial_idx,
            lon_scale,
        }
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
