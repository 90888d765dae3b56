//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The planner calls routing via the [`Router`] trait, so applications can
//! swap in custom implementations (A*, contraction hierarchies) without
//! touching the pipeline.  The default [`DijkstraRouter`] is exact for the
//! non-negative costs produced by [`crate::weight`].
//!
//! # Determinism
//!
//! Costs are `f64` ordered with `total_cmp`.  Among equal-cost heap entries
//! the lowest `NodeId` is settled first, and an equal-cost relaxation keeps
//! the predecessor with the lower `NodeId`.  Parallel edges are resolved to
//! their cheapest member under the active weighting.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use sr_core::NodeId;

use crate::network::RoadNetwork;
use crate::weight::Weighting;
use crate::{NetworkError, NetworkResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: the node sequence and its total cost
/// under the weighting that produced it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Nodes to visit in order, origin first.
    pub nodes: Vec<NodeId>,
    /// Sum of edge costs along `nodes` under `weighting`.
    pub cost: f64,
    pub weighting: Weighting,
}

impl Route {
    /// Zero-length route for `origin == destination`.
    pub fn trivial(node: NodeId, weighting: Weighting) -> Self {
        Self { nodes: vec![node], cost: 0.0, weighting }
    }

    /// `true` if the origin and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() < 2
    }

    pub fn origin(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn destination(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Consecutive `(u, v)` pairs in traversal order.
    pub fn steps(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a single router can serve
/// concurrent route computations over a shared network.
pub trait Router: Send + Sync {
    /// Compute the cheapest route from `from` to `to` under `weighting`.
    ///
    /// `from == to` yields a trivial route rather than an error.
    fn route(
        &self,
        network: &RoadNetwork,
        from: NodeId,
        to: NodeId,
        weighting: Weighting,
    ) -> NetworkResult<Route>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard binary-heap Dijkstra over the CSR road graph.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(
        &self,
        network: &RoadNetwork,
        from: NodeId,
        to: NodeId,
        weighting: Weighting,
    ) -> NetworkResult<Route> {
        dijkstra(network, from, to, weighting, None)
    }
}

/// Dijkstra with a cap on settled nodes, for callers that need bounded
/// latency per solve.  Exceeding the cap fails with
/// [`NetworkError::SearchBudgetExceeded`].
#[derive(Copy, Clone, Debug)]
pub struct BoundedDijkstraRouter {
    pub max_settled: usize,
}

impl BoundedDijkstraRouter {
    pub fn new(max_settled: usize) -> Self {
        Self { max_settled }
    }
}

impl Router for BoundedDijkstraRouter {
    fn route(
        &self,
        network: &RoadNetwork,
        from: NodeId,
        to: NodeId,
        weighting: Weighting,
    ) -> NetworkResult<Route> {
        dijkstra(network, from, to, weighting, Some(self.max_settled))
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
struct State {
    cost: f64,
    node: NodeId,
}

// Reversed so `BinaryHeap` (a max-heap) pops the cheapest, lowest-id entry.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

fn dijkstra(
    network: &RoadNetwork,
    from: NodeId,
    to: NodeId,
    weighting: Weighting,
    max_settled: Option<usize>,
) -> NetworkResult<Route> {
    for node in [from, to] {
        if !network.contains_node(node) {
            return Err(NetworkError::NodeNotFound(node));
        }
    }
    if from == to {
        return Ok(Route::trivial(from, weighting));
    }

    let n = network.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev = vec![NodeId::INVALID; n];
    let mut settled = vec![false; n];
    let mut settled_count = 0usize;

    dist[from.index()] = 0.0;
    let mut heap = BinaryHeap::new();
    heap.push(State { cost: 0.0, node: from });

    while let Some(State { cost, node }) = heap.pop() {
        // Skip stale heap entries.
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;
        settled_count += 1;

        if node == to {
            return Ok(reconstruct(&prev, from, to, cost, weighting));
        }
        if let Some(limit) = max_settled {
            if settled_count >= limit {
                return Err(NetworkError::SearchBudgetExceeded { settled: settled_count });
            }
        }

        for edge in network.out_edges(node) {
            let (_, next) = network.edge_endpoints(edge);
            if settled[next.index()] {
                continue;
            }
            let new_cost = cost + weighting.cost(network.edge(edge));
            let known = dist[next.index()];

            if new_cost < known {
                dist[next.index()] = new_cost;
                prev[next.index()] = node;
                heap.push(State { cost: new_cost, node: next });
            } else if new_cost == known && known.is_finite() && node < prev[next.index()] {
                prev[next.index()] = node;
            }
        }
    }

    Err(NetworkError::NoPath { from, to })
}

fn reconstruct(
    prev: &[NodeId],
    from: NodeId,
    to: NodeId,
    cost: f64,
    weighting: Weighting,
) -> Route {
    let mut nodes = vec![to];
    let mut cur = to;
    while cur != from {
        cur = prev[cur.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    Route { nodes, cost, weighting }
}

// ── Reachability ──────────────────────────────────────────────────────────────

/// `true` if a directed path leads from `from` to `to`.  Weight-agnostic
/// breadth-first search; a node always reaches itself.
pub fn has_path(network: &RoadNetwork, from: NodeId, to: NodeId) -> bool {
    if !network.contains_node(from) || !network.contains_node(to) {
        return false;
    }
    if from == to {
        return true;
    }

    let mut seen = vec![false; network.node_count()];
    let mut queue = VecDeque::from([from]);
    seen[from.index()] = true;

    while let Some(node) = queue.pop_front() {
        for next in network.neighbors_out(node) {
            if next == to {
                return true;
            }
            if !seen[next.index()] {
                seen[next.index()] = true;
                queue.push_back(next);
            }
        }
    }
    false
}
