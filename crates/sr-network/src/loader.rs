//! CSV network artifact loader.
//!
//! # CSV format
//!
//! The offline pipeline exports two tables.  `nodes.csv`:
//!
//! ```csv
//! node_id,lat,lon
//! 108234,53.7996,-1.5491
//! 108240,53.8003,-1.5478
//! ```
//!
//! `edges.csv` (one row per directed edge; parallel edges are separate rows):
//!
//! ```csv
//! from,to,length,base_travel_time,maxspeed,normalized_risk
//! 108234,108240,112.4,9.1,30,0.8
//! 108240,108234,112.4,,"['30', '40']",2.7
//! ```
//!
//! `node_id` is the artifact's own id (typically OSM); nodes receive dense
//! `NodeId`s in file order and keep the artifact id via
//! [`RoadNetwork::external_id`].  Empty optional cells mean "absent".
//! `maxspeed` and `normalized_risk` are kept raw as [`AttrValue`]s and
//! coerced by the weight functions; an unparsable `base_travel_time` is
//! treated as absent.  Missing or malformed required fields and edges that
//! reference unknown nodes are errors.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sr_core::{AttrValue, GeoPoint, NodeId};

use crate::network::{EdgeAttrs, RoadNetwork, RoadNetworkBuilder};
use crate::{NetworkError, NetworkResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct NodeRecord {
    node_id: i64,
    lat:     f64,
    lon:     f64,
}

#[derive(Deserialize)]
struct EdgeRecord {
    from:             i64,
    to:               i64,
    length:           f64,
    #[serde(default)]
    base_travel_time: Option<String>,
    #[serde(default)]
    maxspeed:         Option<String>,
    #[serde(default)]
    normalized_risk:  Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a network from a `nodes.csv` / `edges.csv` pair.
pub fn load_csv(nodes_path: &Path, edges_path: &Path) -> NetworkResult<RoadNetwork> {
    let nodes = std::fs::File::open(nodes_path)?;
    let edges = std::fs::File::open(edges_path)?;
    load_reader(nodes, edges)
}

/// Like [`load_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from an
/// embedded artifact.
pub fn load_reader<N: Read, E: Read>(nodes: N, edges: E) -> NetworkResult<RoadNetwork> {
    // ── Nodes ─────────────────────────────────────────────────────────────
    let mut node_reader = csv::Reader::from_reader(nodes);
    let mut builder = RoadNetworkBuilder::new();
    let mut by_ext: HashMap<i64, NodeId> = HashMap::new();

    for (i, result) in node_reader.deserialize::<NodeRecord>().enumerate() {
        let row = result.map_err(|e| NetworkError::Parse(format!("nodes row {}: {e}", i + 1)))?;
        if !(row.lat.is_finite() && row.lon.is_finite()) {
            return Err(NetworkError::Parse(format!(
                "nodes row {}: non-finite coordinates for node {}",
                i + 1,
                row.node_id
            )));
        }
        if by_ext.contains_key(&row.node_id) {
            return Err(NetworkError::Parse(format!(
                "nodes row {}: duplicate node_id {}",
                i + 1,
                row.node_id
            )));
        }
        let id = builder.add_external_node(row.node_id, GeoPoint::new(row.lat, row.lon));
        by_ext.insert(row.node_id, id);
    }

    // ── Edges ─────────────────────────────────────────────────────────────
    let mut edge_reader = csv::Reader::from_reader(edges);
    for (i, result) in edge_reader.deserialize::<EdgeRecord>().enumerate() {
        let row = result.map_err(|e| NetworkError::Parse(format!("edges row {}: {e}", i + 1)))?;
        let lookup = |ext: i64| {
            by_ext.get(&ext).copied().ok_or_else(|| {
                NetworkError::Parse(format!("edges row {}: unknown node {ext}", i + 1))
            })
        };
        let from = lookup(row.from)?;
        let to = lookup(row.to)?;
        builder.add_edge(from, to, edge_attrs(row));
    }

    let network = builder.build();
    log::info!(
        "loaded road network: {} nodes, {} edges",
        network.node_count(),
        network.edge_count()
    );
    Ok(network)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn edge_attrs(row: EdgeRecord) -> EdgeAttrs {
    let base_travel_time = non_empty(row.base_travel_time).and_then(|s| match s.parse::<f64>() {
        Ok(t) => Some(t),
        Err(_) => {
            log::trace!("unparsable base_travel_time {s:?}; treating as absent");
            None
        }
    });
    EdgeAttrs {
        length_m: row.length,
        base_travel_time,
        maxspeed: non_empty(row.maxspeed).map(|s| AttrValue::parse_cell(&s)),
        normalized_risk: non_empty(row.normalized_risk).map(|s| AttrValue::parse_cell(&s)),
    }
}

fn non_empty(cell: Option<String>) -> Option<String> {
    cell.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}
