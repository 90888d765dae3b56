//! Network-subsystem error type.

use thiserror::Error;

use sr_core::{GeoPoint, NodeId};

/// Errors produced by `sr-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// No directed path connects the two nodes, even after snapping repair.
    #[error("no path from {from} to {to}")]
    NoPath { from: NodeId, to: NodeId },

    #[error("node {0} not found in network")]
    NodeNotFound(NodeId),

    #[error("network has no nodes")]
    EmptyNetwork,

    /// A query point with a NaN or infinite coordinate.
    #[error("point {0} has non-finite coordinates")]
    InvalidPoint(GeoPoint),

    /// A route step has no connecting edge.  Indicates a solver or network
    /// bug; never swallowed.
    #[error("invariant violation: route step {from} -> {to} has no edge")]
    InvariantViolation { from: NodeId, to: NodeId },

    #[error("search budget exhausted after settling {settled} nodes")]
    SearchBudgetExceeded { settled: usize },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
