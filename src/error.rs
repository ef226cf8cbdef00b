//! Error types for topology construction and solving.

use thiserror::Error;

use crate::graph::Cost;

/// Errors raised while building a topology from untrusted input.
///
/// A topology assembled through [`TopologyBuilder`](crate::graph::TopologyBuilder)
/// is symmetric by construction and cannot produce these; they only surface
/// when decoding an adjacency document.
#[derive(Debug, Error)]
pub enum TopologyError {
    /// A link is listed with a different cost in each direction.
    #[error("link {a} <-> {b} is asymmetric: cost {forward} one way, {reverse} back")]
    AsymmetricLink {
        a: String,
        b: String,
        forward: Cost,
        reverse: Cost,
    },

    /// A link is listed in one direction only.
    #[error("node {a} lists {b} as a neighbor, but {b} has no link back to {a}")]
    MissingReverseLink { a: String, b: String },

    /// The adjacency document could not be decoded.
    #[error("malformed adjacency document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors raised by the spanning tree solver.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// The requested start node is not part of the topology.
    #[error("start node {0:?} is not part of the topology")]
    UnknownStartNode(String),
}
