//! Topology construction and representation
//!
//! This module provides efficient building and storage for the weighted
//! undirected network topology the solver operates on.

pub mod builder;
pub mod topology;

/// Identifier for a node inside a frozen [`Topology`].
///
/// Ids are assigned in lexicographic label order when a builder is frozen,
/// so comparing ids compares labels.
pub type NodeId = u32;

/// Cable cost of a single link.
pub type Cost = i64;

pub use builder::TopologyBuilder;
pub use topology::Topology;
