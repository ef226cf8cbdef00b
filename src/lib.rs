//! Minimum spanning tree planning for weighted network topologies.
//!
//! `netspan` models a network of labeled nodes and cable costs as a weighted
//! undirected graph, computes the cheapest set of links connecting every
//! node reachable from a chosen start (Prim's algorithm with a lazy-deletion
//! priority queue), and renders the problem and the solution as SVG frames.
//!
//! The solver is a pure function of the frozen [`Topology`] and a start
//! label; narration and rendering are collaborators layered on top of its
//! plain, serializable result.
//!
//! # Example
//!
//! ```
//! use netspan::graph::{Topology, TopologyBuilder};
//! use netspan::mst::PrimSolver;
//!
//! let mut builder = TopologyBuilder::new();
//! builder.link("gateway", "core-switch", 4);
//! builder.link("core-switch", "edge-router", 2);
//! builder.link("gateway", "edge-router", 7);
//!
//! let topology = Topology::from_builder(&builder);
//! let tree = PrimSolver::new().run(&topology, "gateway").unwrap();
//!
//! assert_eq!(tree.total_cost, 6);
//! assert_eq!(tree.edge_count(), 2);
//! ```

pub mod error;
pub mod graph;
pub mod mst;
pub mod render;

pub use error::{SolveError, TopologyError};
pub use graph::{Topology, TopologyBuilder};
pub use mst::{PrimSolver, SpanningTree, TreeEdge};
