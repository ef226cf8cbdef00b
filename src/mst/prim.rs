//! Prim's algorithm over a frozen topology
//!
//! Greedy frontier expansion with a lazy-deletion priority queue: every
//! visited node offers links to its still-unvisited neighbors, and an offer
//! whose target was visited in the meantime is discarded when popped. This
//! keeps the queue a plain binary heap with no decrease-key support.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::SolveError;
use crate::graph::{Cost, NodeId, Topology};
use crate::mst::observer::{NoopObserver, SolveObserver};
use crate::mst::{SpanningTree, TreeEdge};

/// A pending frontier offer: a visited source proposing a link to a target
///
/// The seed record offers the start node to itself at cost zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    weight: Cost,
    source: NodeId,
    target: NodeId,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the cheapest offer first. Ties fall
        // back to node ids, which follow lexicographic label order.
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.source.cmp(&self.source))
            .then_with(|| other.target.cmp(&self.target))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Prim solver
///
/// Computes the minimum spanning tree of the component reachable from a
/// chosen start node. Nodes the start cannot reach are simply left out of
/// the result; a disconnected topology is not an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimSolver;

impl PrimSolver {
    /// Create a new solver
    pub fn new() -> Self {
        Self
    }

    /// Compute the spanning tree reachable from `start`
    ///
    /// # Complexity
    /// O(E log E): stale offers stay in the queue until popped.
    ///
    /// # Errors
    /// Fails with [`SolveError::UnknownStartNode`] if `start` is not a
    /// node of the topology.
    pub fn run(&self, topology: &Topology, start: &str) -> Result<SpanningTree, SolveError> {
        self.run_observed(topology, start, &mut NoopObserver)
    }

    /// Same as [`run`](Self::run), with observer callbacks at every
    /// solver decision
    pub fn run_observed(
        &self,
        topology: &Topology,
        start: &str,
        observer: &mut impl SolveObserver,
    ) -> Result<SpanningTree, SolveError> {
        let root = topology
            .node_id(start)
            .ok_or_else(|| SolveError::UnknownStartNode(start.to_string()))?;

        let mut frontier = BinaryHeap::new();
        frontier.push(Candidate {
            weight: 0,
            source: root,
            target: root,
        });

        let mut visited = vec![false; topology.node_count()];
        let mut edges = Vec::new();
        let mut total_cost: Cost = 0;

        while let Some(Candidate {
            weight,
            source,
            target,
        }) = frontier.pop()
        {
            if visited[target as usize] {
                // Stale offer: a cheaper one already reached this target.
                observer.on_offer_discarded(topology.label(source), topology.label(target), weight);
                continue;
            }

            visited[target as usize] = true;
            total_cost += weight;
            observer.on_node_reached(topology.label(target), total_cost);

            if source != target {
                let edge = TreeEdge {
                    source: topology.label(source).to_string(),
                    target: topology.label(target).to_string(),
                    weight,
                };
                observer.on_edge_accepted(&edge);
                edges.push(edge);
            }

            for (neighbor, cost) in topology.neighbors(target) {
                if !visited[neighbor as usize] {
                    frontier.push(Candidate {
                        weight: cost,
                        source: target,
                        target: neighbor,
                    });
                }
            }
        }

        Ok(SpanningTree { edges, total_cost })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::TopologyBuilder;

    fn build_triangle() -> Topology {
        let mut builder = TopologyBuilder::new();
        builder.link("a", "b", 4);
        builder.link("b", "c", 2);
        builder.link("a", "c", 7);
        Topology::from_builder(&builder)
    }

    #[test]
    fn test_triangle_skips_heaviest_link() {
        let topo = build_triangle();
        let tree = PrimSolver::new().run(&topo, "a").unwrap();

        assert_eq!(tree.total_cost, 6);
        assert_eq!(tree.edge_count(), 2);
        // The 7-cost link never enters the tree.
        assert!(tree.edges.iter().all(|e| e.weight != 7));
    }

    #[test]
    fn test_edges_in_acceptance_order() {
        let topo = build_triangle();
        let tree = PrimSolver::new().run(&topo, "a").unwrap();

        let hops: Vec<_> = tree
            .edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str(), e.weight))
            .collect();
        assert_eq!(hops, vec![("a", "b", 4), ("b", "c", 2)]);
    }

    #[test]
    fn test_stale_offers_are_discarded() {
        // Square with a diagonal: the expensive offers for "d" must lose to
        // the cheap path around the ring.
        let mut builder = TopologyBuilder::new();
        builder.link("a", "b", 1);
        builder.link("b", "c", 1);
        builder.link("c", "d", 1);
        builder.link("a", "d", 10);
        builder.link("b", "d", 10);
        let topo = Topology::from_builder(&builder);

        let tree = PrimSolver::new().run(&topo, "a").unwrap();

        assert_eq!(tree.total_cost, 3);
        assert!(tree.spans(4));
    }

    #[test]
    fn test_unknown_start_node() {
        let topo = build_triangle();
        let err = PrimSolver::new().run(&topo, "nonexistent").unwrap_err();

        assert_eq!(err, SolveError::UnknownStartNode("nonexistent".into()));
    }

    #[test]
    fn test_single_node() {
        let mut builder = TopologyBuilder::new();
        builder.get_or_create_node("lonely");
        let topo = Topology::from_builder(&builder);

        let tree = PrimSolver::new().run(&topo, "lonely").unwrap();

        assert!(tree.is_empty());
        assert_eq!(tree.total_cost, 0);
    }

    #[test]
    fn test_disconnected_component_left_out() {
        let mut builder = TopologyBuilder::new();
        builder.link("a", "b", 1);
        builder.link("c", "d", 1); // Unreachable from "a"
        let topo = Topology::from_builder(&builder);

        let tree = PrimSolver::new().run(&topo, "a").unwrap();

        assert_eq!(tree.edge_count(), 1);
        assert_eq!(tree.nodes(), vec!["a", "b"]);
        assert!(tree.spans(2));
    }

    #[test]
    fn test_tie_break_prefers_lexicographically_first_source() {
        // Two equal-cost ways to reach "z": via "a" and via "b". The offer
        // from "a" compares smaller and must win.
        let mut builder = TopologyBuilder::new();
        builder.link("a", "b", 1);
        builder.link("a", "z", 5);
        builder.link("b", "z", 5);
        let topo = Topology::from_builder(&builder);

        let tree = PrimSolver::new().run(&topo, "a").unwrap();

        let z_edge = tree.edges.iter().find(|e| e.target == "z").unwrap();
        assert_eq!(z_edge.source, "a");
        assert_eq!(tree.total_cost, 6);
    }

    #[test]
    fn test_negative_costs_pass_through() {
        let mut builder = TopologyBuilder::new();
        builder.link("a", "b", -4);
        builder.link("b", "c", 3);
        let topo = Topology::from_builder(&builder);

        let tree = PrimSolver::new().run(&topo, "a").unwrap();

        assert_eq!(tree.total_cost, -1);
        assert!(tree.spans(3));
    }

    #[test]
    fn test_repeat_runs_agree() {
        let topo = build_triangle();
        let solver = PrimSolver::new();

        let first = solver.run(&topo, "a").unwrap();
        let second = solver.run(&topo, "a").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_raising_a_weight_never_lowers_the_total() {
        let cheap = build_triangle();
        let mut builder = TopologyBuilder::new();
        builder.link("a", "b", 4);
        builder.link("b", "c", 5); // Was 2
        builder.link("a", "c", 7);
        let pricey = Topology::from_builder(&builder);

        let solver = PrimSolver::new();
        let before = solver.run(&cheap, "a").unwrap();
        let after = solver.run(&pricey, "a").unwrap();

        assert!(after.total_cost >= before.total_cost);
    }

    #[test]
    fn test_total_cost_matches_edge_weights() {
        let topo = build_triangle();
        let tree = PrimSolver::new().run(&topo, "b").unwrap();

        let sum: Cost = tree.edges.iter().map(|e| e.weight).sum();
        assert_eq!(sum, tree.total_cost);
    }
}
