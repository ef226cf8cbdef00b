//! Solve observer: hooks for narration, logging, and telemetry
//!
//! Observers receive notifications at solver decision points without
//! coupling to the algorithm itself. Pass [`NoopObserver`] for silent runs
//! or [`TraceObserver`] to narrate the solve through `tracing` events.

use crate::graph::Cost;
use crate::mst::TreeEdge;

/// Callbacks fired by [`PrimSolver::run_observed`](crate::mst::PrimSolver::run_observed)
///
/// All hooks default to no-ops, so implementations only override the
/// notifications they care about.
pub trait SolveObserver {
    /// A node joined the visited set; `running_cost` is the tree cost so far
    fn on_node_reached(&mut self, _label: &str, _running_cost: Cost) {}

    /// An offer was accepted into the tree
    fn on_edge_accepted(&mut self, _edge: &TreeEdge) {}

    /// A stale offer was popped for an already-visited target
    fn on_offer_discarded(&mut self, _source: &str, _target: &str, _weight: Cost) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SolveObserver for NoopObserver {}

/// Observer that narrates the solve through `tracing` events
///
/// Accepted links are logged at info level, reached nodes at debug, and
/// discarded stale offers at trace.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceObserver;

impl SolveObserver for TraceObserver {
    fn on_node_reached(&mut self, label: &str, running_cost: Cost) {
        tracing::debug!(node = label, running_cost, "node reached");
    }

    fn on_edge_accepted(&mut self, edge: &TreeEdge) {
        tracing::info!(
            source = %edge.source,
            target = %edge.target,
            cost = edge.weight,
            "link accepted"
        );
    }

    fn on_offer_discarded(&mut self, source: &str, target: &str, weight: Cost) {
        tracing::trace!(source, target, weight, "stale offer discarded");
    }
}
