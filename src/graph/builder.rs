//! Topology builder with symmetric link handling
//!
//! This module provides a mutable topology builder that uses FxHashMap
//! for O(1) link lookups during construction.

use rustc_hash::FxHashMap;

use super::{Cost, NodeId};

/// A node in the topology builder
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// The label for this node
    pub label: String,
    /// Adjacency list: neighbor node ID -> cable cost
    pub links: FxHashMap<NodeId, Cost>,
}

impl BuilderNode {
    /// Create a new node
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            links: FxHashMap::default(),
        }
    }
}

/// A mutable topology builder optimized for incremental construction
#[derive(Debug, Default)]
pub struct TopologyBuilder {
    /// Maps label -> node ID
    label_to_id: FxHashMap<String, NodeId>,
    /// Node storage
    nodes: Vec<BuilderNode>,
}

impl TopologyBuilder {
    /// Create a new empty topology builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a topology builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            label_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create a node for the given label, returning its ID
    pub fn get_or_create_node(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.label_to_id.get(label) {
            return id;
        }

        let id = self.nodes.len() as NodeId;
        self.label_to_id.insert(label.to_string(), id);
        self.nodes.push(BuilderNode::new(label));
        id
    }

    /// Set the cable cost between two nodes
    ///
    /// The link is written in both directions, so the topology stays
    /// symmetric by construction. Re-adding a link overwrites its cost.
    pub fn add_link(&mut self, from: NodeId, to: NodeId, cost: Cost) {
        if from == to {
            return; // No self-loops
        }

        if let Some(node) = self.nodes.get_mut(from as usize) {
            node.links.insert(to, cost);
        }
        if let Some(node) = self.nodes.get_mut(to as usize) {
            node.links.insert(from, cost);
        }
    }

    /// Link two nodes by label, creating either endpoint if needed
    pub fn link(&mut self, a: &str, b: &str, cost: Cost) {
        let a = self.get_or_create_node(a);
        let b = self.get_or_create_node(b);
        self.add_link(a, b, cost);
    }

    /// Get the number of nodes in the topology
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of links (counting each undirected link once)
    pub fn link_count(&self) -> usize {
        self.nodes.iter().map(|n| n.links.len()).sum::<usize>() / 2
    }

    /// Get a node by ID
    pub fn get_node(&self, id: NodeId) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Get a node ID by label
    pub fn get_node_id(&self, label: &str) -> Option<NodeId> {
        self.label_to_id.get(label).copied()
    }

    /// Get the label for a node ID
    pub fn get_label(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id as usize).map(|n| n.label.as_str())
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as NodeId, n))
    }

    /// Check if the builder is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
