//! Frozen adjacency representation of a network topology
//!
//! Freezing a builder reassigns node ids in lexicographic label order and
//! sorts every neighbor list, so iteration order is deterministic no matter
//! how the topology was assembled. The solver relies on this: comparing ids
//! compares labels.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use super::builder::TopologyBuilder;
use super::{Cost, NodeId};
use crate::error::TopologyError;

/// An immutable weighted undirected topology
///
/// The solver never mutates a `Topology`; construct one from a
/// [`TopologyBuilder`] or decode one from an adjacency document.
#[derive(Debug, Clone)]
pub struct Topology {
    /// Node labels, sorted lexicographically; the index is the node id
    labels: Vec<String>,
    /// Maps label -> node ID
    label_to_id: FxHashMap<String, NodeId>,
    /// Per-node neighbor lists, sorted by neighbor id
    adjacency: Vec<Vec<(NodeId, Cost)>>,
}

impl Topology {
    /// Freeze a builder into an immutable topology
    pub fn from_builder(builder: &TopologyBuilder) -> Self {
        let n = builder.node_count();
        let nodes: Vec<_> = builder.nodes().map(|(_, node)| node).collect();

        // Reassign ids in label order
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| nodes[a].label.cmp(&nodes[b].label));

        let mut remap = vec![0 as NodeId; n];
        for (new_id, &old_id) in order.iter().enumerate() {
            remap[old_id] = new_id as NodeId;
        }

        let mut labels = Vec::with_capacity(n);
        let mut label_to_id = FxHashMap::with_capacity_and_hasher(n, Default::default());
        let mut adjacency = Vec::with_capacity(n);

        for &old_id in &order {
            let node = nodes[old_id];
            label_to_id.insert(node.label.clone(), labels.len() as NodeId);
            labels.push(node.label.clone());

            let mut neighbors: Vec<(NodeId, Cost)> = node
                .links
                .iter()
                .map(|(&to, &cost)| (remap[to as usize], cost))
                .collect();
            neighbors.sort_by_key(|&(to, _)| to);
            adjacency.push(neighbors);
        }

        Self {
            labels,
            label_to_id,
            adjacency,
        }
    }

    /// Build a topology from an adjacency mapping, validating symmetry
    ///
    /// Every link must appear in both directions with equal cost; otherwise
    /// this fails with [`TopologyError::AsymmetricLink`] or
    /// [`TopologyError::MissingReverseLink`]. Nodes without neighbors are
    /// kept as isolated nodes.
    pub fn from_adjacency(
        adjacency: &BTreeMap<String, BTreeMap<String, Cost>>,
    ) -> Result<Self, TopologyError> {
        for (a, neighbors) in adjacency {
            for (b, &forward) in neighbors {
                if a == b {
                    continue;
                }
                match adjacency.get(b).and_then(|links| links.get(a)) {
                    Some(&reverse) if reverse == forward => {}
                    Some(&reverse) => {
                        return Err(TopologyError::AsymmetricLink {
                            a: a.clone(),
                            b: b.clone(),
                            forward,
                            reverse,
                        })
                    }
                    None => {
                        return Err(TopologyError::MissingReverseLink {
                            a: a.clone(),
                            b: b.clone(),
                        })
                    }
                }
            }
        }

        let mut builder = TopologyBuilder::with_capacity(adjacency.len());
        for label in adjacency.keys() {
            builder.get_or_create_node(label);
        }
        for (a, neighbors) in adjacency {
            for (b, &cost) in neighbors {
                builder.link(a, b, cost);
            }
        }

        Ok(Self::from_builder(&builder))
    }

    /// Decode a topology from a JSON adjacency document
    ///
    /// The document maps each node label to its neighbor costs:
    ///
    /// ```json
    /// { "srv-a": { "srv-b": 4 }, "srv-b": { "srv-a": 4 } }
    /// ```
    pub fn from_json_str(document: &str) -> Result<Self, TopologyError> {
        let adjacency: BTreeMap<String, BTreeMap<String, Cost>> = serde_json::from_str(document)?;
        Self::from_adjacency(&adjacency)
    }

    /// Export the topology as an adjacency mapping
    pub fn to_adjacency(&self) -> BTreeMap<String, BTreeMap<String, Cost>> {
        self.labels
            .iter()
            .enumerate()
            .map(|(id, label)| {
                let neighbors = self.adjacency[id]
                    .iter()
                    .map(|&(to, cost)| (self.labels[to as usize].clone(), cost))
                    .collect();
                (label.clone(), neighbors)
            })
            .collect()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Get the total number of links (counting each undirected link once)
    pub fn link_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    /// Get a node ID by label
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.label_to_id.get(label).copied()
    }

    /// Get the label for a node
    pub fn label(&self, node: NodeId) -> &str {
        &self.labels[node as usize]
    }

    /// Check whether a label is part of the topology
    pub fn contains(&self, label: &str) -> bool {
        self.label_to_id.contains_key(label)
    }

    /// Iterate over all labels in id (lexicographic) order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Iterate over neighbors of a node with their cable costs
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Cost)> + '_ {
        self.adjacency[node as usize].iter().copied()
    }

    /// Get the degree of a node
    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency[node as usize].len()
    }

    /// Get the cost of the link between two nodes, if one exists
    pub fn link_cost(&self, a: NodeId, b: NodeId) -> Option<Cost> {
        self.adjacency[a as usize]
            .iter()
            .find(|&&(to, _)| to == b)
            .map(|&(_, cost)| cost)
    }

    /// Iterate over every link once, as `(a, b, cost)` with `a < b`
    pub fn links(&self) -> impl Iterator<Item = (NodeId, NodeId, Cost)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(a, neighbors)| {
            let a = a as NodeId;
            neighbors
                .iter()
                .filter(move |&&(b, _)| a < b)
                .map(move |&(b, cost)| (a, b, cost))
        })
    }

    /// Check if the topology is empty
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            label_to_id: FxHashMap::default(),
            adjacency: Vec::new(),
        }
    }
}
