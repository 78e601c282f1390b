//! Id lookup over a node snapshot.

use std::collections::{HashMap, HashSet};

use crate::{resolve_state_in, Node, NodeId, NodeState};

/// The authoritative collection of nodes for one dataset version.
///
/// Built fresh per query from a caller-supplied snapshot. When the snapshot
/// contains the same id twice, the first record wins.
#[derive(Debug, Default, Clone)]
pub struct NodeIndex {
    nodes: Vec<Node>,
    by_id: HashMap<NodeId, usize>,
}

impl NodeIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a node sequence.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        let mut by_id = HashMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            by_id.entry(node.id.clone()).or_insert(position);
        }
        Self { nodes, by_id }
    }

    /// Look up a node by id.
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.by_id.get(id).map(|&position| &self.nodes[position])
    }

    /// Whether a node with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Resolve the state of `id` against a completed set.
    pub fn state(&self, id: &str, completed: &HashSet<NodeId>) -> NodeState {
        resolve_state_in(id, completed, |id| self.get(id))
    }

    /// All nodes in snapshot order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Number of records in the snapshot.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl FromIterator<Node> for NodeIndex {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self::from_nodes(iter.into_iter().collect())
    }
}
