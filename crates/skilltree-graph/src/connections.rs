//! Edge derivation for rendering.
//!
//! Edges are recomputed from nodes on every call. Two kinds exist:
//! prerequisite edges (`prereq -> node`) and hierarchy edges
//! (`parent -> subnode`). An edge is only emitted when both endpoints are in
//! the input sequence.

use std::collections::HashSet;

use crate::{Connection, Node};

/// Build the directed edge list for a node sequence.
///
/// Prerequisite edges come first, then hierarchy edges. Duplicates in the
/// input produce duplicate edges.
pub fn build_connections(nodes: &[Node]) -> Vec<Connection> {
    let present: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();

    let prereq_edges = nodes.iter().flat_map(|node| {
        node.prereqs
            .iter()
            .filter(|p| present.contains(p.as_str()))
            .map(move |p| Connection::new(p.clone(), node.id.clone()))
    });

    let hierarchy_edges = nodes.iter().filter_map(|node| {
        let parent = node.parent_id.as_ref()?;
        present
            .contains(parent.as_str())
            .then(|| Connection::new(parent.clone(), node.id.clone()))
    });

    prereq_edges.chain(hierarchy_edges).collect()
}
