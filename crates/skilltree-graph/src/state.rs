//! Prerequisite state resolution.
//!
//! State is a pure function of a node id, the completed set and the node
//! snapshot:
//!
//! 1. `Completed` if the id is in the completed set, even when the node has
//!    since disappeared from the catalog.
//! 2. `Locked` if the id is unknown.
//! 3. `Available` if every prerequisite is completed (vacuously true for an
//!    empty list).
//! 4. `Locked` otherwise. A prerequisite that names a nonexistent node can
//!    never be completed through the catalog, so it keeps the node locked
//!    unless the completed set happens to carry that id.

use std::collections::HashSet;

use crate::{Node, NodeId, NodeState};

/// Resolve the state of `node_id` against a node snapshot.
///
/// Total over every input: empty collections behave as "nothing completed"
/// and "no such node".
pub fn resolve_state(node_id: &str, completed: &HashSet<NodeId>, all_nodes: &[Node]) -> NodeState {
    resolve_state_in(node_id, completed, |id| all_nodes.iter().find(|n| n.id.as_str() == id))
}

/// Resolve state with an arbitrary id lookup.
pub(crate) fn resolve_state_in<'a, F>(node_id: &str, completed: &HashSet<NodeId>, lookup: F) -> NodeState
where
    F: Fn(&str) -> Option<&'a Node>,
{
    if completed.contains(node_id) {
        return NodeState::Completed;
    }

    match lookup(node_id) {
        None => NodeState::Locked,
        Some(node) if prereqs_met(node, completed) => NodeState::Available,
        Some(_) => NodeState::Locked,
    }
}

/// Whether every prerequisite of `node` is in the completed set.
pub fn prereqs_met(node: &Node, completed: &HashSet<NodeId>) -> bool {
    node.prereqs.iter().all(|p| completed.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(raw: &[&str]) -> HashSet<NodeId> {
        raw.iter().map(|&s| NodeId::from(s)).collect()
    }

    fn chain() -> Vec<Node> {
        vec![
            Node::new("A", "A"),
            Node::new("B", "B").with_prereqs(["A"]),
            Node::new("C", "C").with_prereqs(["A", "B"]),
        ]
    }

    #[test]
    fn chain_with_root_completed() {
        let nodes = chain();
        let completed = ids(&["A"]);

        assert_eq!(resolve_state("A", &completed, &nodes), NodeState::Completed);
        assert_eq!(resolve_state("B", &completed, &nodes), NodeState::Available);
        assert_eq!(resolve_state("C", &completed, &nodes), NodeState::Locked);
    }

    #[test]
    fn nothing_completed() {
        let nodes = chain();
        let completed = HashSet::new();

        assert_eq!(resolve_state("A", &completed, &nodes), NodeState::Available);
        assert_eq!(resolve_state("B", &completed, &nodes), NodeState::Locked);
    }

    #[test]
    fn completed_takes_priority_over_unknown() {
        let completed = ids(&["retired"]);
        assert_eq!(resolve_state("retired", &completed, &[]), NodeState::Completed);
    }

    #[test]
    fn unknown_node_is_locked() {
        assert_eq!(resolve_state("ghost", &HashSet::new(), &chain()), NodeState::Locked);
        assert_eq!(resolve_state("ghost", &HashSet::new(), &[]), NodeState::Locked);
    }

    #[test]
    fn dangling_prereq_keeps_node_locked() {
        let nodes = vec![Node::new("x", "X").with_prereqs(["A", "does-not-exist"])];
        let completed = ids(&["A"]);
        assert_eq!(resolve_state("x", &completed, &nodes), NodeState::Locked);
    }

    #[test]
    fn first_duplicate_decides() {
        let nodes = vec![
            Node::new("a", "open"),
            Node::new("a", "gated").with_prereqs(["z"]),
        ];
        assert_eq!(resolve_state("a", &HashSet::new(), &nodes), NodeState::Available);
    }

    proptest! {
        #[test]
        fn completed_ids_are_always_completed(prereqs in prop::collection::vec("[a-e]", 0..5)) {
            let nodes = vec![Node::new("n", "N").with_prereqs(prereqs)];
            let completed = ids(&["n"]);
            prop_assert_eq!(resolve_state("n", &completed, &nodes), NodeState::Completed);
        }

        #[test]
        fn state_tracks_prereq_membership(
            prereqs in prop::collection::vec("[a-f]", 0..6),
            done in prop::collection::hash_set("[a-f]", 0..6),
        ) {
            let nodes = vec![Node::new("n", "N").with_prereqs(prereqs.clone())];
            let completed: HashSet<NodeId> = done.iter().map(|s| NodeId::from(s.as_str())).collect();
            let expected = if prereqs.iter().all(|p| done.contains(p)) {
                NodeState::Available
            } else {
                NodeState::Locked
            };
            prop_assert_eq!(resolve_state("n", &completed, &nodes), expected);
        }
    }
}
