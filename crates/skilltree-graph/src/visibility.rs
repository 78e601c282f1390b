//! Expand/collapse visibility.
//!
//! Top-level nodes are always visible. A subnode is visible iff its parent
//! id is in the expansion set. The expansion set is owned by the caller and
//! is only ever read here; toggling returns a fresh set.

use std::collections::BTreeSet;

use crate::{Node, NodeId};

/// Parent ids whose subnodes are currently shown.
pub type ExpansionSet = BTreeSet<NodeId>;

/// Whether a single node is visible under `expanded`.
#[inline]
pub fn is_visible(node: &Node, expanded: &ExpansionSet) -> bool {
    match &node.parent_id {
        None => true,
        Some(parent) => expanded.contains(parent),
    }
}

/// The subset of `all_nodes` currently visible, in input order.
pub fn get_visible_nodes<'a>(all_nodes: &'a [Node], expanded: &ExpansionSet) -> Vec<&'a Node> {
    all_nodes.iter().filter(|n| is_visible(n, expanded)).collect()
}

/// Return a new set with `node_id` flipped. `expanded` is left untouched.
#[must_use]
pub fn toggle_expansion(node_id: &str, expanded: &ExpansionSet) -> ExpansionSet {
    let mut next = expanded.clone();
    if !next.remove(node_id) {
        next.insert(NodeId::from(node_id));
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> Vec<Node> {
        vec![
            Node::new("p", "Parent"),
            Node::new("p.1", "Child one").with_parent("p"),
            Node::new("p.2", "Child two").with_parent("p"),
            Node::new("q", "Loner"),
            Node::new("r.1", "Stray").with_parent("r"),
        ]
    }

    fn ids(nodes: &[&Node]) -> Vec<String> {
        nodes.iter().map(|n| n.id.to_string()).collect()
    }

    #[test]
    fn collapsed_shows_only_top_level() {
        let nodes = sample();
        let visible = get_visible_nodes(&nodes, &ExpansionSet::new());
        assert_eq!(ids(&visible), vec!["p", "q"]);
        assert!(visible.iter().all(|n| n.parent_id.is_none()));
    }

    #[test]
    fn expanded_parent_reveals_children() {
        let nodes = sample();
        let expanded = toggle_expansion("p", &ExpansionSet::new());
        let visible = get_visible_nodes(&nodes, &expanded);
        assert_eq!(ids(&visible), vec!["p", "p.1", "p.2", "q"]);
    }

    #[test]
    fn expanding_missing_parent_reveals_orphans() {
        let nodes = sample();
        let expanded = toggle_expansion("r", &ExpansionSet::new());
        let visible = get_visible_nodes(&nodes, &expanded);
        assert!(ids(&visible).contains(&"r.1".to_owned()));
    }

    #[test]
    fn toggle_leaves_input_untouched() {
        let original: ExpansionSet = [NodeId::from("a")].into_iter().collect();
        let snapshot = original.clone();

        let added = toggle_expansion("b", &original);
        assert_eq!(original, snapshot);
        assert!(added.contains("a") && added.contains("b"));

        let removed = toggle_expansion("a", &original);
        assert_eq!(original, snapshot);
        assert!(removed.is_empty());
    }

    proptest! {
        #[test]
        fn toggle_is_an_involution(
            start in prop::collection::btree_set("[a-d]", 0..4),
            id in "[a-d]",
        ) {
            let original: ExpansionSet = start.into_iter().map(NodeId::from).collect();
            let once = toggle_expansion(&id, &original);
            let twice = toggle_expansion(&id, &once);

            prop_assert_ne!(&once, &original);
            prop_assert_eq!(twice, original);
        }
    }
}
