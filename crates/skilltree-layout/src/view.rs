//! Render-ready graph snapshot.
//!
//! Ties the pieces together for one request: the dataset is flattened into
//! a node index, the visible nodes are laid out, every drawn node gets its
//! state, edges are derived among the drawn nodes only, and progress is
//! taken over the visible set.

use std::collections::BTreeMap;

use serde::Serialize;
use skilltree_graph::{
    build_connections, calculate_progress, get_visible_nodes, CompletedSet, Connection, ExpansionSet,
    Node, NodeFilter, NodeIndex, NodeState,
};

use crate::{CategoryLabel, Dataset, LayoutEngine, Rect};

/// A positioned node with its computed state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    #[serde(flatten)]
    pub node: Node,
    pub state: NodeState,
}

/// Everything a rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphView {
    pub nodes: Vec<RenderNode>,
    pub connections: Vec<Connection>,
    pub category_labels: BTreeMap<String, CategoryLabel>,
    /// Canvas area the drawn nodes occupy.
    pub canvas: Option<Rect>,
    /// Percentage of visible nodes completed.
    pub progress: u8,
}

impl GraphView {
    /// Build a view from caller-owned snapshots.
    pub fn build(
        engine: &LayoutEngine,
        dataset: Option<&Dataset>,
        expanded: &ExpansionSet,
        completed: &CompletedSet,
    ) -> Self {
        let Some(dataset) = dataset else {
            return Self::default();
        };

        let all = dataset.flatten();
        let progress = calculate_progress(get_visible_nodes(&all, expanded), completed);
        let index = NodeIndex::from_nodes(all);

        let layout = engine.layout(Some(dataset), Some(expanded));
        let connections = build_connections(&layout.nodes);
        let nodes = layout
            .nodes
            .into_iter()
            .map(|node| {
                let state = index.state(node.id.as_str(), completed);
                RenderNode { node, state }
            })
            .collect();

        Self {
            nodes,
            connections,
            category_labels: layout.category_labels,
            canvas: layout.bounds,
            progress,
        }
    }

    /// Keep only nodes matching `filter`, and edges between kept nodes.
    ///
    /// Positions are untouched so filtered nodes do not jump around.
    #[must_use]
    pub fn filtered(mut self, filter: &NodeFilter) -> Self {
        if filter.is_passthrough() {
            return self;
        }
        self.nodes.retain(|n| filter.matches(&n.node));
        let kept: std::collections::HashSet<&str> = self.nodes.iter().map(|n| n.node.id.as_str()).collect();
        self.connections
            .retain(|c| kept.contains(c.from.as_str()) && kept.contains(c.to.as_str()));
        self
    }

    /// State of a drawn node.
    pub fn state_of(&self, id: &str) -> Option<NodeState> {
        self.nodes.iter().find(|n| n.node.id.as_str() == id).map(|n| n.state)
    }
}
