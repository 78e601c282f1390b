//! Deterministic grouped layout.
//!
//! # Bands
//!
//! Categories stack vertically. A running cursor starts at `top_margin`
//! and, after each category, moves below the lowest node placed in it plus
//! `category_gap`. Inside a domain-grouped category every domain gets its
//! own band starting at a running x cursor; the next band starts
//! `domain_gap` right of the rightmost node of the previous one. Flat
//! categories use a single row.
//!
//! # Collision avoidance
//!
//! Every node has a preferred grid cell. Before a position is accepted its
//! footprint is tested against every footprint placed so far, in any
//! category. On overlap the candidate moves along a [`ProbeSequence`]
//! (right, then wrap below the preferred column) until it is free.
//!
//! # Subnodes
//!
//! An expanded parent lays its subnodes out in a small grid directly to
//! its right, probing against the same occupancy. Collapsed parents place
//! nothing for their subnodes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use skilltree_graph::{is_visible, ExpansionSet, Node};
use tracing::{debug, trace};

use crate::dataset::materialize_subnode;
use crate::{CategoryContent, Dataset, DomainGroup, LayoutConfig, Occupancy, Point, ProbeSequence, Rect, Result};

/// Where a category band begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryLabel {
    pub name: String,
    pub y: f64,
}

/// Positioned nodes plus category anchors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Drawn nodes in placement order, each with `x`/`y` set.
    pub nodes: Vec<Node>,
    pub category_labels: BTreeMap<String, CategoryLabel>,
    /// Smallest rectangle covering every footprint, `None` when nothing
    /// was placed.
    pub bounds: Option<Rect>,
}

impl Layout {
    /// Position of a node by id.
    pub fn position_of(&self, id: &str) -> Option<Point> {
        self.nodes
            .iter()
            .find(|n| n.id.as_str() == id)
            .and_then(Node::position)
            .map(|(x, y)| Point::new(x, y))
    }

    /// Check if nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Lay out `dataset` with the default configuration.
pub fn layout(dataset: Option<&Dataset>, expanded: Option<&ExpansionSet>) -> Layout {
    LayoutEngine::default().layout(dataset, expanded)
}

/// Places datasets according to a fixed [`LayoutConfig`].
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create an engine, rejecting degenerate configurations.
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Assign positions to every node that should currently be drawn.
    ///
    /// An absent dataset yields an empty layout. The same input always
    /// produces the same positions in the same order.
    pub fn layout(&self, dataset: Option<&Dataset>, expanded: Option<&ExpansionSet>) -> Layout {
        let Some(dataset) = dataset else {
            return Layout::default();
        };
        let collapsed = ExpansionSet::new();
        let expanded = expanded.unwrap_or(&collapsed);

        let mut placer = Placer {
            config: &self.config,
            expanded,
            occupancy: Occupancy::new(),
            placed: Vec::with_capacity(dataset.node_count()),
        };
        let mut category_labels = BTreeMap::new();
        let mut global_y = self.config.top_margin;

        for category in &dataset.categories {
            debug!(category = %category.name, y = global_y, "laying out category");
            category_labels.insert(
                category.name.clone(),
                CategoryLabel {
                    name: category.name.clone(),
                    y: global_y,
                },
            );

            let mut extent = Extent::new(self.config.left_margin, global_y);
            match &category.content {
                CategoryContent::Domains(groups) => placer.place_domains(groups, global_y, &mut extent),
                CategoryContent::Nodes(nodes) => placer.place_row(nodes, global_y, &mut extent),
            }
            global_y = extent.bottom + self.config.category_gap;
        }

        Layout {
            bounds: placer.occupancy.bounds(),
            nodes: placer.placed,
            category_labels,
        }
    }
}

/// Right and bottom edges reached so far.
#[derive(Debug, Clone, Copy)]
struct Extent {
    right: f64,
    bottom: f64,
}

impl Extent {
    fn new(x: f64, y: f64) -> Self {
        Self { right: x, bottom: y }
    }

    fn include(&mut self, rect: &Rect) {
        self.right = self.right.max(rect.right());
        self.bottom = self.bottom.max(rect.bottom());
    }
}

struct Placer<'a> {
    config: &'a LayoutConfig,
    expanded: &'a ExpansionSet,
    occupancy: Occupancy,
    placed: Vec<Node>,
}

impl Placer<'_> {
    fn place_domains(&mut self, groups: &[DomainGroup], top: f64, category: &mut Extent) {
        let columns = self.config.columns.max(1);
        let expanded = self.expanded;
        let mut domain_start_x = self.config.left_margin;

        for group in groups {
            let mut band = Extent::new(domain_start_x, top);
            let drawn = group.nodes.iter().filter(|n| is_visible(n, expanded));
            for (i, node) in drawn.enumerate() {
                let col = (i % columns) as f64;
                let row = (i / columns) as f64;
                let preferred = Point::new(
                    domain_start_x + col * self.config.step_x(),
                    top + row * self.config.step_y(),
                );
                self.place_with_subnodes(node, preferred, &mut band);
            }
            trace!(domain = %group.name, start = domain_start_x, right = band.right, "domain band placed");

            category.right = category.right.max(band.right);
            category.bottom = category.bottom.max(band.bottom);
            domain_start_x = band.right + self.config.domain_gap;
        }
    }

    fn place_row(&mut self, nodes: &[Node], top: f64, category: &mut Extent) {
        let expanded = self.expanded;
        let drawn = nodes.iter().filter(|n| is_visible(n, expanded));
        for (i, node) in drawn.enumerate() {
            let preferred = Point::new(self.config.left_margin + i as f64 * self.config.step_x(), top);
            self.place_with_subnodes(node, preferred, category);
        }
    }

    fn place_with_subnodes(&mut self, node: &Node, preferred: Point, extent: &mut Extent) {
        let probe = ProbeSequence::new(
            preferred,
            self.config.step_x(),
            self.config.step_y(),
            self.config.max_row_width,
        );
        let Some(rect) = self.place(node.clone(), probe, preferred) else {
            return;
        };
        extent.include(&rect);

        if !(node.is_parent && self.expanded.contains(&node.id)) {
            return;
        }

        let sub_columns = self.config.subnode_columns.max(1);
        let origin = Point::new(rect.right() + self.config.subnode_spacing, rect.origin.y);
        for (j, sub) in node.subnodes.iter().enumerate() {
            let col = (j % sub_columns) as f64;
            let row = (j / sub_columns) as f64;
            let preferred = origin
                + Point::new(col * self.config.subnode_step_x(), row * self.config.subnode_step_y());
            let probe = ProbeSequence::new(
                preferred,
                self.config.subnode_step_x(),
                self.config.subnode_step_y(),
                self.config.max_row_width,
            );
            if let Some(rect) = self.place(materialize_subnode(node, sub), probe, preferred) {
                extent.include(&rect);
            }
        }
    }

    fn place(&mut self, mut node: Node, probe: ProbeSequence, preferred: Point) -> Option<Rect> {
        let footprint = self.config.footprint();
        let position = self.occupancy.claim(probe, footprint)?;
        if position != preferred {
            debug!(node = %node.id, from = %preferred, to = %position, "probed past occupied cell");
        }
        trace!(node = %node.id, x = position.x, y = position.y, "placed");

        node.x = Some(position.x);
        node.y = Some(position.y);
        self.placed.push(node);
        Some(footprint.translate(position))
    }
}
