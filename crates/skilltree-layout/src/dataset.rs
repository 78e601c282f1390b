//! Hierarchical content datasets.
//!
//! A dataset is an ordered list of categories. Each category holds either a
//! list of domains (each with its own node list) or a flat node list. Parent
//! nodes embed their subnodes one level deep.
//!
//! Catalog JSON looks like:
//!
//! ```json
//! {
//!   "foundation": { "math": [ { "id": "alg", "name": "Algebra" } ] },
//!   "mastery": [ { "id": "capstone", "name": "Capstone" } ]
//! }
//! ```
//!
//! Loading only walks that documented shape. Unknown properties are never
//! visited, entries without a usable id are skipped, and missing optional
//! fields take their defaults.

use serde_json::{Map, Value};
use skilltree_graph::{Node, NodeId};
use tracing::debug;

use crate::Result;

/// Nodes of one domain inside a category.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DomainGroup {
    pub name: String,
    pub nodes: Vec<Node>,
}

impl DomainGroup {
    pub fn new(name: impl Into<String>, nodes: Vec<Node>) -> Self {
        Self { name: name.into(), nodes }
    }
}

/// What a category holds.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryContent {
    /// Domain bands laid out left to right.
    Domains(Vec<DomainGroup>),
    /// A single row of nodes.
    Nodes(Vec<Node>),
}

impl CategoryContent {
    /// Top-level nodes in iteration order, without subnodes.
    pub fn nodes(&self) -> Box<dyn Iterator<Item = &Node> + '_> {
        match self {
            CategoryContent::Domains(groups) => Box::new(groups.iter().flat_map(|g| g.nodes.iter())),
            CategoryContent::Nodes(nodes) => Box::new(nodes.iter()),
        }
    }
}

/// One category band.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub content: CategoryContent,
}

/// An ordered hierarchical dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub categories: Vec<Category>,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a domain-grouped category.
    pub fn with_domains<I, S>(mut self, category: impl Into<String>, domains: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Node>)>,
        S: Into<String>,
    {
        let groups = domains.into_iter().map(|(name, nodes)| DomainGroup::new(name, nodes)).collect();
        self.categories.push(Category {
            name: category.into(),
            content: CategoryContent::Domains(groups),
        });
        self
    }

    /// Append a flat category.
    pub fn with_nodes(mut self, category: impl Into<String>, nodes: Vec<Node>) -> Self {
        self.categories.push(Category {
            name: category.into(),
            content: CategoryContent::Nodes(nodes),
        });
        self
    }

    /// Parse catalog JSON text.
    ///
    /// Only malformed JSON is an error. `null`, non-object roots and
    /// malformed entries degrade to whatever could be read.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value))
    }

    /// Read a dataset from a JSON value, skipping anything off-shape.
    pub fn from_value(value: &Value) -> Self {
        let Some(categories) = value.as_object() else {
            if !value.is_null() {
                debug!("dataset root is not an object, treating as empty");
            }
            return Self::default();
        };

        let categories = categories
            .iter()
            .filter_map(|(name, content)| {
                let content = match content {
                    Value::Array(items) => CategoryContent::Nodes(nodes_from_array(items, name, "")),
                    Value::Object(domains) => CategoryContent::Domains(domains_from_object(domains, name)),
                    _ => {
                        debug!(category = %name, "skipping category with unsupported content");
                        return None;
                    }
                };
                Some(Category { name: name.clone(), content })
            })
            .collect();

        Self { categories }
    }

    /// Every node as an independent record.
    ///
    /// Each top-level node is followed by its subnodes, whose `parent_id`
    /// points back at it. Subnodes never carry children of their own.
    pub fn flatten(&self) -> Vec<Node> {
        let mut out = Vec::with_capacity(self.node_count());
        for node in self.categories.iter().flat_map(|c| c.content.nodes()) {
            out.push(node.clone());
            out.extend(subnodes_of(node).iter().map(|sub| materialize_subnode(node, sub)));
        }
        out
    }

    /// Total node count, subnodes included.
    pub fn node_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|c| c.content.nodes())
            .map(|n| 1 + subnodes_of(n).len())
            .sum()
    }

    /// Check if there are no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}

/// Subnodes that count as part of the dataset.
///
/// Only parents own subnodes. Anything embedded under a node without
/// `is_parent` is never flattened, drawn or counted.
pub(crate) fn subnodes_of(node: &Node) -> &[Node] {
    if node.is_parent {
        &node.subnodes
    } else {
        &[]
    }
}

/// A subnode as a standalone record owned by `parent`.
pub(crate) fn materialize_subnode(parent: &Node, sub: &Node) -> Node {
    let mut record = sub.clone();
    record.parent_id = Some(parent.id.clone());
    record.subnodes.clear();
    record.is_parent = false;
    if record.category.is_empty() {
        record.category = parent.category.clone();
    }
    if record.domain.is_empty() {
        record.domain = parent.domain.clone();
    }
    record
}

fn domains_from_object(domains: &Map<String, Value>, category: &str) -> Vec<DomainGroup> {
    domains
        .iter()
        .filter_map(|(domain, nodes)| match nodes {
            Value::Array(items) => Some(DomainGroup::new(domain.clone(), nodes_from_array(items, category, domain))),
            _ => {
                debug!(category, domain = %domain, "skipping domain that is not a node list");
                None
            }
        })
        .collect()
}

fn nodes_from_array(items: &[Value], category: &str, domain: &str) -> Vec<Node> {
    items
        .iter()
        .filter_map(|item| {
            let node = node_from_value(item, category, domain, true);
            if node.is_none() {
                debug!(category, domain, "skipping node entry without an id");
            }
            node
        })
        .collect()
}

fn id_from_value(value: &Value) -> Option<NodeId> {
    match value {
        Value::String(s) if !s.is_empty() => Some(NodeId::new(s.clone())),
        Value::Number(n) => Some(NodeId::new(n.to_string())),
        _ => None,
    }
}

fn node_from_value(value: &Value, category: &str, domain: &str, top_level: bool) -> Option<Node> {
    let fields = value.as_object()?;
    let id = id_from_value(fields.get("id")?)?;

    let text = |key: &str, fallback: &str| {
        fields
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(fallback)
            .to_owned()
    };
    let count = |key: &str, fallback: u32| {
        fields
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(fallback)
    };

    let prereqs: Vec<NodeId> = fields
        .get("prereqs")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(id_from_value).collect())
        .unwrap_or_default();

    let mut node = Node {
        name: text("name", ""),
        domain: text("domain", domain),
        category: text("category", category),
        difficulty: count("difficulty", 1).max(1),
        points: count("points", 0),
        prereqs,
        parent_id: fields.get("parentId").and_then(id_from_value),
        ..Node::new(id, "")
    };

    // One level only: subnodes of subnodes are not read.
    let items = fields
        .get("subnodes")
        .and_then(Value::as_array)
        .filter(|items| top_level && !items.is_empty());
    // Without an explicit flag, a non-empty subnode list makes a parent.
    node.is_parent = fields
        .get("isParent")
        .and_then(Value::as_bool)
        .unwrap_or(items.is_some());

    if node.is_parent {
        if let Some(items) = items {
            let subnodes: Vec<Node> = items
                .iter()
                .filter_map(|item| node_from_value(item, &node.category, &node.domain, false))
                .map(|sub| materialize_subnode(&node, &sub))
                .collect();
            node.subnodes = subnodes;
        }
    }

    Some(node)
}
