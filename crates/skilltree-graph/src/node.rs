//! Knowledge node records.
//!
//! A node is one learning unit. Nodes are plain records supplied by the
//! content catalog; nothing here validates cross-references. Prerequisite
//! and parent ids may point at nodes that do not exist, and every consumer
//! in this crate treats such references as unsatisfiable rather than as
//! errors.

use std::borrow::Borrow;
use std::fmt;

/// Stable identifier of a knowledge node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(pub String);

impl NodeId {
    /// Create an id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single learning unit.
///
/// Optional catalog fields default to empty values, so a partially filled
/// record is still a usable node. `x`/`y` are only ever written by the
/// layout engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Node {
    pub id: NodeId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub domain: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: String,
    #[cfg_attr(feature = "serde", serde(default = "default_difficulty"))]
    pub difficulty: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub points: u32,
    /// Ids that must be completed first, in authoring order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub prereqs: Vec<NodeId>,
    /// Present iff this node is a subnode.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub parent_id: Option<NodeId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_parent: bool,
    /// Children owned by a parent node. Only one level is ever traversed.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub subnodes: Vec<Node>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub x: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub y: Option<f64>,
}

#[cfg(feature = "serde")]
fn default_difficulty() -> u32 {
    1
}

impl Node {
    /// Create a top-level node with no prerequisites.
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            domain: String::new(),
            category: String::new(),
            difficulty: 1,
            points: 0,
            prereqs: Vec::new(),
            parent_id: None,
            is_parent: false,
            subnodes: Vec::new(),
            x: None,
            y: None,
        }
    }

    /// Set the grouping keys.
    pub fn in_group(mut self, category: impl Into<String>, domain: impl Into<String>) -> Self {
        self.category = category.into();
        self.domain = domain.into();
        self
    }

    /// Set the prerequisite list.
    pub fn with_prereqs<I, T>(mut self, prereqs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        self.prereqs = prereqs.into_iter().map(Into::into).collect();
        self
    }

    /// Mark this node as a subnode of `parent`.
    pub fn with_parent(mut self, parent: impl Into<NodeId>) -> Self {
        self.parent_id = Some(parent.into());
        self
    }

    /// Attach children, marking this node as a parent.
    pub fn with_subnodes(mut self, subnodes: Vec<Node>) -> Self {
        self.is_parent = true;
        self.subnodes = subnodes;
        self
    }

    /// True for subnodes.
    #[inline]
    pub fn is_subnode(&self) -> bool {
        self.parent_id.is_some()
    }

    /// True when the node owns at least one child and can be expanded.
    #[inline]
    pub fn is_expandable(&self) -> bool {
        self.is_parent && !self.subnodes.is_empty()
    }

    /// Assigned position, if the layout engine has placed this node.
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.x?, self.y?))
    }
}

/// Computed status of a node. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NodeState {
    Locked,
    Available,
    Completed,
}

impl NodeState {
    /// Lowercase name as used by rendering layers.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeState::Locked => "locked",
            NodeState::Available => "available",
            NodeState::Completed => "completed",
        }
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed edge: `from` comes before `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    pub from: NodeId,
    pub to: NodeId,
}

impl Connection {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}
