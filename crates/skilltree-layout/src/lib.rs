//! Skilltree Layout Engine
//!
//! Deterministic, collision-free placement of grouped knowledge nodes.
//!
//! # Dataset Shape
//!
//! Datasets are ordered categories. A category is either a set of domains,
//! each holding a node list, or a single flat node list. Parent nodes embed
//! their subnodes one level deep.
//!
//! # Guarantees
//!
//! - **Deterministic**: identical input gives identical positions, in the
//!   same order
//! - **Collision-free**: no two placed footprints overlap, across every
//!   category, domain and sub-grid
//! - **Total**: absent, empty or partly malformed datasets degrade to
//!   whatever could be placed; nothing panics or loops forever
//!
//! # Usage
//!
//! ```
//! use skilltree_graph::{ExpansionSet, Node};
//! use skilltree_layout::{layout, Dataset};
//!
//! let dataset = Dataset::new().with_domains(
//!     "foundation",
//!     [("math", vec![Node::new("alg", "Algebra"), Node::new("calc", "Calculus")])],
//! );
//! let placed = layout(Some(&dataset), Some(&ExpansionSet::new()));
//! assert_eq!(placed.nodes.len(), 2);
//! ```

mod geometry;
mod probe;
mod occupancy;
mod config;
mod dataset;
mod engine;
mod view;
mod error;

pub use geometry::{Point, Rect};
pub use probe::ProbeSequence;
pub use occupancy::Occupancy;
pub use config::{LayoutConfig, MAX_DISTANCE};
pub use dataset::{Category, CategoryContent, Dataset, DomainGroup};
pub use engine::{layout, CategoryLabel, Layout, LayoutEngine};
pub use view::{GraphView, RenderNode};
pub use error::{Error, Result};
