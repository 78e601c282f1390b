//! Skilltree Knowledge Graph
//!
//! State, visibility, edges and progress for a graph of knowledge nodes.
//!
//! # Model
//!
//! Every node carries a list of prerequisite ids and, if it is a subnode, a
//! back-reference to its parent. A node is:
//! - **completed** when its id is in the caller's completed set
//! - **available** when all of its prerequisites are completed
//! - **locked** otherwise, including when the id is unknown
//!
//! # Purity
//!
//! Nothing in this crate holds state between calls or mutates its inputs.
//! Completed and expansion sets are caller-owned snapshots; toggles return
//! new values. Dangling ids are never errors: they are unsatisfiable for
//! state resolution and silently dropped for edge derivation.

mod node;
mod index;
mod state;
mod connections;
mod visibility;
mod filter;
mod progress;

pub use node::{Node, NodeId, NodeState, Connection};
pub use index::NodeIndex;
pub use state::{resolve_state, prereqs_met};
pub use connections::build_connections;
pub use visibility::{ExpansionSet, is_visible, get_visible_nodes, toggle_expansion};
pub use filter::{NodeFilter, filter_nodes, toggle_filter};
pub use progress::{calculate_progress, raw_ratio};

pub(crate) use state::resolve_state_in;

/// Caller-owned set of completed node ids.
pub type CompletedSet = std::collections::HashSet<NodeId>;
