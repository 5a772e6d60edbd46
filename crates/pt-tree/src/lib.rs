//! Port Template Tree Model
//!
//! The labeled, ordered tree edited by the port template editor, together
//! with the pure structural operations that rewrite it.
//!
//! # Core Concepts
//!
//! - [`Node`]: One labeled element with an editable value and ordered children
//! - [`Forest`]: Ordered sequence of root nodes; the whole document
//! - [`NodeId`]: Stable string identity assigned at creation
//! - [`NodePatch`]: Field-wise merge applied by [`ops::update_node`]
//! - [`IdGenerator`]: Source of fresh identifiers (UUID v4 by default)
//!
//! Every operation in [`ops`] borrows the current forest and returns a fresh
//! one; the input is never mutated. Operations that name a missing node are
//! total: they return a structurally equal copy instead of an error.
//!
//! # Example
//!
//! ```rust
//! use pt_tree::{ops, query, Node, NodeId, NodePatch};
//!
//! let forest = ops::add_root(&[], Node::root(NodeId::from("a")));
//! let forest = ops::add_child(&forest, &NodeId::from("a"), Node::child(NodeId::from("b"))).forest;
//! let forest = ops::update_node(&forest, &NodeId::from("b"), &NodePatch::value("eth0")).forest;
//!
//! assert_eq!(query::find(&forest, &NodeId::from("b")).unwrap().value, "eth0");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod id;
mod node;

/// Pure structural rewrites of a forest
pub mod ops;

/// Read-side queries over a forest
pub mod query;

pub use id::{new_id, IdGenerator, UuidGenerator};
pub use node::{Forest, Node, NodeId, NodePatch, CHILD_LABEL, ROOT_LABEL};
pub use ops::Rewrite;
pub use query::Visit;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
