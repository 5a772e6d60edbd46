//! Port Template Persistence
//!
//! Stores a [`pt_tree::Forest`] as JSON text under a single string key in a
//! durable key-value store.
//!
//! # Core Concepts
//!
//! - [`KeyValueStore`]: Seam to the durable store (string keys, string values)
//! - [`MemoryStore`]: Shared in-memory store, handy for sessions and tests
//! - [`FileStore`]: One JSON file per key inside a directory
//! - [`TemplateRepository`]: Load/save/clear of one forest under one key
//!
//! Loading never fails the caller: a missing key and a corrupt value both
//! come back as "no data", the latter with a warning. Writes report their
//! failures so the caller can surface them.
//!
//! # Example
//!
//! ```rust
//! use pt_persist::{MemoryStore, TemplateRepository};
//! use pt_tree::{Node, NodeId};
//!
//! let repo = TemplateRepository::new(MemoryStore::new(), "portTemplate");
//! repo.save(&[Node::root(NodeId::from("r"))]).unwrap();
//! assert_eq!(repo.load().unwrap().len(), 1);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod file;
mod repository;
mod store;

pub use error::{PersistError, StoreError};
pub use file::FileStore;
pub use repository::TemplateRepository;
pub use store::{KeyValueStore, MemoryStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
