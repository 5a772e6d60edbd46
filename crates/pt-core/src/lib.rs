//! Port Template Editor Core
//!
//! The editing session behind the port template editor:
//! - Holds the forest and the active node id
//! - Applies structural commands (add, delete, update, replace)
//! - Loads the stored document on open and saves or clears it on request
//!
//! The presentation layer reads [`TreeStore::forest`] and
//! [`TreeStore::active_node_id`] and calls the command methods; nothing else
//! is shared. A session is an explicit value: construct one per document and
//! pass it by reference.
//!
//! # Example
//!
//! ```rust
//! use pt_core::{EditorConfig, TreeStore};
//! use pt_persist::MemoryStore;
//!
//! # fn main() -> Result<(), pt_core::EditorError> {
//! let store = MemoryStore::new();
//! let mut session = TreeStore::open(store.clone(), &EditorConfig::new())?;
//!
//! let root = session.add_root();
//! let port = session.add_child(&root);
//! session.set_value(&port, "ge-0/0/1");
//! session.save()?;
//!
//! let reopened = TreeStore::open(store, &EditorConfig::new())?;
//! assert_eq!(reopened.forest(), session.forest());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod config;
pub mod error;
pub mod session;
pub mod telemetry;

// Re-exports for convenience
pub use config::{EditorConfig, DEFAULT_STORAGE_KEY};
pub use error::{EditorError, EditorResult};
pub use session::{LoadState, TreeStore};
pub use telemetry::{init_test_tracing, init_tracing};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the editor core
    pub use crate::{
        EditorConfig, EditorError, EditorResult, LoadState, TreeStore, DEFAULT_STORAGE_KEY,
    };
    pub use pt_persist::{FileStore, KeyValueStore, MemoryStore, TemplateRepository};
    pub use pt_tree::{Forest, Node, NodeId, NodePatch, CHILD_LABEL, ROOT_LABEL};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
