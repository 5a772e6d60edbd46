//! Testing utilities for the port template workspace
//!
//! Shared fixtures: deterministic ids, sample documents, and stores that
//! misbehave on purpose.

#![allow(missing_docs)]

use pt_persist::{KeyValueStore, MemoryStore, StoreError};
use pt_tree::{Forest, IdGenerator, Node, NodeId};

/// Yields `node-1`, `node-2`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> NodeId {
        self.next += 1;
        NodeId::new(format!("node-{}", self.next))
    }
}

/// Two roots; the first has two ports, one of which has a sub-interface
///
/// ```text
/// sw1 ─┬─ ge-0 ── ge-0.10
///      └─ ge-1 (read-only)
/// sw2
/// ```
pub fn sample_forest() -> Forest {
    vec![
        Node::root(NodeId::from("sw1"))
            .with_value("core-switch")
            .with_children(vec![
                Node::child(NodeId::from("ge-0"))
                    .with_value("uplink")
                    .with_children(vec![Node::child(NodeId::from("ge-0.10")).with_value("vlan10")]),
                Node::child(NodeId::from("ge-1"))
                    .with_value("mgmt")
                    .with_read_only(true),
            ]),
        Node::root(NodeId::from("sw2")).with_value("access-switch"),
    ]
}

/// Memory store holding `raw` under `key`
pub fn store_with(key: &str, raw: &str) -> MemoryStore {
    let store = MemoryStore::new();
    store.set(key, raw).unwrap();
    store
}

/// Reads succeed from an inner memory store; writes and removals fail
#[derive(Debug, Clone, Default)]
pub struct ReadOnlyStore {
    pub inner: MemoryStore,
}

impl ReadOnlyStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self { inner }
    }
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("quota exceeded".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store is read-only".to_string()))
    }
}
