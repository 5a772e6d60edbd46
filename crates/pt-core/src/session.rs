//! Tree store: one editing session over one document
//!
//! Owns the forest, the active node id and the persistence wiring. All
//! structural commands are total; a command naming a node that does not
//! exist leaves the forest structurally unchanged and reports nothing.
//!
//! The active id is never validated or cleared automatically. It can name a
//! node that was deleted, or one that was never attached because
//! [`TreeStore::add_child`] missed its parent.

use crate::config::EditorConfig;
use crate::error::EditorResult;
use pt_persist::{KeyValueStore, TemplateRepository};
use pt_tree::{ops, query, Forest, IdGenerator, Node, NodeId, NodePatch, UuidGenerator};

/// Where the in-memory forest came from when the session opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadState {
    /// A stored document was decoded and installed
    LoadedFromStorage,
    /// Nothing usable was stored; the forest kept its prior contents
    LoadedEmpty,
}

/// Editing session over a forest persisted in a [`KeyValueStore`]
#[derive(Debug)]
pub struct TreeStore<S, G = UuidGenerator> {
    forest: Forest,
    active_node_id: Option<NodeId>,
    repository: TemplateRepository<S>,
    ids: G,
    load_state: LoadState,
}

impl<S: KeyValueStore> TreeStore<S> {
    /// Open session with random UUID ids, loading any stored document
    ///
    /// # Errors
    /// Returns error if `config` is invalid. A missing or corrupt stored
    /// document is not an error.
    pub fn open(store: S, config: &EditorConfig) -> EditorResult<Self> {
        Self::with_id_generator(store, config, UuidGenerator::new())
    }
}

impl<S: KeyValueStore, G: IdGenerator> TreeStore<S, G> {
    /// Open session drawing ids from `ids`, loading any stored document
    ///
    /// # Errors
    /// Returns error if `config` is invalid
    pub fn with_id_generator(store: S, config: &EditorConfig, ids: G) -> EditorResult<Self> {
        config.validate()?;
        let repository = TemplateRepository::new(store, config.storage_key.clone())
            .with_pretty_json(config.pretty_json);

        let mut session = Self {
            forest: Forest::new(),
            active_node_id: None,
            repository,
            ids,
            load_state: LoadState::LoadedEmpty,
        };
        session.reload();
        Ok(session)
    }

    /// Current forest
    #[inline]
    #[must_use]
    pub fn forest(&self) -> &[Node] {
        &self.forest
    }

    /// Currently active node id, possibly stale
    #[inline]
    #[must_use]
    pub fn active_node_id(&self) -> Option<&NodeId> {
        self.active_node_id.as_ref()
    }

    /// Active node, if the active id still names one
    #[must_use]
    pub fn active_node(&self) -> Option<&Node> {
        self.active_node_id
            .as_ref()
            .and_then(|id| query::find(&self.forest, id))
    }

    /// How the forest was populated when the session last loaded
    #[inline]
    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Persistence adapter backing this session
    #[inline]
    #[must_use]
    pub fn repository(&self) -> &TemplateRepository<S> {
        &self.repository
    }

    /// Append a new child under `parent` and make it active
    ///
    /// The new node is activated even if `parent` does not exist, in which
    /// case the forest is unchanged and the returned id names nothing.
    pub fn add_child(&mut self, parent: &NodeId) -> NodeId {
        let id = self.ids.next_id();
        let rewrite = ops::add_child(&self.forest, parent, Node::child(id.clone()));
        if !rewrite.matched {
            tracing::debug!(%parent, "add_child: parent not found");
        }
        self.forest = rewrite.forest;
        self.active_node_id = Some(id.clone());
        id
    }

    /// Append a new top-level node and make it active
    pub fn add_root(&mut self) -> NodeId {
        let id = self.ids.next_id();
        self.forest = ops::add_root(&self.forest, Node::root(id.clone()));
        self.active_node_id = Some(id.clone());
        id
    }

    /// Remove `id` together with its subtree
    ///
    /// The active id is left untouched even when it pointed into the removed
    /// subtree.
    pub fn delete_node(&mut self, id: &NodeId) {
        let rewrite = ops::delete_node(&self.forest, id);
        if !rewrite.matched {
            tracing::debug!(%id, "delete_node: node not found");
        }
        self.forest = rewrite.forest;
    }

    /// Merge `patch` into the node `id`
    pub fn update_node(&mut self, id: &NodeId, patch: &NodePatch) {
        let rewrite = ops::update_node(&self.forest, id, patch);
        if !rewrite.matched {
            tracing::debug!(%id, "update_node: node not found");
        }
        self.forest = rewrite.forest;
    }

    /// Set the value of node `id`
    #[inline]
    pub fn set_value(&mut self, id: &NodeId, value: impl Into<String>) {
        self.update_node(id, &NodePatch::value(value));
    }

    /// Set the read-only flag of node `id`
    #[inline]
    pub fn set_read_only(&mut self, id: &NodeId, read_only: bool) {
        self.update_node(id, &NodePatch::read_only(read_only));
    }

    /// Flip the read-only flag of node `id`
    pub fn toggle_read_only(&mut self, id: &NodeId) {
        if let Some(current) = query::find(&self.forest, id).map(|n| n.read_only) {
            self.set_read_only(id, !current);
        }
    }

    /// Set or clear the active node id without validation
    #[inline]
    pub fn set_active_node_id(&mut self, id: Option<NodeId>) {
        self.active_node_id = id;
    }

    /// Replace the whole forest
    #[inline]
    pub fn replace_tree(&mut self, forest: Forest) {
        self.forest = forest;
    }

    /// Load the stored document again
    ///
    /// A decodable document replaces the forest. A missing or corrupt one
    /// leaves the forest as it is; corruption is logged, never returned.
    pub fn reload(&mut self) -> LoadState {
        tracing::debug!(key = self.repository.key(), "Loading template");
        self.load_state = match self.repository.load() {
            Some(forest) => {
                let dups = query::duplicate_ids(&forest);
                if !dups.is_empty() {
                    tracing::warn!(count = dups.len(), "Stored template has duplicate node ids");
                }
                tracing::info!(
                    key = self.repository.key(),
                    nodes = query::node_count(&forest),
                    "Loaded template from storage"
                );
                self.replace_tree(forest);
                LoadState::LoadedFromStorage
            }
            None => LoadState::LoadedEmpty,
        };
        self.load_state
    }

    /// Write the current forest to the store
    ///
    /// # Errors
    /// Returns error if the store rejects the write. The session is unchanged
    /// either way.
    pub fn save(&self) -> EditorResult<()> {
        match self.repository.save(&self.forest) {
            Ok(()) => {
                tracing::info!(key = self.repository.key(), "Template saved");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(key = self.repository.key(), "Saving template failed: {}", e);
                Err(e.into())
            }
        }
    }

    /// Remove the stored document and reset the session to empty
    ///
    /// # Errors
    /// Returns error if the store rejects the removal, in which case the
    /// in-memory forest and active id are kept.
    pub fn clear(&mut self) -> EditorResult<()> {
        if let Err(e) = self.repository.clear() {
            tracing::warn!(key = self.repository.key(), "Clearing template failed: {}", e);
            return Err(e.into());
        }
        self.forest.clear();
        self.active_node_id = None;
        tracing::info!(key = self.repository.key(), "Template cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pt_persist::MemoryStore;

    fn counter() -> impl FnMut() -> NodeId {
        let mut n = 0;
        move || {
            n += 1;
            NodeId::new(format!("g{n}"))
        }
    }

    fn session() -> TreeStore<MemoryStore, impl FnMut() -> NodeId> {
        TreeStore::with_id_generator(MemoryStore::new(), &EditorConfig::default(), counter()).unwrap()
    }

    #[test]
    fn opens_empty() {
        let s = session();
        assert!(s.forest().is_empty());
        assert_eq!(s.active_node_id(), None);
        assert_eq!(s.load_state(), LoadState::LoadedEmpty);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = EditorConfig::new().with_storage_key("");
        assert!(TreeStore::open(MemoryStore::new(), &config).is_err());
    }

    #[test]
    fn add_root_then_child() {
        let mut s = session();
        let root = s.add_root();
        assert_eq!(root.as_str(), "g1");
        assert_eq!(s.active_node_id(), Some(&root));

        let child = s.add_child(&root);
        assert_eq!(s.active_node_id(), Some(&child));
        assert_eq!(s.active_node().unwrap().label, "child");
        assert_eq!(s.forest()[0].children[0].id, child);
    }

    #[test]
    fn toggle_read_only_flips() {
        let mut s = session();
        let root = s.add_root();
        s.toggle_read_only(&root);
        assert!(s.forest()[0].read_only);
        s.toggle_read_only(&root);
        assert!(!s.forest()[0].read_only);

        s.toggle_read_only(&NodeId::from("missing"));
        assert_eq!(s.forest().len(), 1);
    }

    #[test]
    fn active_node_resolves_only_live_ids() {
        let mut s = session();
        let root = s.add_root();
        s.delete_node(&root);
        assert_eq!(s.active_node_id(), Some(&root));
        assert!(s.active_node().is_none());
    }

    #[test]
    fn reload_keeps_forest_when_nothing_stored() {
        let mut s = session();
        s.add_root();
        assert_eq!(s.reload(), LoadState::LoadedEmpty);
        assert_eq!(s.forest().len(), 1);
    }
}
