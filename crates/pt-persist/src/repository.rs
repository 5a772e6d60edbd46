//! Forest persistence under a single key

use crate::error::PersistError;
use crate::store::KeyValueStore;
use pt_tree::{Forest, Node};
use serde::Deserialize;

/// Decode a stored forest
///
/// Every node nests an object inside its parent's `children` array, so the
/// decoder's recursion limit is lifted to read back any depth `save` wrote.
fn decode(text: &str) -> Result<Forest, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let forest = Forest::deserialize(&mut de)?;
    de.end()?;
    Ok(forest)
}

/// Loads, saves and clears one forest stored under one key
#[derive(Debug, Clone)]
pub struct TemplateRepository<S> {
    store: S,
    key: String,
    pretty_json: bool,
}

impl<S: KeyValueStore> TemplateRepository<S> {
    /// Create repository over `store` using `key`
    #[inline]
    #[must_use]
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            pretty_json: false,
        }
    }

    /// With pretty-printed JSON output
    #[inline]
    #[must_use]
    pub fn with_pretty_json(mut self, pretty_json: bool) -> Self {
        self.pretty_json = pretty_json;
        self
    }

    /// Key the forest is stored under
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Backing store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read and decode the stored forest
    ///
    /// # Errors
    /// Returns error if the store cannot be read or the value does not decode
    pub fn try_load(&self) -> Result<Option<Forest>, PersistError> {
        let Some(text) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        decode(&text)
            .map(Some)
            .map_err(|e| PersistError::corrupt(&self.key, e))
    }

    /// Read the stored forest, treating any failure as "no data"
    ///
    /// Failures are logged as warnings and never reach the caller.
    #[must_use]
    pub fn load(&self) -> Option<Forest> {
        match self.try_load() {
            Ok(forest) => forest,
            Err(e) => {
                tracing::warn!(key = %self.key, "Ignoring stored template: {}", e);
                None
            }
        }
    }

    /// Encode `forest` and write it, replacing any previous value
    ///
    /// # Errors
    /// Returns error if encoding fails or the store rejects the write
    pub fn save(&self, forest: &[Node]) -> Result<(), PersistError> {
        let text = if self.pretty_json {
            serde_json::to_string_pretty(forest)
        } else {
            serde_json::to_string(forest)
        }
        .map_err(PersistError::Encode)?;

        self.store.set(&self.key, &text)?;
        tracing::debug!(key = %self.key, bytes = text.len(), "Saved template");
        Ok(())
    }

    /// Remove the stored forest
    ///
    /// # Errors
    /// Returns error if the store rejects the removal
    pub fn clear(&self) -> Result<(), PersistError> {
        self.store.remove(&self.key)?;
        tracing::debug!(key = %self.key, "Cleared stored template");
        Ok(())
    }
}
