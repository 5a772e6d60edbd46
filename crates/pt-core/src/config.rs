//! Editor configuration

use crate::error::{EditorError, EditorResult};
use serde::{Deserialize, Serialize};

/// Key the document is stored under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "portTemplate";

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Durable store key holding the document
    pub storage_key: String,
    /// Write indented JSON
    pub pretty_json: bool,
}

impl EditorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With storage key
    #[inline]
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// With pretty-printed JSON
    #[inline]
    #[must_use]
    pub fn with_pretty_json(mut self, pretty_json: bool) -> Self {
        self.pretty_json = pretty_json;
        self
    }

    /// Parse from TOML; missing fields take their defaults
    ///
    /// # Errors
    /// Returns error if the text is not valid TOML for this shape or fails
    /// [`EditorConfig::validate`]
    pub fn from_toml_str(text: &str) -> EditorResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| EditorError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable
    ///
    /// # Errors
    /// Returns error if the storage key is blank
    pub fn validate(&self) -> EditorResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(EditorError::Config(
                "storage key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            pretty_json: false,
        }
    }
}
