//! Error types for persistence
//!
//! - [`StoreError`]: the durable store itself failed (read, write, remove)
//! - [`PersistError`]: encoding or decoding the forest failed, or the store did

use std::path::PathBuf;

/// Errors raised by a [`crate::KeyValueStore`] backend
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Key cannot be represented by this backend
    #[error("invalid storage key: '{0}'")]
    InvalidKey(String),

    /// IO error touching the backing file
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backend refused the operation (quota, closed handle, ...)
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised while persisting or restoring a forest
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Underlying store failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Forest could not be encoded
    #[error("failed to encode template: {0}")]
    Encode(#[source] serde_json::Error),

    /// Stored text does not decode as a forest
    #[error("stored template under '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl PersistError {
    /// Create corrupt-data error for key
    pub fn corrupt(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Corrupt {
            key: key.into(),
            source,
        }
    }

    /// Whether the editing session can carry on after this error
    ///
    /// Corrupt data falls back to an empty document and transient store
    /// failures leave the in-memory forest intact. A key the backend cannot
    /// represent will fail every time.
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::Store(StoreError::InvalidKey(_)) | Self::Encode(_)
        )
    }
}
