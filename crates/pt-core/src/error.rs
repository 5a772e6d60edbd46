//! Error types for the editing session
//!
//! Structural edits never fail: naming a missing node is a silent no-op.
//! Errors only arise from configuration and from writes to the durable store.

use pt_persist::{PersistError, StoreError};

/// Main editor error type
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// Persisting or clearing the document failed
    #[error("persistence error: {0}")]
    Persist(#[from] PersistError),

    /// Configuration is invalid
    #[error("configuration error: {0}")]
    Config(String),
}

impl EditorError {
    /// Whether the session can carry on after this error
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Persist(e) => e.is_recoverable(),
            Self::Config(_) => false,
        }
    }
}

impl From<StoreError> for EditorError {
    fn from(value: StoreError) -> Self {
        Self::Persist(PersistError::Store(value))
    }
}

/// Result type alias for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
