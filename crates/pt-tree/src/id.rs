//! Identifier generation for new nodes

use crate::node::NodeId;
use uuid::Uuid;

/// Source of fresh node identifiers
///
/// Implementations must return values that do not collide with any id
/// previously handed out in the same session.
pub trait IdGenerator {
    /// Produce the next identifier
    fn next_id(&mut self) -> NodeId;
}

/// UUID v4 generator (hyphenated, lowercase)
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    /// Create new generator
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    #[inline]
    fn next_id(&mut self) -> NodeId {
        new_id()
    }
}

impl<F> IdGenerator for F
where
    F: FnMut() -> NodeId,
{
    #[inline]
    fn next_id(&mut self) -> NodeId {
        self()
    }
}

/// Generate a fresh random node identifier
#[inline]
#[must_use]
pub fn new_id() -> NodeId {
    NodeId::new(Uuid::new_v4().to_string())
}
