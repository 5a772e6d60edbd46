//! Tree nodes and the forest that holds them
//!
//! The serialized shape is `{id, label, value, children, readOnly?}`; the
//! `readOnly` flag defaults to `false` when absent and is only written when
//! set, so documents from older writers load unchanged.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};

/// Label given to nodes created at the top level
pub const ROOT_LABEL: &str = "root";

/// Label given to nodes created beneath another node
pub const CHILD_LABEL: &str = "child";

/// Ordered sequence of root nodes
pub type Forest = Vec<Node>;

/// Stable node identity
///
/// Assigned once when the node is created and never rewritten. Stored as an
/// opaque string so hand-authored documents with non-UUID ids still load.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create id from any string
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One element of the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Identity, unique within a forest
    pub id: NodeId,
    /// Short descriptive label
    pub label: String,
    /// User-edited value
    pub value: String,
    /// Ordered children, owned by this node
    #[serde(default)]
    pub children: Vec<Node>,
    /// Presentation hint: the value field rejects edits when set
    #[serde(default, skip_serializing_if = "is_false")]
    pub read_only: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl Node {
    /// Create node with an empty value and no children
    #[inline]
    #[must_use]
    pub fn new(id: NodeId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            value: String::new(),
            children: Vec::new(),
            read_only: false,
        }
    }

    /// Create a top-level node
    #[inline]
    #[must_use]
    pub fn root(id: NodeId) -> Self {
        Self::new(id, ROOT_LABEL)
    }

    /// Create a nested node
    #[inline]
    #[must_use]
    pub fn child(id: NodeId) -> Self {
        Self::new(id, CHILD_LABEL)
    }

    /// With value
    #[inline]
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// With children
    #[inline]
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// With read-only flag
    #[inline]
    #[must_use]
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Whether this node was created at the top level
    #[inline]
    #[must_use]
    pub fn is_root_label(&self) -> bool {
        self.label == ROOT_LABEL
    }

    /// Copy every field except `children`, which is taken from the argument
    pub(crate) fn rebuilt(&self, children: Vec<Node>) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            value: self.value.clone(),
            children,
            read_only: self.read_only,
        }
    }

    /// Shallow merge: fields present in `patch` win, absent fields are kept
    #[must_use]
    pub fn merged(&self, patch: &NodePatch) -> Self {
        Self {
            id: self.id.clone(),
            label: patch.label.clone().unwrap_or_else(|| self.label.clone()),
            value: patch.value.clone().unwrap_or_else(|| self.value.clone()),
            children: patch
                .children
                .clone()
                .unwrap_or_else(|| self.children.clone()),
            read_only: patch.read_only.unwrap_or(self.read_only),
        }
    }
}

/// Partial node used by [`crate::ops::update_node`]
///
/// `id` is deliberately absent: identity is fixed at creation. Supplying
/// `children` replaces the whole subtree of the target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

impl NodePatch {
    /// Patch that changes nothing
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch that sets only the value
    #[inline]
    #[must_use]
    pub fn value(value: impl Into<String>) -> Self {
        Self::new().with_value(value)
    }

    /// Patch that sets only the read-only flag
    #[inline]
    #[must_use]
    pub fn read_only(read_only: bool) -> Self {
        Self::new().with_read_only(read_only)
    }

    /// With value
    #[inline]
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// With label
    #[inline]
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// With children (replaces the target's subtree)
    #[inline]
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = Some(children);
        self
    }

    /// With read-only flag
    #[inline]
    #[must_use]
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = Some(read_only);
        self
    }

    /// Check if the patch carries no fields
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.value.is_none()
            && self.children.is_none()
            && self.read_only.is_none()
    }
}
