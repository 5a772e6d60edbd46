//! Pure structural rewrites of a forest
//!
//! Each operation borrows the current forest and returns a freshly built one
//! inside a [`Rewrite`]. Targets are matched by id in pre-order (root to
//! leaf, siblings in order) and at most one node is affected per call, so
//! duplicate ids from hand-authored data resolve to the first match. A miss
//! yields a structurally equal copy with `matched == false`.

use crate::node::{Forest, Node, NodeId, NodePatch};

/// Result of a structural rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The rebuilt forest
    pub forest: Forest,
    /// Whether a node with the target id was found
    pub matched: bool,
}

/// Append `node` to the top level
#[must_use]
pub fn add_root(forest: &[Node], node: Node) -> Forest {
    let mut out = forest.to_vec();
    out.push(node);
    out
}

/// Append `child` to the children of the first node whose id is `parent`
#[must_use]
pub fn add_child(forest: &[Node], parent: &NodeId, child: Node) -> Rewrite {
    let mut pending = Some(child);
    let forest = append_under(forest, parent, &mut pending);
    Rewrite {
        forest,
        matched: pending.is_none(),
    }
}

fn append_under(nodes: &[Node], parent: &NodeId, pending: &mut Option<Node>) -> Forest {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if pending.is_some() && node.id == *parent {
            let mut children = node.children.clone();
            children.extend(pending.take());
            out.push(node.rebuilt(children));
        } else {
            let children = append_under(&node.children, parent, pending);
            out.push(node.rebuilt(children));
        }
    }
    out
}

/// Remove the first node whose id is `target`, along with its subtree
#[must_use]
pub fn delete_node(forest: &[Node], target: &NodeId) -> Rewrite {
    let mut matched = false;
    let forest = remove_from(forest, target, &mut matched);
    Rewrite { forest, matched }
}

fn remove_from(nodes: &[Node], target: &NodeId, matched: &mut bool) -> Forest {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if !*matched && node.id == *target {
            *matched = true;
            continue;
        }
        let children = remove_from(&node.children, target, matched);
        out.push(node.rebuilt(children));
    }
    out
}

/// Merge `patch` into the first node whose id is `target`
#[must_use]
pub fn update_node(forest: &[Node], target: &NodeId, patch: &NodePatch) -> Rewrite {
    let mut matched = false;
    let forest = patch_in(forest, target, patch, &mut matched);
    Rewrite { forest, matched }
}

fn patch_in(nodes: &[Node], target: &NodeId, patch: &NodePatch, matched: &mut bool) -> Forest {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if !*matched && node.id == *target {
            *matched = true;
            out.push(node.merged(patch));
        } else {
            let children = patch_in(&node.children, target, patch, matched);
            out.push(node.rebuilt(children));
        }
    }
    out
}
