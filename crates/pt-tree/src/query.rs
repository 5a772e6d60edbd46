//! Read-side queries over a forest
//!
//! All lookups follow the same pre-order rule as [`crate::ops`], so a query
//! and a rewrite agree on which node a duplicated id refers to.

use crate::node::{Node, NodeId};
use std::collections::HashSet;

/// One step of a pre-order walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit<'a> {
    /// The visited node
    pub node: &'a Node,
    /// Distance from the top level (roots are 0)
    pub depth: usize,
    /// Whether no sibling follows this node
    pub is_last_sibling: bool,
}

/// Find the first node with the given id
#[must_use]
pub fn find<'a>(forest: &'a [Node], id: &NodeId) -> Option<&'a Node> {
    for node in forest {
        if node.id == *id {
            return Some(node);
        }
        if let Some(found) = find(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Check if any node carries the given id
#[inline]
#[must_use]
pub fn contains(forest: &[Node], id: &NodeId) -> bool {
    find(forest, id).is_some()
}

/// Count every node in the forest
#[must_use]
pub fn node_count(forest: &[Node]) -> usize {
    forest.iter().map(|n| 1 + node_count(&n.children)).sum()
}

/// Ids of the ancestors of `id`, parent first
///
/// Returns `None` if the id is absent and an empty vector for a root.
#[must_use]
pub fn ancestors(forest: &[Node], id: &NodeId) -> Option<Vec<NodeId>> {
    let mut trail = Vec::new();
    if trail_to(forest, id, &mut trail) {
        trail.reverse();
        Some(trail)
    } else {
        None
    }
}

fn trail_to(nodes: &[Node], id: &NodeId, trail: &mut Vec<NodeId>) -> bool {
    for node in nodes {
        if node.id == *id {
            return true;
        }
        trail.push(node.id.clone());
        if trail_to(&node.children, id, trail) {
            return true;
        }
        trail.pop();
    }
    false
}

/// Depth of the first node with the given id (roots are 0)
#[inline]
#[must_use]
pub fn depth_of(forest: &[Node], id: &NodeId) -> Option<usize> {
    ancestors(forest, id).map(|a| a.len())
}

/// Pre-order walk with depth and last-sibling information
#[must_use]
pub fn walk(forest: &[Node]) -> Vec<Visit<'_>> {
    let mut out = Vec::new();
    walk_into(forest, 0, &mut out);
    out
}

fn walk_into<'a>(nodes: &'a [Node], depth: usize, out: &mut Vec<Visit<'a>>) {
    let last = nodes.len().saturating_sub(1);
    for (i, node) in nodes.iter().enumerate() {
        out.push(Visit {
            node,
            depth,
            is_last_sibling: i == last,
        });
        walk_into(&node.children, depth + 1, out);
    }
}

/// Ids that occur more than once, in order of their second occurrence
#[must_use]
pub fn duplicate_ids(forest: &[Node]) -> Vec<NodeId> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut dups = Vec::new();
    for visit in walk(forest) {
        let id = &visit.node.id;
        if !seen.insert(id) && reported.insert(id) {
            dups.push(id.clone());
        }
    }
    dups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> NodeId {
        NodeId::from(s)
    }

    fn sample() -> Vec<Node> {
        vec![
            Node::root(id("r1")).with_children(vec![
                Node::child(id("a")).with_children(vec![Node::child(id("a1"))]),
                Node::child(id("b")),
            ]),
            Node::root(id("r2")),
        ]
    }

    #[test]
    fn find_nested() {
        let forest = sample();
        assert_eq!(find(&forest, &id("a1")).unwrap().id, id("a1"));
        assert!(find(&forest, &id("zz")).is_none());
        assert!(find(&[], &id("a")).is_none());
    }

    #[test]
    fn counts() {
        assert_eq!(node_count(&sample()), 5);
        assert_eq!(node_count(&[]), 0);
    }

    #[test]
    fn ancestors_parent_first() {
        let forest = sample();
        assert_eq!(ancestors(&forest, &id("a1")), Some(vec![id("a"), id("r1")]));
        assert_eq!(ancestors(&forest, &id("r2")), Some(vec![]));
        assert_eq!(ancestors(&forest, &id("zz")), None);
        assert_eq!(depth_of(&forest, &id("a1")), Some(2));
        assert_eq!(depth_of(&forest, &id("b")), Some(1));
    }

    #[test]
    fn walk_reports_depth_and_last_sibling() {
        let forest = sample();
        let steps: Vec<_> = walk(&forest)
            .into_iter()
            .map(|v| (v.node.id.as_str(), v.depth, v.is_last_sibling))
            .collect();
        assert_eq!(
            steps,
            vec![
                ("r1", 0, false),
                ("a", 1, false),
                ("a1", 2, true),
                ("b", 1, true),
                ("r2", 0, true),
            ]
        );
    }

    #[test]
    fn duplicates_reported_once() {
        let forest = vec![
            Node::root(id("x")).with_children(vec![Node::child(id("x")), Node::child(id("y"))]),
            Node::root(id("x")),
            Node::root(id("y")),
        ];
        assert_eq!(duplicate_ids(&forest), vec![id("x"), id("y")]);
        assert!(duplicate_ids(&sample()).is_empty());
    }
}
