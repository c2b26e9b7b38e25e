//! Find a node by id, then act on it.
//!
//! The search is a depth-first, pre-order scan for the first node whose id
//! strictly equals the target. It stops at the match, so later siblings are
//! never visited. A hit is recorded as an index path (one sibling index per
//! level, roots first), which the read and write helpers below follow back
//! down to the sibling array that holds the node.

use arbora_node::{FieldNames, Node};
use serde_json::Value;

/// Returns the index path of the first node whose id equals `target`.
pub(crate) fn locate(forest: &[Node], target: &Value, fields: &FieldNames) -> Option<Vec<usize>> {
    let mut path = Vec::new();
    search(forest, target, fields, &mut path).then_some(path)
}

fn search(nodes: &[Node], target: &Value, fields: &FieldNames, path: &mut Vec<usize>) -> bool {
    for (index, node) in nodes.iter().enumerate() {
        path.push(index);
        if fields.has_id(node, target) {
            return true;
        }
        if let Some(children) = fields.children_of(node) {
            if search(children, target, fields, path) {
                return true;
            }
        }
        path.pop();
    }
    false
}

/// Follows `path` and returns the sibling array holding its last step,
/// together with that step's index.
///
/// Returns `None` for an empty path, an out-of-range index at any level, or
/// an intermediate node whose children attribute is not an array.
pub(crate) fn siblings_at<'a>(
    forest: &'a [Node],
    path: &[usize],
    fields: &FieldNames,
) -> Option<(&'a [Node], usize)> {
    let (&last, ancestors) = path.split_last()?;
    let mut siblings = forest;
    for &index in ancestors {
        siblings = fields.children_of(siblings.get(index)?)?.as_slice();
    }
    if last < siblings.len() {
        Some((siblings, last))
    } else {
        None
    }
}

/// Mutable counterpart of [`siblings_at`].
pub(crate) fn siblings_at_mut<'a>(
    forest: &'a mut Vec<Node>,
    path: &[usize],
    fields: &FieldNames,
) -> Option<(&'a mut Vec<Node>, usize)> {
    let (&last, ancestors) = path.split_last()?;
    let mut siblings = forest;
    for &index in ancestors {
        siblings = fields.children_mut(siblings.get_mut(index)?)?;
    }
    if last < siblings.len() {
        Some((siblings, last))
    } else {
        None
    }
}

/// Returns the node at `path`.
pub(crate) fn node_at<'a>(
    forest: &'a [Node],
    path: &[usize],
    fields: &FieldNames,
) -> Option<&'a Node> {
    let (siblings, index) = siblings_at(forest, path, fields)?;
    siblings.get(index)
}

/// Locates `target` and hands its sibling array and index to `action`.
///
/// Returns `None` without calling `action` when no node has that id.
pub(crate) fn with_located_mut<'a, R>(
    forest: &'a mut Vec<Node>,
    target: &Value,
    fields: &FieldNames,
    action: impl FnOnce(&'a mut Vec<Node>, usize) -> R,
) -> Option<R> {
    let path = locate(forest.as_slice(), target, fields)?;
    let (siblings, index) = siblings_at_mut(forest, &path, fields)?;
    Some(action(siblings, index))
}

/// Returns true if any node in the forest has the id `target`.
pub fn includes_tree(forest: &[Node], target: &Value, fields: &FieldNames) -> bool {
    locate(forest, target, fields).is_some()
}
