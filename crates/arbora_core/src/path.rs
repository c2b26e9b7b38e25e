//! Index-path addressing.
//!
//! A path lists one sibling index per level, starting at the forest roots.
//! `[0, 1]` is the second child of the first root.

use arbora_node::{FieldNames, Node};
use serde_json::Value;

use crate::locator::{locate, node_at};

/// Returns the index path from the roots down to the first node (pre-order)
/// whose id equals `target_id`.
pub fn index_of_tree(
    forest: &[Node],
    target_id: &Value,
    fields: &FieldNames,
) -> Option<Vec<usize>> {
    locate(forest, target_id, fields)
}

/// Resolves an index path back to a node.
///
/// Returns `None` for an empty path, an out-of-range index, or a path that
/// descends through a node whose children attribute is not an array.
pub fn at_index_of_tree<'a>(
    forest: &'a [Node],
    path: &[usize],
    fields: &FieldNames,
) -> Option<&'a Node> {
    node_at(forest, path, fields)
}

/// Returns the child at `index` of the node with id `parent_id`.
///
/// Negative indices count from the end, so `-1` is the last child. Indices
/// outside the children after that adjustment yield `None`, as does a
/// missing parent or one without an array of children.
pub fn at_tree<'a>(
    forest: &'a [Node],
    parent_id: &Value,
    index: isize,
    fields: &FieldNames,
) -> Option<&'a Node> {
    let path = locate(forest, parent_id, fields)?;
    let parent = node_at(forest, &path, fields)?;
    let children = fields.children_of(parent)?;
    let resolved = if index < 0 {
        children.len().checked_sub(index.unsigned_abs())?
    } else {
        index.unsigned_abs()
    };
    children.get(resolved)
}
