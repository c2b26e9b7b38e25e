//! Relationship and depth queries.

use std::collections::HashMap;
use std::ops::ControlFlow;

use arbora_node::{FieldNames, IdKey, Node};
use serde_json::Value;

use crate::locator::{locate, node_at, siblings_at};
use crate::walk::walk;

/// Maps every node id to its 1-based depth (roots are at depth 1).
///
/// Nodes without an id attribute are skipped. When an id occurs more than
/// once, the last visited occurrence wins.
pub fn node_depth_map(forest: &[Node], fields: &FieldNames) -> HashMap<IdKey, usize> {
    let mut depths = HashMap::new();
    let _: ControlFlow<()> = walk(forest, fields, &mut |node, visit| {
        if let Some(id) = fields.id_of(node) {
            depths.insert(IdKey::from(id), visit.depth);
        }
        ControlFlow::Continue(())
    });
    depths
}

/// Returns the 1-based depth of the first node with id `target_id`.
pub fn get_node_depth(forest: &[Node], target_id: &Value, fields: &FieldNames) -> Option<usize> {
    locate(forest, target_id, fields).map(|path| path.len())
}

/// Returns the immediate parent of the node with id `target_id`.
///
/// Returns `None` both for a root and for an id that is not in the forest;
/// use [`includes_tree`](crate::includes_tree) to tell the two apart.
pub fn get_parent_tree<'a>(
    forest: &'a [Node],
    target_id: &Value,
    fields: &FieldNames,
) -> Option<&'a Node> {
    let path = locate(forest, target_id, fields)?;
    let (_, parent_path) = path.split_last()?;
    if parent_path.is_empty() {
        return None;
    }
    node_at(forest, parent_path, fields)
}

/// Returns the ancestors of the node with id `target_id`, root first.
///
/// A root has no ancestors and yields an empty list; a missing id yields
/// `None`.
pub fn get_ancestors_tree<'a>(
    forest: &'a [Node],
    target_id: &Value,
    fields: &FieldNames,
) -> Option<Vec<&'a Node>> {
    let path = locate(forest, target_id, fields)?;
    (1..path.len())
        .map(|len| node_at(forest, &path[..len], fields))
        .collect()
}

/// Returns the children of the node with id `target_id`.
///
/// A leaf (absent or non-array children attribute) yields an empty slice.
pub fn get_children_tree<'a>(
    forest: &'a [Node],
    target_id: &Value,
    fields: &FieldNames,
) -> Option<&'a [Node]> {
    let path = locate(forest, target_id, fields)?;
    let node = node_at(forest, &path, fields)?;
    Some(fields.children_of(node).map_or(&[][..], Vec::as_slice))
}

/// Returns the other members of the sibling array holding `target_id`, in
/// order. Roots are siblings of one another.
pub fn get_siblings_tree<'a>(
    forest: &'a [Node],
    target_id: &Value,
    fields: &FieldNames,
) -> Option<Vec<&'a Node>> {
    let path = locate(forest, target_id, fields)?;
    let (siblings, index) = siblings_at(forest, &path, fields)?;
    Some(
        siblings
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, node)| node)
            .collect(),
    )
}
