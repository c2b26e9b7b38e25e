//! In-place mutation of a forest.
//!
//! These operations edit the caller's forest directly and report the outcome
//! through their return value. A miss is logged at `debug` level and leaves
//! the forest unchanged.

use arbora_node::{FieldNames, Node};
use serde_json::Value;
use tracing::debug;

use crate::locator::with_located_mut;

/// Appends `node` to the children of the node with id `parent_id`.
///
/// A leaf parent gets a new children array, replacing an absent or non-array
/// attribute. Returns `false` only when the parent is not found.
pub fn push_tree(
    forest: &mut Vec<Node>,
    parent_id: &Value,
    node: Node,
    fields: &FieldNames,
) -> bool {
    insert_child(forest, parent_id, node, fields, |children, node| children.push(node))
}

/// Prepends `node` to the children of the node with id `parent_id`.
///
/// Same outcomes as [`push_tree`].
pub fn unshift_tree(
    forest: &mut Vec<Node>,
    parent_id: &Value,
    node: Node,
    fields: &FieldNames,
) -> bool {
    insert_child(forest, parent_id, node, fields, |children, node| children.insert(0, node))
}

fn insert_child(
    forest: &mut Vec<Node>,
    parent_id: &Value,
    node: Node,
    fields: &FieldNames,
    insert: impl FnOnce(&mut Vec<Node>, Node),
) -> bool {
    let inserted = with_located_mut(forest, parent_id, fields, |siblings, index| {
        match fields.children_or_insert(&mut siblings[index]) {
            Some(children) => {
                insert(children, node);
                true
            }
            None => {
                debug!("Node {} is not an object; child not inserted", parent_id);
                false
            }
        }
    });

    match inserted {
        Some(inserted) => inserted,
        None => {
            debug!("Parent {} not found; child not inserted", parent_id);
            false
        }
    }
}

/// Removes and returns the last child of the node with id `node_id`.
///
/// Returns `None` if the node is not found or has no children.
pub fn pop_tree(forest: &mut Vec<Node>, node_id: &Value, fields: &FieldNames) -> Option<Node> {
    take_child(forest, node_id, fields, Vec::pop)
}

/// Removes and returns the first child of the node with id `node_id`.
///
/// Returns `None` if the node is not found or has no children.
pub fn shift_tree(forest: &mut Vec<Node>, node_id: &Value, fields: &FieldNames) -> Option<Node> {
    take_child(forest, node_id, fields, |children| {
        if children.is_empty() {
            None
        } else {
            Some(children.remove(0))
        }
    })
}

fn take_child(
    forest: &mut Vec<Node>,
    node_id: &Value,
    fields: &FieldNames,
    take: impl FnOnce(&mut Vec<Node>) -> Option<Node>,
) -> Option<Node> {
    let Some(taken) = with_located_mut(forest, node_id, fields, |siblings, index| {
        fields.children_mut(&mut siblings[index]).and_then(take)
    }) else {
        debug!("Node {} not found; no child removed", node_id);
        return None;
    };
    taken
}

/// Removes the node with id `target_id`, together with its subtree, from
/// whichever sibling array holds it (roots included).
///
/// Returns `false` if no node has that id.
pub fn remove_tree(forest: &mut Vec<Node>, target_id: &Value, fields: &FieldNames) -> bool {
    let removed = with_located_mut(forest, target_id, fields, |siblings, index| {
        siblings.remove(index);
    });
    if removed.is_none() {
        debug!("Node {} not found; nothing removed", target_id);
    }
    removed.is_some()
}
