//! Structural validation.
//!
//! Only the tree shape is checked: nodes must be objects, and a children
//! attribute, when present, must be an array of valid nodes. Ids and payload
//! attributes are not inspected.

use arbora_node::FieldNames;
use serde_json::Value;

/// Returns true if `value` is a plausible single tree.
///
/// A `null` children attribute is invalid; an absent one or an empty array
/// is fine.
pub fn is_single_tree(value: &Value, fields: &FieldNames) -> bool {
    let Some(node) = value.as_object() else {
        return false;
    };
    match node.get(&*fields.children) {
        None => true,
        Some(Value::Array(children)) => children.iter().all(|child| is_single_tree(child, fields)),
        Some(_) => false,
    }
}

/// Returns true if `value` is an array whose every element is a single tree.
pub fn is_multiple_trees(value: &Value, fields: &FieldNames) -> bool {
    value
        .as_array()
        .is_some_and(|trees| trees.iter().all(|tree| is_single_tree(tree, fields)))
}
