//! Array-style traversals over a whole forest.
//!
//! These mirror the slice methods (`map`, `filter`, `find`, `for_each`,
//! `any`, `all`) but visit every node at every depth in pre-order.

use std::ops::ControlFlow;

use arbora_node::{FieldNames, Node};

use crate::walk::walk;

/// Returns `callback(node)` for every node, in visitation order.
pub fn map_tree<'a, R>(
    forest: &'a [Node],
    mut callback: impl FnMut(&'a Node) -> R,
    fields: &FieldNames,
) -> Vec<R> {
    let mut results = Vec::new();
    let _: ControlFlow<()> = walk(forest, fields, &mut |node, _| {
        results.push(callback(node));
        ControlFlow::Continue(())
    });
    results
}

/// Returns every node for which `predicate(node, index_within_parent)` holds.
///
/// Rejecting a node does not prune its subtree: descendants are still
/// visited and tested on their own.
pub fn filter_tree<'a>(
    forest: &'a [Node],
    mut predicate: impl FnMut(&'a Node, usize) -> bool,
    fields: &FieldNames,
) -> Vec<&'a Node> {
    let mut matches = Vec::new();
    let _: ControlFlow<()> = walk(forest, fields, &mut |node, visit| {
        if predicate(node, visit.index) {
            matches.push(node);
        }
        ControlFlow::Continue(())
    });
    matches
}

/// Returns the first node in pre-order satisfying `predicate`.
pub fn find_tree<'a>(
    forest: &'a [Node],
    mut predicate: impl FnMut(&'a Node) -> bool,
    fields: &FieldNames,
) -> Option<&'a Node> {
    walk(forest, fields, &mut |node, _| {
        if predicate(node) {
            ControlFlow::Break(node)
        } else {
            ControlFlow::Continue(())
        }
    })
    .break_value()
}

/// Calls `callback` for every node in pre-order.
pub fn for_each_tree<'a>(
    forest: &'a [Node],
    mut callback: impl FnMut(&'a Node),
    fields: &FieldNames,
) {
    let _: ControlFlow<()> = walk(forest, fields, &mut |node, _| {
        callback(node);
        ControlFlow::Continue(())
    });
}

/// Returns true if any node at any depth satisfies `predicate`.
///
/// Stops at the first match.
pub fn some_tree<'a>(
    forest: &'a [Node],
    predicate: impl FnMut(&'a Node) -> bool,
    fields: &FieldNames,
) -> bool {
    find_tree(forest, predicate, fields).is_some()
}

/// Returns true if every node at every depth satisfies `predicate`.
///
/// Stops at the first violation; an empty forest is vacuously true.
pub fn every_tree<'a>(
    forest: &'a [Node],
    mut predicate: impl FnMut(&'a Node) -> bool,
    fields: &FieldNames,
) -> bool {
    walk(forest, fields, &mut |node, _| {
        if predicate(node) {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    })
    .is_continue()
}

/// Returns the number of nodes in the forest.
pub fn count_tree(forest: &[Node], fields: &FieldNames) -> usize {
    let mut count = 0;
    for_each_tree(forest, |_| count += 1, fields);
    count
}
