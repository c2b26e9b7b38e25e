//! Pre-order walk over a forest.
//!
//! Every read-only traversal in this crate is a thin wrapper around [`walk`].
//! A node is visited before its children, siblings left to right, and a
//! node's children are entered only when its children attribute is an array.

use std::ops::ControlFlow;

use arbora_node::{FieldNames, Node};

/// Result type for walk callbacks.
///
/// - `ControlFlow::Continue(())` - keep walking
/// - `ControlFlow::Break(value)` - stop and hand `value` back to the caller
pub type VisitResult<B = ()> = ControlFlow<B>;

/// Position of a visited node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    /// Index of the node within its sibling array.
    pub index: usize,
    /// 1-based depth; roots are at depth 1.
    pub depth: usize,
}

/// Walks `forest` in pre-order, calling `visitor` for every node.
///
/// # Returns
///
/// `ControlFlow::Continue(())` if every node was visited, or the first
/// `ControlFlow::Break` produced by the visitor.
///
/// # Example
///
/// ```rust
/// use std::ops::ControlFlow;
/// use arbora_core::{walk, FieldNames};
/// use serde_json::json;
///
/// let forest = vec![json!({ "id": 1, "children": [{ "id": 2 }] })];
/// let mut depths = Vec::new();
///
/// let result: ControlFlow<()> = walk(&forest, &FieldNames::DEFAULT, &mut |_, visit| {
///     depths.push(visit.depth);
///     ControlFlow::Continue(())
/// });
///
/// assert!(result.is_continue());
/// assert_eq!(depths, vec![1, 2]);
/// ```
pub fn walk<'a, B, F>(forest: &'a [Node], fields: &FieldNames, visitor: &mut F) -> VisitResult<B>
where
    F: FnMut(&'a Node, Visit) -> VisitResult<B>,
{
    walk_level(forest, fields, 1, visitor)
}

fn walk_level<'a, B, F>(
    nodes: &'a [Node],
    fields: &FieldNames,
    depth: usize,
    visitor: &mut F,
) -> VisitResult<B>
where
    F: FnMut(&'a Node, Visit) -> VisitResult<B>,
{
    for (index, node) in nodes.iter().enumerate() {
        visitor(node, Visit { index, depth })?;
        if let Some(children) = fields.children_of(node) {
            walk_level(children, fields, depth + 1, visitor)?;
        }
    }
    ControlFlow::Continue(())
}
