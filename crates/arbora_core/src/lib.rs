//! # arbora_core
//!
//! Query and mutation engine for JSON trees.
//!
//! This crate provides:
//! - Pre-order traversals (`map_tree`, `filter_tree`, `find_tree`, ...)
//! - Id-based mutation (`push_tree`, `pop_tree`, `remove_tree`, ...)
//! - Index-path addressing (`index_of_tree`, `at_index_of_tree`, `at_tree`)
//! - Relationship queries (`get_parent_tree`, `node_depth_map`, ...)
//! - Structural validation and key-based deduplication
//!
//! Every operation takes the attribute names to use as a [`FieldNames`].
//! Misses are reported as `None`, `false` or an empty collection; no tree
//! operation returns an error or panics on malformed input.
//!
//! ## Example
//!
//! ```rust
//! use arbora_core::{FieldNames, at_tree, index_of_tree, map_tree, push_tree};
//! use serde_json::json;
//!
//! let fields = FieldNames::DEFAULT;
//! let mut forest = vec![json!({ "id": 1, "children": [{ "id": 2 }, { "id": 3 }] })];
//!
//! assert_eq!(map_tree(&forest, |n| n["id"].clone(), &fields), vec![json!(1), json!(2), json!(3)]);
//!
//! assert!(push_tree(&mut forest, &json!(1), json!({ "id": 4 }), &fields));
//! assert_eq!(at_tree(&forest, &json!(1), -1, &fields).map(|n| &n["id"]), Some(&json!(4)));
//! assert_eq!(index_of_tree(&forest, &json!(3), &fields), Some(vec![0, 1]));
//! ```

mod dedup;
mod locator;
mod mutate;
mod path;
mod relation;
mod traverse;
mod validate;
pub mod walk;

pub use dedup::{clone_tree, dedup_tree};
pub use locator::includes_tree;
pub use mutate::{pop_tree, push_tree, remove_tree, shift_tree, unshift_tree};
pub use path::{at_index_of_tree, at_tree, index_of_tree};
pub use relation::{
    get_ancestors_tree, get_children_tree, get_node_depth, get_parent_tree, get_siblings_tree,
    node_depth_map,
};
pub use traverse::{
    count_tree, every_tree, filter_tree, find_tree, for_each_tree, map_tree, some_tree,
};
pub use validate::{is_multiple_trees, is_single_tree};
pub use walk::{Visit, VisitResult, walk};


pub use arbora_node::{FieldNames, Forest, IdKey, Node, NodeError};
