//! # arbora_node
//!
//! Node model and field-name configuration for arbora.
//!
//! Trees are plain JSON records. A [`Node`] is any [`serde_json::Value`]; when
//! it is an object, its identity and child list are read through the attribute
//! names held by a [`FieldNames`]. A [`Forest`] is an ordered list of root
//! nodes.
//!
//! ## Architecture
//!
//! - Nodes are schema-less: payload attributes are opaque and preserved
//! - Attribute maps keep insertion order (`serde_json` `preserve_order`)
//! - A children attribute that is absent or not an array marks a leaf
//! - Identity uses strict [`Value`](serde_json::Value) equality, so `0`,
//!   `false` and `""` are distinct, valid ids
//!
//! ## Example
//!
//! ```rust
//! use arbora_node::FieldNames;
//! use serde_json::json;
//!
//! let fields = FieldNames::new("items", "key").unwrap();
//! let node = json!({ "key": 7, "items": [{ "key": 8 }] });
//!
//! assert_eq!(fields.id_of(&node), Some(&json!(7)));
//! assert_eq!(fields.children_of(&node).map(|c| c.len()), Some(1));
//! ```

mod config;
mod error;
mod key;

pub use config::FieldNames;
pub use error::NodeError;
pub use key::IdKey;

/// A tree node: an attribute map carrying an id and, optionally, children.
pub type Node = serde_json::Value;

/// An ordered sequence of root nodes.
pub type Forest = Vec<Node>;
