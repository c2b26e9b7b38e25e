//! Field-name configuration.

use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::NodeError;

// Embed the schema
// Path is relative to this file: ../../../schemas/v1/field_names.json
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/field_names.json");
static FIELD_NAMES_SCHEMA: OnceLock<Validator> = OnceLock::new();

/// Attribute names used to read a node's identity and child list.
///
/// Every tree operation takes a `&FieldNames` and threads it through its
/// recursion unchanged. Use [`FieldNames::DEFAULT`] for `{ children, id }`.
///
/// # Example
///
/// ```rust
/// use arbora_node::FieldNames;
///
/// let fields = FieldNames::from_json(r#"{ "children": "replies" }"#).unwrap();
/// assert_eq!(fields.children, "replies");
/// assert_eq!(fields.id, "id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldNames {
    /// Attribute holding the child node array.
    #[serde(default = "default_children")]
    pub children: Cow<'static, str>,

    /// Attribute holding the node identity.
    #[serde(default = "default_id")]
    pub id: Cow<'static, str>,
}

fn default_children() -> Cow<'static, str> {
    FieldNames::DEFAULT.children
}

fn default_id() -> Cow<'static, str> {
    FieldNames::DEFAULT.id
}

impl FieldNames {
    /// The default configuration: `{ children: "children", id: "id" }`.
    pub const DEFAULT: FieldNames = FieldNames {
        children: Cow::Borrowed("children"),
        id: Cow::Borrowed("id"),
    };

    /// Creates a configuration from explicit attribute names.
    ///
    /// Both names must be non-empty and distinct.
    pub fn new(
        children: impl Into<Cow<'static, str>>,
        id: impl Into<Cow<'static, str>>,
    ) -> Result<Self, NodeError> {
        let fields = Self {
            children: children.into(),
            id: id.into(),
        };
        fields.validate()?;
        Ok(fields)
    }

    /// Loads configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, NodeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses configuration from a JSON string with schema validation.
    ///
    /// Missing attributes fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, NodeError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| NodeError::config(format!("Invalid JSON: {}", e)))?;

        let schema = FIELD_NAMES_SCHEMA.get_or_init(|| {
            let schema_json: Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded field names schema");
            Validator::new(&schema_json).expect("Invalid field names schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            let error_msg = format!("{} at {}", e, e.instance_path());
            return Err(NodeError::config(format!(
                "Field names validation failed: {}",
                error_msg
            )));
        }

        let fields: Self = serde_json::from_value(value)
            .map_err(|e| NodeError::config(format!("Invalid field names: {}", e)))?;
        fields.validate()?;
        Ok(fields)
    }

    fn validate(&self) -> Result<(), NodeError> {
        if self.children.is_empty() {
            return Err(NodeError::config("children attribute name must not be empty"));
        }
        if self.id.is_empty() {
            return Err(NodeError::config("id attribute name must not be empty"));
        }
        if self.children == self.id {
            return Err(NodeError::config(format!(
                "children and id must name different attributes, both are '{}'",
                self.id
            )));
        }
        Ok(())
    }

    /// Returns the node's identity value, if it is an object carrying one.
    #[inline]
    pub fn id_of<'n>(&self, node: &'n Value) -> Option<&'n Value> {
        node.get(&*self.id)
    }

    /// Returns true if the node's identity strictly equals `target`.
    #[inline]
    pub fn has_id(&self, node: &Value, target: &Value) -> bool {
        self.id_of(node) == Some(target)
    }

    /// Returns the node's children when the children attribute is an array.
    ///
    /// An absent or non-array attribute means the node is a leaf.
    #[inline]
    pub fn children_of<'n>(&self, node: &'n Value) -> Option<&'n Vec<Value>> {
        node.get(&*self.children).and_then(Value::as_array)
    }

    /// Mutable counterpart of [`children_of`](Self::children_of).
    #[inline]
    pub fn children_mut<'n>(&self, node: &'n mut Value) -> Option<&'n mut Vec<Value>> {
        node.get_mut(&*self.children).and_then(Value::as_array_mut)
    }

    /// Returns the node's children, replacing a leaf's absent or non-array
    /// attribute with an empty array.
    ///
    /// Returns `None` only for non-object nodes.
    pub fn children_or_insert<'n>(&self, node: &'n mut Value) -> Option<&'n mut Vec<Value>> {
        let slot = node
            .as_object_mut()?
            .entry(&*self.children)
            .or_insert(Value::Null);
        if !slot.is_array() {
            *slot = Value::Array(Vec::new());
        }
        slot.as_array_mut()
    }
}

impl Default for FieldNames {
    fn default() -> Self {
        Self::DEFAULT
    }
}
