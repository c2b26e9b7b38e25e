//! Key-based deduplication and copying.

use std::collections::HashSet;

use arbora_node::{FieldNames, Forest, IdKey, Node};
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Builds a new forest keeping only the first occurrence of each `key` value.
///
/// One seen-set spans the whole call, so a duplicate is dropped no matter
/// where it appears: among siblings, in another subtree, or under another
/// root. A dropped node takes its entire subtree with it. Nodes whose `key`
/// attribute is absent or `null` are always kept. The input is not modified.
pub fn dedup_tree(forest: &[Node], key: &str, fields: &FieldNames) -> Forest {
    let mut dedup = Dedup {
        key,
        fields,
        seen: HashSet::new(),
        pruned: 0,
    };
    let result = dedup.level(forest);
    debug!(
        "Deduplicated forest by '{}': {} unique keys, {} subtrees pruned",
        key,
        dedup.seen.len(),
        dedup.pruned
    );
    result
}

struct Dedup<'k> {
    key: &'k str,
    fields: &'k FieldNames,
    seen: HashSet<IdKey>,
    pruned: usize,
}

impl Dedup<'_> {
    fn level(&mut self, nodes: &[Node]) -> Vec<Node> {
        let mut kept = Vec::with_capacity(nodes.len());
        for node in nodes {
            if let Some(value) = node.get(self.key).filter(|value| !value.is_null()) {
                if !self.seen.insert(IdKey::from(value)) {
                    trace!("Pruning duplicate {} = {}", self.key, value);
                    self.pruned += 1;
                    continue;
                }
            }
            kept.push(self.copy(node));
        }
        kept
    }

    fn copy(&mut self, node: &Node) -> Node {
        let Value::Object(attributes) = node else {
            return node.clone();
        };
        let mut copy = Map::with_capacity(attributes.len());
        for (name, value) in attributes {
            let value = match value {
                Value::Array(children) if name.as_str() == &*self.fields.children => {
                    Value::Array(self.level(children))
                }
                other => other.clone(),
            };
            copy.insert(name.clone(), value);
        }
        Value::Object(copy)
    }
}

/// Returns a deep copy of the forest.
pub fn clone_tree(forest: &[Node]) -> Forest {
    forest.to_vec()
}
