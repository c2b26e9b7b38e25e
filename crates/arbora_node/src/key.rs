//! Hashable identity keys.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON value usable as a hash-map key.
///
/// Equality is plain [`Value`] equality, so keys stay strict: `1`, `1.0`,
/// `"1"` and `true` are four different keys. The `Hash` impl agrees with
/// that equality, including for objects, whose comparison ignores key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdKey(Value);

impl IdKey {
    /// Wraps a value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the key, returning the wrapped value.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for IdKey {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<&Value> for IdKey {
    fn from(value: &Value) -> Self {
        Self(value.clone())
    }
}

impl fmt::Display for IdKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Hash for IdKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_value(&self.0, state);
    }
}

fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Null => state.write_u8(0),
        Value::Bool(b) => {
            state.write_u8(1);
            b.hash(state);
        }
        Value::Number(n) => {
            state.write_u8(2);
            if let Some(i) = n.as_i64() {
                i.hash(state);
            } else if let Some(u) = n.as_u64() {
                u.hash(state);
            } else if let Some(f) = n.as_f64() {
                // 0.0 and -0.0 compare equal
                let f = if f == 0.0 { 0.0 } else { f };
                f.to_bits().hash(state);
            }
        }
        Value::String(s) => {
            state.write_u8(3);
            s.hash(state);
        }
        Value::Array(items) => {
            state.write_u8(4);
            items.len().hash(state);
            for item in items {
                hash_value(item, state);
            }
        }
        Value::Object(map) => {
            state.write_u8(5);
            map.len().hash(state);
        }
    }
}
