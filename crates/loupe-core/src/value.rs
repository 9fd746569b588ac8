//! The dynamic value model every accessor wraps.
//!
//! `Value` is the closed sum type behind "any decoded value": the seven shapes
//! a loosely-typed source (JSON, config files, message payloads) can decode
//! into. Mirrors JSON types but separates integers from floats and uses
//! `Vec<(Key, Value)>` for maps to maintain insertion order without depending
//! on `IndexMap`. Unlike JSON, map keys may be integers as well as strings —
//! decoded trees from looser formats carry both.
//!
//! # List shape
//!
//! List getters do not require the `List` variant. A value is *list-shaped*
//! when it is a `List`, or a `Map` whose keys are exactly the contiguous
//! integers `0..n-1` in ascending order. [`Value::elements`] is the single
//! observation point for that predicate; it never rewrites or reinterprets
//! the value it inspects.

use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Number, Value as JsonValue};
use std::fmt;

/// A map key: decoded maps can be keyed by strings or integers.
///
/// `Key` is also the unit of path tracking — every indexing step appends one
/// `Key` to the accessor's [`KeyPath`](crate::KeyPath).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// String key, e.g. `"user"`.
    Str(String),
    /// Integer key, e.g. `0` for list positions.
    Int(i64),
}

impl Key {
    /// The string form of the key, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            Key::Int(_) => None,
        }
    }

    /// The integer form of the key, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Str(_) => None,
            Key::Int(i) => Some(*i),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Str(s) => f.write_str(s),
            Key::Int(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Key::Str(key.to_string())
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Key::Str(key)
    }
}

impl From<i64> for Key {
    fn from(key: i64) -> Self {
        Key::Int(key)
    }
}

/// A decoded dynamic value.
///
/// Scalars are `Null`, `Bool`, `Int`, `Float`, `String`; containers are
/// `List` (positional) and `Map` (keyed, insertion-ordered). This is the
/// only shape the accessor layer pattern-matches on — there is no runtime
/// type probing anywhere downstream.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    /// Key-value pairs in insertion order.
    Map(Vec<(Key, Value)>),
}

impl Value {
    /// Decode a JSON document into a `Value` tree.
    ///
    /// Object member order is preserved. Numbers that fit `i64` become
    /// [`Value::Int`]; everything else numeric becomes [`Value::Float`].
    ///
    /// # Examples
    ///
    /// ```
    /// use loupe_core::Value;
    ///
    /// let doc = Value::from_json(r#"{"id": 7, "ratio": 0.5}"#).unwrap();
    /// assert_eq!(doc.kind(), "map");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: JsonValue = serde_json::from_str(json)?;
        Ok(Self::from(value))
    }

    /// The runtime tag name, used in diagnostics:
    /// `null`, `bool`, `int`, `float`, `string`, `list`, or `map`.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Observe the list shape: the elements in key order, if this value is a
    /// `List`, or a `Map` whose keys are exactly `0..n-1` ascending with no
    /// gaps. Empty containers qualify (zero keys satisfy the predicate
    /// vacuously). Returns `None` for everything else — the value itself is
    /// never reinterpreted.
    pub fn elements(&self) -> Option<Vec<&Value>> {
        match self {
            Value::List(items) => Some(items.iter().collect()),
            Value::Map(entries) => {
                for (position, (key, _)) in entries.iter().enumerate() {
                    if key.as_int() != Some(position as i64) {
                        return None;
                    }
                }
                Some(entries.iter().map(|(_, value)| value).collect())
            }
            _ => None,
        }
    }

    /// Container lookup. `List` answers `Int` keys in `0..len`; `Map` answers
    /// whole-key equality in insertion order. Scalars and `Null` hold nothing.
    pub(crate) fn lookup(&self, key: &Key) -> Option<&Value> {
        match self {
            Value::List(items) => {
                let index = key.as_int()?;
                usize::try_from(index).ok().and_then(|i| items.get(i))
            }
            Value::Map(entries) => entries
                .iter()
                .find(|(entry_key, _)| entry_key == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::Null
                }
            }
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(key, value)| (Key::Str(key), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Int(i) => JsonValue::Number(Number::from(*i)),
            // Non-finite floats have no JSON form; render as null.
            Value::Float(f) => Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number),
            Value::String(s) => JsonValue::String(s.clone()),
            Value::List(items) => JsonValue::Array(items.iter().map(JsonValue::from).collect()),
            Value::Map(entries) => {
                let mut map = JsonMap::new();
                for (key, value) in entries {
                    map.insert(key.to_string(), JsonValue::from(value));
                }
                JsonValue::Object(map)
            }
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        JsonValue::from(&value)
    }
}

/// Renders the value as compact JSON; integer map keys are stringified.
/// Used by error messages to show the offending raw value.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", JsonValue::from(self))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}
