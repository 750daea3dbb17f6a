//! The dynamic value domain decoders and encoders operate over.
//!
//! The schema algebra describes shapes, not a wire format (see the crate's
//! Non-goals). But `decode`/`encode` still need a concrete "unknown input" /
//! "host-native output" type to be pure functions over. [`Value`] is that
//! type: a JSON-like dynamic value extended with the two keyword forms
//! JSON has no room for (`BigInt`, `Symbol`) so the full keyword set in
//! [`crate::ast::AstKind`] has something to decode against.
//!
//! Object keys preserve insertion order (`IndexMap`), which is what lets the
//! struct interpreter honor "declared-property order followed by
//! accepted-index order" when assembling a decoded object.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identity of a runtime symbol. Two `Value::Symbol`s are equal iff they
/// share an id; the description is carried for rendering only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolId {
    pub id: u64,
    pub description: String,
}

impl SymbolId {
    /// Mints a fresh, process-unique symbol with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self {
            id: NEXT.fetch_add(1, Ordering::Relaxed),
            description: description.into(),
        }
    }
}

impl PartialEq for SymbolId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for SymbolId {}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description)
    }
}

/// A property key: struct and record keys may be strings or symbols (§3.1).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    String(String),
    Symbol(SymbolId),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::String(s) => write!(f, "{s}"),
            Key::Symbol(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::String(s.to_string())
    }
}
impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::String(s)
    }
}

/// A dynamic, host-native value. This is the crate's sole concrete stand-in
/// for the "unknown" input decoders accept and the typed output they
/// produce — the library itself has no opinion on wire format.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    Symbol(SymbolId),
    Array(Vec<Value>),
    Object(IndexMap<Key, Value>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<Key, Value>> {
        match self {
            Value::Object(m) => Some(m),
            _ => None,
        }
    }

    /// True for array values; used by the TypeLiteral decoder to reject
    /// arrays the way the source host's `typeof x === "object"` does not.
    pub fn is_array_shaped(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object_shaped(&self) -> bool {
        matches!(self, Value::Object(_))
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(a) => Value::Array(a.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(o) => Value::Object(
                o.into_iter()
                    .map(|(k, v)| (Key::String(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::BigInt(n) => serde_json::Value::String(n.to_string()),
            Value::String(s) => serde_json::Value::String(s),
            Value::Symbol(s) => serde_json::Value::String(s.to_string()),
            Value::Array(a) => serde_json::Value::Array(a.into_iter().map(Into::into).collect()),
            Value::Object(o) => serde_json::Value::Object(
                o.into_iter()
                    .map(|(k, v)| (k.to_string(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::BigInt(n) => write!(f, "{n}n"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Symbol(s) => write!(f, "{s}"),
            Value::Array(_) | Value::Object(_) => write!(f, "{}", crate::interpreter::pretty::render_value(self)),
        }
    }
}
