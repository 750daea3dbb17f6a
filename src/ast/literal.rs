//! Literal and unique-symbol leaf nodes (§3.1).

use std::fmt;

use crate::value::SymbolId;

/// A primitive constant. `bigint` is modeled as `i128`, matching the
/// `Value::BigInt` decode target.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    BigInt(i128),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::String(s) => write!(f, "{s:?}"),
            LiteralValue::Number(n) => write!(f, "{n}"),
            LiteralValue::Boolean(b) => write!(f, "{b}"),
            LiteralValue::Null => write!(f, "null"),
            LiteralValue::BigInt(n) => write!(f, "{n}n"),
        }
    }
}

impl PartialEq<crate::value::Value> for LiteralValue {
    fn eq(&self, other: &crate::value::Value) -> bool {
        use crate::value::Value;
        match (self, other) {
            (LiteralValue::String(a), Value::String(b)) => a == b,
            (LiteralValue::Number(a), Value::Number(b)) => a == b,
            (LiteralValue::Boolean(a), Value::Bool(b)) => a == b,
            (LiteralValue::Null, Value::Null) => true,
            (LiteralValue::BigInt(a), Value::BigInt(b)) => a == b,
            _ => false,
        }
    }
}

/// A reference to one specific, already-minted symbol identity (§3.1
/// `UniqueSymbol`) — distinct from the `symbol` keyword, which accepts any
/// symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct UniqueSymbol(pub SymbolId);

impl From<&str> for LiteralValue {
    fn from(s: &str) -> Self {
        LiteralValue::String(s.to_string())
    }
}
impl From<String> for LiteralValue {
    fn from(s: String) -> Self {
        LiteralValue::String(s)
    }
}
impl From<f64> for LiteralValue {
    fn from(n: f64) -> Self {
        LiteralValue::Number(n)
    }
}
impl From<bool> for LiteralValue {
    fn from(b: bool) -> Self {
        LiteralValue::Boolean(b)
    }
}
impl From<i128> for LiteralValue {
    fn from(n: i128) -> Self {
        LiteralValue::BigInt(n)
    }
}
