//! Annotations: the symbolic key/value bag every AST node carries (§3.4, §4.G).

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// Well-known annotation keys, plus an escape hatch for anything the crate
/// does not recognize. Unknown keys still round-trip through `Custom`
/// (§3.4: "Unknown keys are preserved and passed through").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum AnnotationKey {
    Identifier,
    Title,
    Description,
    Documentation,
    Examples,
    Message,
    JsonSchema,
    Custom(String),
}

impl fmt::Display for AnnotationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationKey::Identifier => write!(f, "Identifier"),
            AnnotationKey::Title => write!(f, "Title"),
            AnnotationKey::Description => write!(f, "Description"),
            AnnotationKey::Documentation => write!(f, "Documentation"),
            AnnotationKey::Examples => write!(f, "Examples"),
            AnnotationKey::Message => write!(f, "Message"),
            AnnotationKey::JsonSchema => write!(f, "JSONSchema"),
            AnnotationKey::Custom(name) => write!(f, "Custom({name})"),
        }
    }
}

/// A message-override function, called with the offending value at the
/// failure site. Contract: side-effect-free (§3.4, §4.G).
pub type MessageFn = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// The opaque payload an annotation key maps to. Most keys carry a `Value`;
/// `Message` carries a function instead, and `JsonSchema`/`Custom` carry
/// whatever opaque JSON blob the producing interpreter attached.
#[derive(Clone)]
pub enum AnnotationValue {
    Value(Value),
    Message(MessageFn),
    Json(serde_json::Value),
}

impl fmt::Debug for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationValue::Value(v) => write!(f, "Value({v:?})"),
            AnnotationValue::Message(_) => write!(f, "Message(<fn>)"),
            AnnotationValue::Json(v) => write!(f, "Json({v:?})"),
        }
    }
}

/// An immutable, ordered-by-key annotation map. `BTreeMap` gives
/// deterministic iteration (§5: "deterministic ordering") without needing
/// insertion-order bookkeeping, since merge semantics are key-overwrite only.
#[derive(Debug, Clone, Default)]
pub struct Annotations(BTreeMap<AnnotationKey, AnnotationValue>);

impl Annotations {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, key: &AnnotationKey) -> Option<&AnnotationValue> {
        self.0.get(key)
    }

    pub fn with(mut self, key: AnnotationKey, value: AnnotationValue) -> Self {
        self.0.insert(key, value);
        self
    }

    pub fn identifier(&self) -> Option<&str> {
        match self.get(&AnnotationKey::Identifier)? {
            AnnotationValue::Value(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self.get(&AnnotationKey::Title)? {
            AnnotationValue::Value(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self.get(&AnnotationKey::Description)? {
            AnnotationValue::Value(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn examples(&self) -> Option<&[Value]> {
        match self.get(&AnnotationKey::Examples)? {
            AnnotationValue::Value(Value::Array(vs)) => Some(vs),
            _ => None,
        }
    }

    pub fn message_fn(&self) -> Option<&MessageFn> {
        match self.get(&AnnotationKey::Message)? {
            AnnotationValue::Message(f) => Some(f),
            _ => None,
        }
    }

    /// The user-supplied pretty-printer, if this node carries one under the
    /// `Custom("pretty")` key (§3.4, §4.H: "annotation-supplied printers take
    /// precedence when present"). Reuses `MessageFn`'s `Value -> String`
    /// shape since a custom printer is exactly that.
    pub fn custom_printer(&self) -> Option<&MessageFn> {
        match self.get(&AnnotationKey::Custom("pretty".to_string()))? {
            AnnotationValue::Message(f) => Some(f),
            _ => None,
        }
    }

    /// Overlays `other` onto `self`; keys in `other` win on overlap
    /// (§3.2 invariant 5: "annotations accumulate most-recent-wins per key";
    /// §8 property 3: `annotations(A)(annotations(B)(s))` yields `A` winning).
    pub fn merge(&self, other: &Annotations) -> Annotations {
        let mut merged = self.0.clone();
        for (k, v) in &other.0 {
            merged.insert(k.clone(), v.clone());
        }
        Annotations(merged)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
