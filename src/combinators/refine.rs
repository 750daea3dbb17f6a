//! `refine`/`filter`/`annotate`: predicate narrowing and annotation
//! attachment (§3.1 Refinement, §3.4 Annotations, §4.F).

use crate::ast::annotations::{AnnotationKey, AnnotationValue, Annotations};
use crate::ast::refinement::Predicate;
use crate::ast::Ast;
use crate::value::Value;

/// `refine(from, predicate, annotations)`: narrows `from`'s domain without
/// changing its decoded type.
pub fn refine(from: Ast, predicate: Predicate, annotations: Annotations) -> Ast {
    Ast::refinement(from, predicate, annotations)
}

/// `filter(from, predicate, message)`: the common case of `refine` with
/// just a `Message` annotation attached, matching the concrete scenario in
/// §8.5 (`filter(n => n>0, {message: ...})`).
pub fn filter(
    from: Ast,
    predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    message: impl Fn(&Value) -> String + Send + Sync + 'static,
) -> Ast {
    let annotations = Annotations::new().with(AnnotationKey::Message, AnnotationValue::Message(std::sync::Arc::new(message)));
    refine(from, std::sync::Arc::new(predicate), annotations)
}

/// `annotate(ast, key, value)`: overlays a single annotation key, newer
/// value winning on merge (§8 property 3).
pub fn annotate(ast: Ast, key: AnnotationKey, value: AnnotationValue) -> Ast {
    ast.merge_annotations(&Annotations::new().with(key, value))
}

/// `identifier(ast, name)`: the stable, human-facing name used by default
/// message synthesis (§3.4, §7) in place of a structural rendering of `ast`.
pub fn identifier(ast: Ast, name: impl Into<String>) -> Ast {
    annotate(ast, AnnotationKey::Identifier, AnnotationValue::Value(Value::String(name.into())))
}

pub fn title(ast: Ast, text: impl Into<String>) -> Ast {
    annotate(ast, AnnotationKey::Title, AnnotationValue::Value(Value::String(text.into())))
}

pub fn description(ast: Ast, text: impl Into<String>) -> Ast {
    annotate(ast, AnnotationKey::Description, AnnotationValue::Value(Value::String(text.into())))
}

/// `examples(ast, samples)`: an ordered list of sample values (§3.4).
pub fn examples(ast: Ast, samples: Vec<Value>) -> Ast {
    annotate(ast, AnnotationKey::Examples, AnnotationValue::Value(Value::Array(samples)))
}
