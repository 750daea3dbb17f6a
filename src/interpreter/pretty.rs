//! The pretty-printer (component H, §4.H): renders a [`Value`] as a
//! compact, deterministic, human-facing string — used by `Display for
//! Value` and by message synthesis when an `actual` value needs to be
//! shown inline.

use crate::value::{Key, Value};

/// Renders `value` the way a failure message quotes the offending input:
/// compact, stable key order (`Value::Object` is already an `IndexMap`, so
/// iteration order is insertion order), no trailing newline.
pub fn render_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(&b.to_string()),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::BigInt(n) => {
            out.push_str(&n.to_string());
            out.push('n');
        }
        Value::String(s) => {
            out.push('"');
            out.push_str(&s.replace('\\', "\\\\").replace('"', "\\\""));
            out.push('"');
        }
        Value::Symbol(s) => out.push_str(&s.to_string()),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(obj) => {
            out.push('{');
            for (i, (key, value)) in obj.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_key(out, key);
                out.push_str(": ");
                write_value(out, value);
            }
            out.push('}');
        }
    }
}

fn write_key(out: &mut String, key: &Key) {
    match key {
        Key::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Key::Symbol(s) => out.push_str(&s.to_string()),
    }
}

/// Renders `ast`'s shape the way [`crate::ast::Ast::render`] does, exposed
/// here too since message synthesis and the pretty-printer share the same
/// "what did we expect" phrasing (§4.H, §7).
pub fn render_ast(ast: &crate::ast::Ast) -> String {
    ast.render()
}

/// `pretty(schema)(value)` (§4.H): renders a decoded value under `ast`'s
/// annotations, giving a `Custom("pretty")` printer precedence over the
/// default `render_value`.
pub fn render_for_schema(ast: &crate::ast::Ast, value: &Value) -> String {
    match ast.annotations().custom_printer() {
        Some(printer) => printer(value),
        None => render_value(value),
    }
}
