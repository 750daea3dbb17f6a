use indexmap::IndexMap;
use schema_ir::ast::Ast;
use schema_ir::combinators::{lazy, nullable, number, optional_property, property, struct_};
use schema_ir::value::{Key, Value};
use schema_ir::Schema;

fn obj(pairs: Vec<(&str, Value)>) -> Value {
    let mut map = IndexMap::new();
    for (k, v) in pairs {
        map.insert(Key::String(k.to_string()), v);
    }
    Value::Object(map)
}

// §8 concrete scenario 4: `lazy(() => struct({v: number, next: nullable(t)}))`.
// Each call builds a fresh (structurally equivalent) `Lazy` node for the
// recursive reference rather than sharing one object's identity — Rust has
// no closed-over `const t` to alias, so the recursive step rebuilds its own
// definition on each force instead. Still terminates in lockstep with input
// depth, and each forced node is memoized for the remainder of that decode.
fn node_ast() -> Ast {
    lazy(|| struct_(vec![property("v", number()), optional_property("next", nullable(node_ast()))], vec![]).unwrap())
}

#[test]
fn decodes_nested_recursive_structure() {
    let schema: Schema = Schema::new(node_ast());
    let inner = obj(vec![("v", Value::Number(2.0)), ("next", Value::Null)]);
    let outer = obj(vec![("v", Value::Number(1.0)), ("next", inner)]);

    assert!(schema.decode(&outer).is_ok());
}

#[test]
fn base_case_omitting_next_decodes() {
    let schema: Schema = Schema::new(node_ast());
    let leaf = obj(vec![("v", Value::Number(1.0))]);
    assert!(schema.decode(&leaf).is_ok());
}

#[test]
fn wrong_type_deep_in_the_recursion_still_fails() {
    let schema: Schema = Schema::new(node_ast());
    let bad_inner = obj(vec![("v", Value::String("not a number".into())), ("next", Value::Null)]);
    let outer = obj(vec![("v", Value::Number(1.0)), ("next", bad_inner)]);

    assert!(schema.decode(&outer).is_err());
}
