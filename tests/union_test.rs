use indexmap::IndexMap;
use schema_ir::combinators::{literal, never, number, property, string, struct_, union, unknown};
use schema_ir::value::{Key, Value};
use schema_ir::{ParseIssue, Schema};

fn obj(pairs: Vec<(&str, Value)>) -> Value {
    let mut map = IndexMap::new();
    for (k, v) in pairs {
        map.insert(Key::String(k.to_string()), v);
    }
    Value::Object(map)
}

// §8 property 4.
#[test]
fn normalizes_never_and_unknown_members() {
    assert_eq!(union(vec![never(), string()]), string());
    assert_eq!(union(vec![unknown(), string()]), unknown());
    assert_eq!(union(vec![string(), string()]), string());
}

// §8 concrete scenario 3: discriminated union routing.
fn tagged_union() -> Schema {
    let a = struct_(vec![property("tag", literal("a")), property("x", number())], vec![]).unwrap();
    let b = struct_(vec![property("tag", literal("b")), property("y", string())], vec![]).unwrap();
    Schema::new(union(vec![a, b]))
}

#[test]
fn routes_via_discriminator() {
    let schema = tagged_union();
    let input = obj(vec![("tag", Value::String("a".into())), ("x", Value::Number(1.0))]);
    assert_eq!(schema.decode(&input).unwrap().value, input);
}

#[test]
fn unmatched_discriminator_reports_every_branch() {
    let schema = tagged_union();
    let input = obj(vec![("tag", Value::String("c".into()))]);

    let err = schema.decode(&input).unwrap_err();
    match err.0.iter().next().unwrap() {
        ParseIssue::UnionMember { members } => assert_eq!(members.len(), 2),
        other => panic!("expected UnionMember, got {other:?}"),
    }
}
