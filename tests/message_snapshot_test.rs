use indexmap::IndexMap;
use schema_ir::combinators::{literal, number, property, string, struct_};
use schema_ir::interpreter::message::format_failure;
use schema_ir::value::{Key, Value};
use schema_ir::Schema;

fn obj(pairs: Vec<(&str, Value)>) -> Value {
    let mut map = IndexMap::new();
    for (k, v) in pairs {
        map.insert(Key::String(k.to_string()), v);
    }
    Value::Object(map)
}

#[test]
fn renders_a_single_key_path_failure() {
    let schema: Schema = Schema::new(struct_(vec![property("a", string())], vec![]).unwrap());
    let err = schema.decode(&obj(vec![("a", Value::Number(1.0))])).unwrap_err();

    insta::assert_snapshot!(format_failure(&err), @"a: Expected string, actual 1");
}

#[test]
fn renders_a_literal_mismatch() {
    let schema: Schema = Schema::new(literal("exact"));
    let err = schema.decode(&Value::String("other".into())).unwrap_err();

    insta::assert_snapshot!(format_failure(&err), @r###"Expected "exact", actual "other""###);
}

#[test]
fn renders_nested_key_path_for_deep_struct() {
    let inner = struct_(vec![property("b", number())], vec![]).unwrap();
    let schema: Schema = Schema::new(struct_(vec![property("a", inner)], vec![]).unwrap());
    let err = schema.decode(&obj(vec![("a", obj(vec![("b", Value::String("nope".into()))]))])).unwrap_err();

    insta::assert_snapshot!(format_failure(&err), @"a.b: Expected number, actual \"nope\"");
}
