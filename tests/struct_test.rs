use indexmap::IndexMap;
use schema_ir::combinators::{number, optional_property, property, string, struct_};
use schema_ir::value::{Key, Value};
use schema_ir::{OnExcessProperty, ParseOptions, ParseIssue, Schema};

fn obj(pairs: Vec<(&str, Value)>) -> Value {
    let mut map = IndexMap::new();
    for (k, v) in pairs {
        map.insert(Key::String(k.to_string()), v);
    }
    Value::Object(map)
}

// §8 concrete scenario 1.
#[test]
fn decodes_required_and_optional_fields() {
    let schema: Schema = Schema::new(
        struct_(vec![property("a", string()), optional_property("b", number())], vec![]).unwrap(),
    );

    let only_a = obj(vec![("a", Value::String("x".into()))]);
    assert_eq!(schema.decode(&only_a).unwrap().value, only_a);

    let both = obj(vec![("a", Value::String("x".into())), ("b", Value::Number(1.0))]);
    assert_eq!(schema.decode(&both).unwrap().value, both);
}

#[test]
fn wrong_type_on_required_field_fails_with_key_path() {
    let schema: Schema = Schema::new(struct_(vec![property("a", string())], vec![]).unwrap());
    let bad = obj(vec![("a", Value::Number(1.0))]);

    let err = schema.decode(&bad).unwrap_err();
    match err.0.iter().next().unwrap() {
        ParseIssue::Key { key, errors } => {
            assert_eq!(key, &Key::String("a".to_string()));
            assert!(matches!(errors.iter().next().unwrap(), ParseIssue::Type { .. }));
        }
        other => panic!("expected Key issue, got {other:?}"),
    }
}

#[test]
fn missing_required_field_with_all_errors_reports_missing() {
    let schema: Schema = Schema::new(struct_(vec![property("a", string())], vec![]).unwrap());
    let options = ParseOptions::default().with_all_errors(true);

    let err = schema.decode_with(&obj(vec![]), &options).unwrap_err();
    match err.0.iter().next().unwrap() {
        ParseIssue::Key { key, errors } => {
            assert_eq!(key, &Key::String("a".to_string()));
            assert!(matches!(errors.iter().next().unwrap(), ParseIssue::Missing { .. }));
        }
        other => panic!("expected Key(Missing) issue, got {other:?}"),
    }
}

#[test]
fn excess_property_policy_ignore_vs_error() {
    let schema: Schema = Schema::new(struct_(vec![property("a", string())], vec![]).unwrap());
    let input = obj(vec![("a", Value::String("x".into())), ("extra", Value::Bool(true))]);

    assert!(schema.decode(&input).is_ok());

    let strict = ParseOptions::default().with_on_excess_property(OnExcessProperty::Error);
    assert!(schema.decode_with(&input, &strict).is_err());
}

#[test]
fn partial_accepts_empty_object() {
    use schema_ir::combinators::partial;
    let base = struct_(vec![property("a", string()), property("b", number())], vec![]).unwrap();
    let schema: Schema = Schema::new(partial(&base));

    assert!(schema.decode(&obj(vec![])).is_ok());
}
