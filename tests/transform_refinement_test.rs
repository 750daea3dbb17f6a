use schema_ir::combinators::{filter, number, string, transform_or_fail};
use schema_ir::result::{ParseIssue, Success};
use schema_ir::value::Value;
use schema_ir::{ParseOptions, Schema};

// §8 concrete scenario 5.
#[test]
fn filter_message_renders_custom_text() {
    let positive = filter(
        number(),
        |v| matches!(v, Value::Number(n) if *n > 0.0),
        |v| format!("{} must be positive", schema_ir::interpreter::pretty::render_value(v)),
    );
    let schema: Schema = Schema::new(positive);

    let err = schema.decode(&Value::Number(-1.0)).unwrap_err();
    let rendered = schema_ir::interpreter::message::format_failure(&err);
    assert_eq!(rendered, "-1 must be positive");
}

#[test]
fn filter_passes_matching_values_through_unchanged() {
    let positive = filter(number(), |v| matches!(v, Value::Number(n) if *n > 0.0), |_| "bad".into());
    let schema: Schema = Schema::new(positive);
    assert_eq!(schema.decode(&Value::Number(3.0)).unwrap().value, Value::Number(3.0));
}

// §8 concrete scenario 6: transformOrFail round-trips any valid input.
fn string_to_upper() -> Schema {
    let decode = |v: &Value, _opts: &ParseOptions| match v {
        Value::String(s) => Ok(Success::new(Value::String(s.to_uppercase()))),
        other => Err(schema_ir::Failure::single(ParseIssue::Type {
            expected: string(),
            actual: other.clone(),
        })),
    };
    let encode = |v: &Value, _opts: &ParseOptions| match v {
        Value::String(s) => Ok(Success::new(Value::String(s.to_lowercase()))),
        other => Err(schema_ir::Failure::single(ParseIssue::Type {
            expected: string(),
            actual: other.clone(),
        })),
    };
    Schema::new(transform_or_fail(string(), string(), decode, encode))
}

#[test]
fn transform_or_fail_round_trips() {
    let schema = string_to_upper();
    let decoded = schema.decode(&Value::String("abc".into())).unwrap().value;
    assert_eq!(decoded, Value::String("ABC".into()));

    let encoded = schema.encode(&decoded).unwrap().value;
    assert_eq!(encoded, Value::String("abc".into()));
}

#[test]
fn transform_or_fail_propagates_decode_failure() {
    let schema = string_to_upper();
    assert!(schema.decode(&Value::Number(1.0)).is_err());
}

// spec.md §4.E: `is` on a schema with a Transform is defined against the
// `from` side, not by running the (possibly fallible) transform itself. A
// transform whose decode closure rejects some `from`-valid inputs (here,
// non-numeric strings) must still have `is` answer purely from `from`'s
// shape (any string), not from whether the transform would succeed.
fn string_to_parsed_number() -> Schema {
    let decode = |v: &Value, _opts: &ParseOptions| match v {
        Value::String(s) => s
            .parse::<f64>()
            .map(|n| Success::new(Value::Number(n)))
            .map_err(|_| schema_ir::Failure::single(ParseIssue::Type { expected: number(), actual: v.clone() })),
        other => Err(schema_ir::Failure::single(ParseIssue::Type { expected: string(), actual: other.clone() })),
    };
    let encode = |v: &Value, _opts: &ParseOptions| match v {
        Value::Number(n) => Ok(Success::new(Value::String(n.to_string()))),
        other => Err(schema_ir::Failure::single(ParseIssue::Type { expected: number(), actual: other.clone() })),
    };
    Schema::new(transform_or_fail(string(), number(), decode, encode))
}

#[test]
fn is_checks_the_transform_from_side_without_running_it() {
    let schema = string_to_parsed_number();

    // Not a valid number, so decode fails...
    assert!(schema.decode(&Value::String("not a number".into())).is_err());
    // ...but it's still a string, so `is` (the `from` side) accepts it.
    assert!(schema.is(&Value::String("not a number".into())));
    assert!(!schema.is(&Value::Number(1.0)));
}
