use schema_ir::combinators::{element, number, partial, string, tuple};
use schema_ir::value::Value;
use schema_ir::{ParseIssue, Schema};

fn arr(values: Vec<Value>) -> Value {
    Value::Array(values)
}

// §8 concrete scenario 2: tuple(string).pipe(rest(number)).
fn string_then_numbers() -> Schema {
    Schema::new(tuple(vec![element(string())], Some(vec![number()])).unwrap())
}

#[test]
fn decodes_fixed_element_plus_repeating_rest() {
    let schema = string_then_numbers();
    let input = arr(vec![Value::String("a".into()), Value::Number(1.0), Value::Number(2.0)]);
    assert_eq!(schema.decode(&input).unwrap().value, input);
}

#[test]
fn rest_element_type_mismatch_reports_index() {
    let schema = string_then_numbers();
    let input = arr(vec![Value::String("a".into()), Value::String("b".into())]);

    let err = schema.decode(&input).unwrap_err();
    match err.0.iter().next().unwrap() {
        ParseIssue::Index { index, errors } => {
            assert_eq!(*index, 1);
            assert!(matches!(errors.iter().next().unwrap(), ParseIssue::Type { .. }));
        }
        other => panic!("expected Index issue, got {other:?}"),
    }
}

#[test]
fn optional_trailing_element_may_be_omitted() {
    use schema_ir::combinators::optional_element;
    let schema: Schema = Schema::new(tuple(vec![element(string()), optional_element(number())], None).unwrap());

    assert!(schema.decode(&arr(vec![Value::String("x".into())])).is_ok());
    assert!(schema.decode(&arr(vec![Value::String("x".into()), Value::Number(1.0)])).is_ok());
}

#[test]
fn excess_fixed_element_is_rejected() {
    let schema: Schema = Schema::new(tuple(vec![element(string())], None).unwrap());
    let input = arr(vec![Value::String("x".into()), Value::Number(1.0)]);
    assert!(schema.decode(&input).is_err());
}

#[test]
fn array_accepts_any_length_homogeneous_sequence() {
    use schema_ir::combinators::array;
    let schema: Schema = Schema::new(array(number()));

    assert!(schema.decode(&arr(vec![])).is_ok());
    assert!(schema.decode(&arr(vec![Value::Number(1.0), Value::Number(2.0)])).is_ok());
    assert!(schema.decode(&arr(vec![Value::String("x".into())])).is_err());
}

#[test]
fn non_empty_array_rejects_the_empty_case() {
    use schema_ir::combinators::non_empty_array;
    let schema: Schema = Schema::new(non_empty_array(number()));

    assert!(schema.decode(&arr(vec![])).is_err());
    assert!(schema.decode(&arr(vec![Value::Number(1.0)])).is_ok());
}

// spec.md §4.B: partial on a Tuple with a rest segment includes undefined
// in the rest union, on top of marking every fixed element optional.
#[test]
fn partial_tuple_admits_undefined_in_the_rest_position() {
    let with_rest = tuple(vec![element(string())], Some(vec![number()])).unwrap();
    let schema: Schema = Schema::new(partial(&with_rest));

    assert!(schema.decode(&arr(vec![])).is_ok());
    assert!(schema.decode(&arr(vec![Value::String("a".into()), Value::Number(1.0)])).is_ok());
    assert!(schema.decode(&arr(vec![Value::String("a".into()), Value::Null])).is_ok());
    assert!(schema.decode(&arr(vec![Value::String("a".into()), Value::String("x".into())])).is_err());
}
