use schema_ir::combinators::{number_span, string_span, template_literal};
use schema_ir::value::Value;
use schema_ir::Schema;

// §8 property 7: the compiled regex matches exactly `head · span_i ·
// literal_i` with each span's alphabet.
#[test]
fn matches_head_plus_typed_spans() {
    let schema: Schema = Schema::new(template_literal("id-", vec![number_span("-v1")]));

    assert!(schema.decode(&Value::String("id-42-v1".into())).is_ok());
    assert!(schema.decode(&Value::String("id-abc-v1".into())).is_err());
    assert!(schema.decode(&Value::String("id-42-v2".into())).is_err());
}

#[test]
fn multiple_spans_compose_in_order() {
    let schema: Schema = Schema::new(template_literal("", vec![string_span("@"), string_span("")]));

    assert!(schema.decode(&Value::String("alice@example.com".into())).is_ok());
    assert!(schema.decode(&Value::String("no-at-sign".into())).is_err());
}

#[test]
fn rejects_non_string_input() {
    let schema: Schema = Schema::new(template_literal("x", vec![]));
    assert!(schema.decode(&Value::Number(1.0)).is_err());
}
