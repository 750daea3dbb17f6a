use schema_ir::ast::annotations::{AnnotationKey, AnnotationValue};
use schema_ir::combinators::{annotate, number, string};
use schema_ir::value::Value;
use schema_ir::Schema;

// spec.md §4.H: `pretty(schema)(value)` renders a decoded value.
#[test]
fn pretty_renders_the_value_by_default() {
    let schema: Schema = Schema::new(number());
    insta::assert_snapshot!(schema.pretty(&Value::Number(3.0)), @"3");
}

#[test]
fn pretty_quotes_strings_like_message_rendering() {
    let schema: Schema = Schema::new(string());
    insta::assert_snapshot!(schema.pretty(&Value::String("hi".into())), @r###""hi""###);
}

// spec.md §3.4: annotation-supplied printers (`Custom` key) take precedence.
#[test]
fn custom_pretty_annotation_overrides_the_default_renderer() {
    let printer: schema_ir::ast::annotations::MessageFn =
        std::sync::Arc::new(|v: &Value| match v {
            Value::Number(n) => format!("${n:.2}"),
            other => format!("{other:?}"),
        });
    let ast = annotate(number(), AnnotationKey::Custom("pretty".to_string()), AnnotationValue::Message(printer));
    let schema: Schema = Schema::new(ast);

    assert_eq!(schema.pretty(&Value::Number(3.0)), "$3.00");
}
