use schema_ir::combinators::{description, identifier, number, title};
use schema_ir::interpreter::message::format_failure;
use schema_ir::value::Value;
use schema_ir::Schema;

// §8 property 3: annotations(A)(annotations(B)(s)) yields A ∪ B, A winning
// on overlap.
#[test]
fn later_annotation_wins_on_overlapping_key() {
    let ast = identifier(identifier(number(), "first"), "second");
    assert_eq!(ast.annotations().identifier(), Some("second"));
}

#[test]
fn distinct_keys_all_survive_the_merge() {
    let ast = description(title(identifier(number(), "age"), "Age"), "a person's age in years");
    assert_eq!(ast.annotations().identifier(), Some("age"));
    assert_eq!(ast.annotations().title(), Some("Age"));
    assert_eq!(ast.annotations().description(), Some("a person's age in years"));
}

#[test]
fn identifier_drives_default_failure_message_rendering() {
    let ast = identifier(number(), "Age");
    let schema: Schema = Schema::new(ast);

    let err = schema.decode(&Value::String("x".into())).unwrap_err();
    assert_eq!(format_failure(&err), "Expected Age, actual \"x\"");
}
