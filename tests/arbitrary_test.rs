#![cfg(feature = "arbitrary")]

use schema_ir::combinators::{element, filter, number, optional_property, property, string, struct_, tuple};
use schema_ir::value::Value;
use schema_ir::Schema;

// Component H (interface-level per spec.md §1, implemented behind the
// `arbitrary` feature): every generated value must itself decode.
#[test]
fn generated_struct_values_decode_successfully() {
    let schema: Schema = Schema::new(
        struct_(vec![property("name", string()), optional_property("age", number())], vec![]).unwrap(),
    );
    let mut rng = rand::thread_rng();

    for _ in 0..50 {
        let value = schema.arbitrary(&mut rng);
        assert!(schema.decode(&value).is_ok(), "generated value {value:?} failed to decode");
    }
}

#[test]
fn generated_tuple_values_decode_successfully() {
    let schema: Schema = Schema::new(tuple(vec![element(string()), element(number())], None).unwrap());
    let mut rng = rand::thread_rng();

    for _ in 0..50 {
        let value = schema.arbitrary(&mut rng);
        assert!(schema.decode(&value).is_ok());
    }
}

#[test]
fn generated_refinement_values_satisfy_the_predicate() {
    let positive = filter(number(), |v| matches!(v, Value::Number(n) if *n > 0.0), |_| "must be positive".into());
    let schema: Schema = Schema::new(positive);
    let mut rng = rand::thread_rng();

    for _ in 0..50 {
        let value = schema.arbitrary(&mut rng);
        assert!(schema.decode(&value).is_ok());
    }
}
