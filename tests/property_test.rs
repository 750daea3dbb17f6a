use proptest::prelude::*;
use schema_ir::combinators::{boolean, element, number, property, string, struct_, tuple};
use schema_ir::value::Value;
use schema_ir::Schema;

// §8 property 1: decode ∘ encode = id for schemas whose only moving parts
// are identity-shaped (no `transform`/`transformOrFail` in the chain).
proptest! {
    #[test]
    fn decode_then_encode_roundtrips_flat_struct(name in ".*", age in 0.0f64..150.0, active in any::<bool>()) {
        let schema: Schema = Schema::new(
            struct_(
                vec![property("name", string()), property("age", number()), property("active", boolean())],
                vec![],
            )
            .unwrap(),
        );

        let mut map = indexmap::IndexMap::new();
        map.insert(schema_ir::value::Key::from("name"), Value::String(name));
        map.insert(schema_ir::value::Key::from("age"), Value::Number(age));
        map.insert(schema_ir::value::Key::from("active"), Value::Bool(active));
        let input = Value::Object(map);

        let decoded = schema.decode(&input).unwrap().value;
        let encoded = schema.encode(&decoded).unwrap().value;
        prop_assert_eq!(encoded, input);
    }

    #[test]
    fn decode_then_encode_roundtrips_tuple(a in 0.0f64..1000.0, b in ".*") {
        let schema: Schema = Schema::new(tuple(vec![element(number()), element(string())], None).unwrap());
        let input = Value::Array(vec![Value::Number(a), Value::String(b)]);

        let decoded = schema.decode(&input).unwrap().value;
        let encoded = schema.encode(&decoded).unwrap().value;
        prop_assert_eq!(encoded, input);
    }
}

// §8 property 2: is(s)(x) ⇔ decode(s)(x).isSuccess, for non-Transform schemas.
proptest! {
    #[test]
    fn is_agrees_with_decode_success(n in any::<f64>()) {
        let schema: Schema = Schema::new(number());
        prop_assert_eq!(schema.is(&Value::Number(n)), schema.decode(&Value::Number(n)).is_ok());
    }

    #[test]
    fn is_agrees_with_decode_failure_on_strings(s in ".*") {
        let schema: Schema = Schema::new(number());
        let v = Value::String(s);
        prop_assert_eq!(schema.is(&v), schema.decode(&v).is_ok());
    }
}
