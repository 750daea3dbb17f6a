use rstest::rstest;
use schema_ir::combinators::{any, bigint, boolean, never, number, object, string, symbol, unknown};
use schema_ir::value::{SymbolId, Value};
use schema_ir::Schema;

#[rstest]
#[case(string(), Value::String("x".into()), true)]
#[case(string(), Value::Number(1.0), false)]
#[case(number(), Value::Number(1.0), true)]
#[case(number(), Value::String("1".into()), false)]
#[case(boolean(), Value::Bool(true), true)]
#[case(boolean(), Value::Number(0.0), false)]
#[case(bigint(), Value::BigInt(1), true)]
#[case(bigint(), Value::Number(1.0), false)]
#[case(object(), Value::Array(vec![]), true)]
#[case(object(), Value::String("x".into()), false)]
#[case(unknown(), Value::Null, true)]
#[case(any(), Value::Bool(false), true)]
#[case(never(), Value::Null, false)]
fn keyword_decode_matches_the_expected_type_test(#[case] ast: schema_ir::ast::Ast, #[case] input: Value, #[case] expected: bool) {
    let schema: Schema = Schema::new(ast);
    assert_eq!(schema.decode(&input).is_ok(), expected);
}

#[test]
fn symbol_keyword_accepts_any_symbol_identity() {
    let schema: Schema = Schema::new(symbol());
    assert!(schema.decode(&Value::Symbol(SymbolId::new("s"))).is_ok());
    assert!(schema.decode(&Value::String("s".into())).is_err());
}
