//! `transform`/`transform_or_fail`: fallible bidirectional mappings
//! (§3.1 Transform, §7 "transform guarantees success by contract").

use crate::ast::transform::TransformFn;
use crate::ast::Ast;
use crate::options::ParseOptions;
use crate::result::{ParseResult, Success};
use crate::value::Value;

/// An infallible mapping in both directions: `transform` "guarantees
/// success by contract" (§7), so `decode`/`encode` never fail on their own
/// account (though `from`/`to`'s own decode can still fail upstream).
pub fn transform(
    from: Ast,
    to: Ast,
    decode: impl Fn(&Value) -> Value + Send + Sync + 'static,
    encode: impl Fn(&Value) -> Value + Send + Sync + 'static,
) -> Ast {
    let decode_fn: TransformFn = std::sync::Arc::new(move |v: &Value, _opts: &ParseOptions| Ok(Success::new(decode(v))));
    let encode_fn: TransformFn = std::sync::Arc::new(move |v: &Value, _opts: &ParseOptions| Ok(Success::new(encode(v))));
    Ast::transform(from, to, decode_fn, encode_fn)
}

/// Opts into failure on either leg (§7: "Transforms opt into failure via
/// `transformOrFail`").
pub fn transform_or_fail(
    from: Ast,
    to: Ast,
    decode: impl Fn(&Value, &ParseOptions) -> ParseResult<Value> + Send + Sync + 'static,
    encode: impl Fn(&Value, &ParseOptions) -> ParseResult<Value> + Send + Sync + 'static,
) -> Ast {
    Ast::transform(from, to, std::sync::Arc::new(decode), std::sync::Arc::new(encode))
}
