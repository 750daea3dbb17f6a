//! Transform AST: a fallible bidirectional mapping between two ASTs
//! (§3.1, invariant 6, §4.D.1–2).

use std::sync::Arc;

use crate::options::ParseOptions;
use crate::result::ParseResult;
use crate::value::Value;

use super::Ast;

pub type TransformFn = Arc<dyn Fn(&Value, &ParseOptions) -> ParseResult<Value> + Send + Sync>;

#[derive(Clone)]
pub struct Transform {
    pub from: Ast,
    pub to: Ast,
    pub decode: TransformFn,
    pub encode: TransformFn,
}

impl std::fmt::Debug for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transform")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("decode", &"<fn>")
            .field("encode", &"<fn>")
            .finish()
    }
}

impl PartialEq for Transform {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && Arc::ptr_eq(&self.decode, &other.decode)
            && Arc::ptr_eq(&self.encode, &other.encode)
    }
}
