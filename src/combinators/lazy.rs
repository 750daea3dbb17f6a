//! `lazy`: deferred, recursion-capable schema (§3.1 Lazy, §9).

use crate::ast::lazy::Thunk;
use crate::ast::Ast;

pub fn lazy(thunk: impl Fn() -> Ast + Send + Sync + 'static) -> Ast {
    let thunk: Thunk = std::sync::Arc::new(thunk);
    Ast::lazy(thunk)
}
