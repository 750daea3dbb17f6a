//! Leaf keyword and literal combinators.

use crate::ast::literal::{LiteralValue, UniqueSymbol};
use crate::ast::Ast;
use crate::value::SymbolId;

pub fn never() -> Ast {
    Ast::never()
}
pub fn unknown() -> Ast {
    Ast::unknown()
}
pub fn any() -> Ast {
    Ast::any()
}
pub fn void() -> Ast {
    Ast::void()
}
pub fn undefined() -> Ast {
    Ast::undefined()
}
pub fn string() -> Ast {
    Ast::string()
}
pub fn number() -> Ast {
    Ast::number()
}
pub fn boolean() -> Ast {
    Ast::boolean()
}
pub fn bigint() -> Ast {
    Ast::bigint()
}
pub fn symbol() -> Ast {
    Ast::symbol()
}
pub fn object() -> Ast {
    Ast::object()
}

pub fn literal(value: impl Into<LiteralValue>) -> Ast {
    Ast::literal(value.into())
}

pub fn unique_symbol(id: SymbolId) -> Ast {
    Ast::unique_symbol(UniqueSymbol(id))
}

/// `nullable(ast)`: `ast` widened to also accept `null`, modeled as
/// `union(ast, literal(null))` rather than a dedicated AST variant — the
/// AST's closed variant set (§3.1) has no `Nullable` node, so this is a
/// combinator-level convenience built from `union` + `literal`.
pub fn nullable(ast: Ast) -> Ast {
    Ast::union(vec![ast, Ast::literal(LiteralValue::Null)])
}
