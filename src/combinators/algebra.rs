//! Re-exports of the AST algebra (component B) under the combinator
//! surface's naming, so callers `use schema_ir::combinators::*` and get
//! `pick`/`omit`/`partial`/`extend`/`keyof` alongside the constructors.

use crate::ast::error::AstError;
use crate::ast::Ast;
use crate::value::Key;

pub fn pick(ast: &Ast, keys: &[Key]) -> Result<Ast, AstError> {
    crate::algebra::pick(ast, keys)
}

pub fn omit(ast: &Ast, keys: &[Key]) -> Result<Ast, AstError> {
    crate::algebra::omit(ast, keys)
}

pub fn partial(ast: &Ast) -> Ast {
    crate::algebra::partial(ast)
}

pub fn extend(a: &Ast, b: &Ast) -> Result<Ast, AstError> {
    crate::algebra::extend(a, b)
}

pub fn keyof(ast: &Ast) -> Ast {
    crate::algebra::keyof(ast)
}
