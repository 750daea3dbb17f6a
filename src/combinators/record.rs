//! `record`: a `TypeLiteral` with no declared properties, typing every key
//! through a single index signature (§3.1 TypeLiteral, index signatures).

use crate::ast::error::AstError;
use crate::ast::struct_lit::IndexSignature;
use crate::ast::Ast;

pub fn record(parameter: Ast, value: Ast) -> Result<Ast, AstError> {
    Ast::type_literal(Vec::new(), vec![IndexSignature { parameter, ast: value, readonly: false }])
}
