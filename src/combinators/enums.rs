//! `enums`: an ordered list of named literal variants (§3.1 Enums).

use crate::ast::error::AstError;
use crate::ast::literal::LiteralValue;
use crate::ast::Ast;

pub fn enums<N: Into<String>, V: Into<LiteralValue>>(variants: Vec<(N, V)>) -> Result<Ast, AstError> {
    let variants = variants.into_iter().map(|(name, value)| (name.into(), value.into())).collect();
    Ast::enums(variants)
}
