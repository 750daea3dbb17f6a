//! `union`: normalized sum of member schemas (§3.2, §4.B).

use crate::ast::Ast;

pub fn union(members: Vec<Ast>) -> Ast {
    Ast::union(members)
}
