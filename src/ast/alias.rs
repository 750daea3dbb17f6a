//! TypeAlias AST: a transparent wrapper carrying an identity interpreter
//! extensions can key off of (§3.1).

use super::Ast;
use super::annotations::Annotations;

#[derive(Debug, Clone, PartialEq)]
pub struct TypeAlias {
    pub type_parameters: Vec<Ast>,
    pub ast: Ast,
    /// Annotations carried by the alias itself, separate from the wrapped
    /// type's own annotations — §4.D.1: "Annotations on the alias
    /// contribute to failure messages."
    pub alias_annotations: Annotations,
}
