//! TypeLiteral AST: property signatures plus index signatures — the struct
//! and record shapes (§3.1, invariant 3, §4.D.1).

use crate::value::Key;

use super::error::AstError;
use super::{Ast, AstKind};

#[derive(Debug, Clone, PartialEq)]
pub struct PropertySignature {
    pub name: Key,
    pub ast: Ast,
    pub optional: bool,
    pub readonly: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexSignature {
    /// Restricted to `string`, `symbol`, a `TemplateLiteral`, or a
    /// `Refinement` thereof — validated by [`validate_index_parameter`].
    pub parameter: Ast,
    pub ast: Ast,
    pub readonly: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeLiteral {
    pub properties: Vec<PropertySignature>,
    pub index_signatures: Vec<IndexSignature>,
}

/// Walks through `Refinement` wrappers to find the underlying parameter
/// kind, per invariant: "Parameter must be string, symbol, a
/// TemplateLiteral, or a Refinement thereof."
pub fn validate_index_parameter(ast: &Ast) -> Result<(), AstError> {
    let mut current = ast;
    loop {
        match &current.kind() {
            AstKind::StringKeyword | AstKind::SymbolKeyword | AstKind::TemplateLiteral(_) => {
                return Ok(())
            }
            AstKind::Refinement(r) => current = &r.from,
            _ => return Err(AstError::InvalidIndexSignatureParameter),
        }
    }
}

impl TypeLiteral {
    pub(crate) fn validate(
        properties: &[PropertySignature],
        index_signatures: &[IndexSignature],
    ) -> Result<(), AstError> {
        let mut seen = std::collections::HashSet::new();
        for p in properties {
            if !seen.insert(&p.name) {
                return Err(AstError::DuplicatePropertyKey(p.name.to_string()));
            }
        }
        let mut seen_params: Vec<&Ast> = Vec::new();
        for ix in index_signatures {
            validate_index_parameter(&ix.parameter)?;
            if seen_params.iter().any(|p| **p == ix.parameter) {
                return Err(AstError::DuplicateIndexSignatureParam(ix.parameter.render()));
            }
            seen_params.push(&ix.parameter);
        }
        Ok(())
    }

    pub fn find_property(&self, name: &Key) -> Option<&PropertySignature> {
        self.properties.iter().find(|p| &p.name == name)
    }
}
