//! Tuple AST: fixed elements, an optional rest segment, and a readonly flag
//! (§3.1, invariant 2, §4.D.1).

use super::Ast;
use super::error::AstError;

/// One fixed tuple position.
#[derive(Debug, Clone, PartialEq)]
pub struct TupleElement {
    pub ast: Ast,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tuple {
    /// Leading fixed elements. Invariant 2: optional elements only after
    /// required ones.
    pub elements: Vec<TupleElement>,
    /// `rest[0]` is the repeating element type for the variable-length
    /// middle; `rest[1..]` are trailing fixed element types that follow the
    /// repeated run (modeling `[...A[], B]`). `None` means a plain fixed
    /// tuple with no variable-length portion.
    pub rest: Option<Vec<Ast>>,
    pub readonly: bool,
}

impl Tuple {
    pub(crate) fn validate(
        elements: &[TupleElement],
        rest: &Option<Vec<Ast>>,
    ) -> Result<(), AstError> {
        let mut seen_optional = false;
        for (i, el) in elements.iter().enumerate() {
            if el.optional {
                seen_optional = true;
            } else if seen_optional {
                return Err(AstError::OptionalBeforeRequiredTupleElement(i));
            }
        }
        if let Some(rest) = rest {
            if rest.is_empty() {
                return Err(AstError::MultipleRestSegments);
            }
        }
        Ok(())
    }

    pub fn required_count(&self) -> usize {
        self.elements.iter().filter(|e| !e.optional).count()
    }

    /// The trailing fixed element types that follow the rest's repeating
    /// element, i.e. `rest[1..]`.
    pub fn rest_trailing(&self) -> &[Ast] {
        match &self.rest {
            Some(r) if r.len() > 1 => &r[1..],
            _ => &[],
        }
    }

    /// The repeating element type for the rest's variable-length middle,
    /// i.e. `rest[0]`.
    pub fn rest_head(&self) -> Option<&Ast> {
        self.rest.as_ref().and_then(|r| r.first())
    }
}
