//! `tuple`/`array`/`non_empty_array`: builds a `Tuple` from elements plus an
//! optional rest (§4.F).

use crate::ast::error::AstError;
use crate::ast::tuple::TupleElement;
use crate::ast::Ast;

use super::refine::filter;

pub fn element(ast: Ast) -> TupleElement {
    TupleElement { ast, optional: false }
}

pub fn optional_element(ast: Ast) -> TupleElement {
    TupleElement { ast, optional: true }
}

/// `rest[0]` (if present) is the repeating element type for the
/// variable-length middle; `rest[1..]` are trailing fixed types (§9).
pub fn tuple(elements: Vec<TupleElement>, rest: Option<Vec<Ast>>) -> Result<Ast, AstError> {
    Ast::tuple(elements, rest, false)
}

/// `array(s)`: a plain, unbounded homogeneous sequence of `s` — a `Tuple`
/// with no fixed elements and `s` as the sole repeating rest type (§4.F).
pub fn array(element_ast: Ast) -> Ast {
    Ast::tuple(Vec::new(), Some(vec![element_ast]), false).expect("a bare rest-only tuple satisfies every tuple invariant")
}

/// `non_empty_array(s)`: `array(s)` further refined to length >= 1 (§4.F:
/// "nonEmpty refines length >= 1").
pub fn non_empty_array(element_ast: Ast) -> Ast {
    let arr = array(element_ast);
    filter(
        arr,
        |v| v.as_array().map(|a| !a.is_empty()).unwrap_or(false),
        |v| format!("{v:?} must contain at least one element"),
    )
}
