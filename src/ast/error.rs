//! Build-time structural errors (§7: "programmer errors, not user-data
//! errors"). Raised eagerly from the fallible AST constructors in
//! [`crate::ast`] and [`crate::algebra`].

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AstError {
    #[error("duplicate property key `{0}` in struct")]
    DuplicatePropertyKey(String),

    #[error("duplicate index signature parameter `{0}`")]
    DuplicateIndexSignatureParam(String),

    #[error("tuple has more than one rest segment")]
    MultipleRestSegments,

    #[error("optional tuple element at index {0} precedes a required element")]
    OptionalBeforeRequiredTupleElement(usize),

    #[error("invalid template literal span: {0}")]
    InvalidTemplateLiteralSpan(String),

    #[error("cannot extend: key `{0}` has conflicting property signatures on each side")]
    ExtendKeyConflict(String),

    #[error("extend requires both sides to be struct-like (TypeLiteral or union thereof)")]
    ExtendNonStruct,

    #[error("pick/omit/keyof require a struct-like AST (TypeLiteral or union thereof)")]
    NotStructLike,

    #[error("a union must have at least two distinct, non-never members")]
    EmptyUnion,

    #[error("index signature parameter must be string, symbol, a template literal, or a refinement thereof")]
    InvalidIndexSignatureParameter,
}
