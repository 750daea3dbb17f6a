//! The AST node model (component A, §3, §4.A).
//!
//! `Ast` is an immutable, cheaply-cloned value object (`Rc<AstNode>`) so that
//! structural rewrites (§3.3) return new nodes sharing untouched substructure
//! rather than deep-copying, and so that recursive [`lazy::Lazy`] schemas can
//! use `Ast`'s own pointer identity as an interpreter memoization key
//! (see `lazy` module docs).

pub mod alias;
pub mod annotations;
pub mod error;
pub mod lazy;
pub mod literal;
pub mod refinement;
pub mod struct_lit;
pub mod template_literal;
pub mod transform;
pub mod tuple;
pub mod union;

use std::rc::Rc;

use annotations::Annotations;
use error::AstError;
use literal::{LiteralValue, UniqueSymbol};
use struct_lit::{IndexSignature, PropertySignature, TypeLiteral};
use template_literal::TemplateLiteral;
use tuple::{Tuple, TupleElement};

pub use alias::TypeAlias;
pub use lazy::Lazy;
pub use refinement::Refinement;
pub use transform::Transform;

/// The closed variant set (§3.1). Keywords are leaves with no payload
/// beyond the annotations every node already carries.
#[derive(Debug, Clone)]
pub enum AstKind {
    Never,
    Unknown,
    Any,
    Void,
    Undefined,
    StringKeyword,
    NumberKeyword,
    BooleanKeyword,
    BigIntKeyword,
    SymbolKeyword,
    ObjectKeyword,
    Literal(LiteralValue),
    UniqueSymbol(UniqueSymbol),
    TemplateLiteral(TemplateLiteral),
    Enums(Vec<(String, LiteralValue)>),
    Tuple(Tuple),
    TypeLiteral(TypeLiteral),
    Union(Vec<Ast>),
    Refinement(Refinement),
    Transform(Transform),
    Lazy(Lazy),
    TypeAlias(TypeAlias),
}

#[derive(Debug, Clone)]
struct AstNode {
    kind: AstKind,
    annotations: Annotations,
}

/// A schema AST node: a reference-counted handle to an immutable
/// [`AstNode`]. Clone is O(1) and preserves identity (`Ast::identity`).
#[derive(Debug, Clone)]
pub struct Ast(Rc<AstNode>);

impl Ast {
    fn new(kind: AstKind, annotations: Annotations) -> Self {
        Ast(Rc::new(AstNode { kind, annotations }))
    }

    pub fn kind(&self) -> &AstKind {
        &self.0.kind
    }

    pub fn annotations(&self) -> &Annotations {
        &self.0.annotations
    }

    /// Pointer identity of the underlying node — the memoization key
    /// interpreters use to force a given `Lazy` node exactly once per
    /// compilation (§3.3, §4.D.1, §9).
    pub fn identity(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }

    /// Returns a new `Ast` of the same variant with `overlay` merged on top
    /// of the existing annotations, newer keys winning (§4.A
    /// `mergeAnnotations`, §8 property 3).
    pub fn merge_annotations(&self, overlay: &Annotations) -> Ast {
        Ast::new(self.0.kind.clone(), self.0.annotations.merge(overlay))
    }

    // ---- leaf keyword constructors ----

    pub fn never() -> Ast {
        Ast::new(AstKind::Never, Annotations::new())
    }
    pub fn unknown() -> Ast {
        Ast::new(AstKind::Unknown, Annotations::new())
    }
    pub fn any() -> Ast {
        Ast::new(AstKind::Any, Annotations::new())
    }
    pub fn void() -> Ast {
        Ast::new(AstKind::Void, Annotations::new())
    }
    pub fn undefined() -> Ast {
        Ast::new(AstKind::Undefined, Annotations::new())
    }
    pub fn string() -> Ast {
        Ast::new(AstKind::StringKeyword, Annotations::new())
    }
    pub fn number() -> Ast {
        Ast::new(AstKind::NumberKeyword, Annotations::new())
    }
    pub fn boolean() -> Ast {
        Ast::new(AstKind::BooleanKeyword, Annotations::new())
    }
    pub fn bigint() -> Ast {
        Ast::new(AstKind::BigIntKeyword, Annotations::new())
    }
    pub fn symbol() -> Ast {
        Ast::new(AstKind::SymbolKeyword, Annotations::new())
    }
    pub fn object() -> Ast {
        Ast::new(AstKind::ObjectKeyword, Annotations::new())
    }

    pub fn literal(value: LiteralValue) -> Ast {
        Ast::new(AstKind::Literal(value), Annotations::new())
    }

    pub fn unique_symbol(symbol: UniqueSymbol) -> Ast {
        Ast::new(AstKind::UniqueSymbol(symbol), Annotations::new())
    }

    pub fn template_literal(template: TemplateLiteral) -> Ast {
        Ast::new(AstKind::TemplateLiteral(template), Annotations::new())
    }

    pub fn enums(variants: Vec<(String, LiteralValue)>) -> Result<Ast, AstError> {
        let mut seen = std::collections::HashSet::new();
        for (name, _) in &variants {
            if !seen.insert(name.clone()) {
                return Err(AstError::DuplicatePropertyKey(name.clone()));
            }
        }
        Ok(Ast::new(AstKind::Enums(variants), Annotations::new()))
    }

    pub fn tuple(elements: Vec<TupleElement>, rest: Option<Vec<Ast>>, readonly: bool) -> Result<Ast, AstError> {
        Tuple::validate(&elements, &rest)?;
        Ok(Ast::new(
            AstKind::Tuple(Tuple { elements, rest, readonly }),
            Annotations::new(),
        ))
    }

    pub fn type_literal(
        properties: Vec<PropertySignature>,
        index_signatures: Vec<IndexSignature>,
    ) -> Result<Ast, AstError> {
        TypeLiteral::validate(&properties, &index_signatures)?;
        Ok(Ast::new(
            AstKind::TypeLiteral(TypeLiteral { properties, index_signatures }),
            Annotations::new(),
        ))
    }

    /// Constructs a `Union`, applying the normalization invariant (§3.2.1):
    /// flatten nested unions, drop `never` members, collapse to `unknown`/
    /// `any` if present, deduplicate by structural equality, and require
    /// at least two surviving members — collapsing to the sole member (or
    /// `never`) otherwise.
    pub fn union(members: Vec<Ast>) -> Ast {
        union::create_union(members)
    }

    pub fn refinement(from: Ast, predicate: refinement::Predicate, annotations: Annotations) -> Ast {
        Ast::new(AstKind::Refinement(Refinement { from, predicate }), annotations)
    }

    pub fn transform(from: Ast, to: Ast, decode: transform::TransformFn, encode: transform::TransformFn) -> Ast {
        Ast::new(
            AstKind::Transform(Transform { from, to, decode, encode }),
            Annotations::new(),
        )
    }

    pub fn lazy(thunk: lazy::Thunk) -> Ast {
        Ast::new(AstKind::Lazy(Lazy { thunk }), Annotations::new())
    }

    pub fn type_alias(type_parameters: Vec<Ast>, ast: Ast, alias_annotations: Annotations) -> Ast {
        Ast::new(
            AstKind::TypeAlias(TypeAlias { type_parameters, ast, alias_annotations }),
            Annotations::new(),
        )
    }

    // ---- structural predicates (mechanical variant discrimination) ----

    pub fn is_never(&self) -> bool {
        matches!(self.kind(), AstKind::Never)
    }
    pub fn is_unknown(&self) -> bool {
        matches!(self.kind(), AstKind::Unknown)
    }
    pub fn is_any(&self) -> bool {
        matches!(self.kind(), AstKind::Any)
    }
    pub fn is_string_keyword(&self) -> bool {
        matches!(self.kind(), AstKind::StringKeyword)
    }
    pub fn is_number_keyword(&self) -> bool {
        matches!(self.kind(), AstKind::NumberKeyword)
    }
    pub fn is_literal(&self) -> bool {
        matches!(self.kind(), AstKind::Literal(_))
    }
    pub fn is_union(&self) -> bool {
        matches!(self.kind(), AstKind::Union(_))
    }
    pub fn is_refinement(&self) -> bool {
        matches!(self.kind(), AstKind::Refinement(_))
    }
    pub fn is_transform(&self) -> bool {
        matches!(self.kind(), AstKind::Transform(_))
    }
    pub fn is_lazy(&self) -> bool {
        matches!(self.kind(), AstKind::Lazy(_))
    }
    pub fn is_type_literal(&self) -> bool {
        matches!(self.kind(), AstKind::TypeLiteral(_))
    }
    pub fn is_tuple(&self) -> bool {
        matches!(self.kind(), AstKind::Tuple(_))
    }
    pub fn is_type_alias(&self) -> bool {
        matches!(self.kind(), AstKind::TypeAlias(_))
    }

    /// Renders a short, human-facing description of the shape this node
    /// describes, used by the default message synthesis (§7) when no
    /// `Identifier`/`Message` annotation is present.
    pub fn render(&self) -> String {
        if let Some(id) = self.annotations().identifier() {
            return id.to_string();
        }
        match self.kind() {
            AstKind::Never => "never".to_string(),
            AstKind::Unknown => "unknown".to_string(),
            AstKind::Any => "any".to_string(),
            AstKind::Void => "void".to_string(),
            AstKind::Undefined => "undefined".to_string(),
            AstKind::StringKeyword => "string".to_string(),
            AstKind::NumberKeyword => "number".to_string(),
            AstKind::BooleanKeyword => "boolean".to_string(),
            AstKind::BigIntKeyword => "bigint".to_string(),
            AstKind::SymbolKeyword => "symbol".to_string(),
            AstKind::ObjectKeyword => "object".to_string(),
            AstKind::Literal(v) => v.to_string(),
            AstKind::UniqueSymbol(s) => s.0.to_string(),
            AstKind::TemplateLiteral(t) => format!("`{}...`", t.head),
            AstKind::Enums(variants) => format!(
                "enum {{{}}}",
                variants.iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>().join(" | ")
            ),
            AstKind::Tuple(_) => "tuple".to_string(),
            AstKind::TypeLiteral(_) => "struct".to_string(),
            AstKind::Union(members) => members.iter().map(|m| m.render()).collect::<Vec<_>>().join(" | "),
            AstKind::Refinement(r) => r.from.render(),
            AstKind::Transform(t) => t.from.render(),
            AstKind::Lazy(_) => "<recursive>".to_string(),
            AstKind::TypeAlias(a) => a.ast.render(),
        }
    }
}

/// Structural equality ignores annotations and `Ast` identity, comparing
/// only the shape — this is what union-member deduplication (§3.2
/// invariant 1) and `extend`'s "structurally identical" collision check
/// (§4.B) are defined against. `Transform`/`Refinement`/`Lazy` carry
/// closures that cannot be compared for behavioral equivalence, so two
/// such nodes are equal only if they share predicate/thunk identity.
impl PartialEq for Ast {
    fn eq(&self, other: &Self) -> bool {
        if Rc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        match (self.kind(), other.kind()) {
            (AstKind::Never, AstKind::Never)
            | (AstKind::Unknown, AstKind::Unknown)
            | (AstKind::Any, AstKind::Any)
            | (AstKind::Void, AstKind::Void)
            | (AstKind::Undefined, AstKind::Undefined)
            | (AstKind::StringKeyword, AstKind::StringKeyword)
            | (AstKind::NumberKeyword, AstKind::NumberKeyword)
            | (AstKind::BooleanKeyword, AstKind::BooleanKeyword)
            | (AstKind::BigIntKeyword, AstKind::BigIntKeyword)
            | (AstKind::SymbolKeyword, AstKind::SymbolKeyword)
            | (AstKind::ObjectKeyword, AstKind::ObjectKeyword) => true,
            (AstKind::Literal(a), AstKind::Literal(b)) => a == b,
            (AstKind::UniqueSymbol(a), AstKind::UniqueSymbol(b)) => a == b,
            (AstKind::TemplateLiteral(a), AstKind::TemplateLiteral(b)) => a == b,
            (AstKind::Enums(a), AstKind::Enums(b)) => a == b,
            (AstKind::Tuple(a), AstKind::Tuple(b)) => a == b,
            (AstKind::TypeLiteral(a), AstKind::TypeLiteral(b)) => a == b,
            (AstKind::Union(a), AstKind::Union(b)) => a == b,
            (AstKind::Refinement(a), AstKind::Refinement(b)) => a == b,
            (AstKind::Transform(a), AstKind::Transform(b)) => a == b,
            (AstKind::Lazy(a), AstKind::Lazy(b)) => a == b,
            (AstKind::TypeAlias(a), AstKind::TypeAlias(b)) => a == b,
            _ => false,
        }
    }
}
