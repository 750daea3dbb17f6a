//! The AST algebra: `pick`, `omit`, `partial`, `extend`, `keyof` (component B,
//! §4.B). Each operation is defined recursively and preserves the decoded
//! shape under the natural interpretation, distributing over `Union` and
//! recursing through `Refinement`/`Transform`/`TypeAlias`/`Lazy` wrappers.

use crate::ast::error::AstError;
use crate::ast::literal::LiteralValue;
use crate::ast::struct_lit::{IndexSignature, PropertySignature, TypeLiteral};
use crate::ast::{Ast, AstKind};
use crate::value::Key;

/// `keyof(ast)`: a `Union` of literal member names. For `TypeLiteral`,
/// the property names; for `Union`, the intersection of each member's key
/// set; through `Refinement`/`Transform`/`TypeAlias`/`Lazy`, recurse on the
/// inner type.
pub fn keyof(ast: &Ast) -> Ast {
    match ast.kind() {
        AstKind::TypeLiteral(tl) => {
            let members = tl
                .properties
                .iter()
                .map(|p| key_literal(&p.name))
                .collect();
            Ast::union(members)
        }
        AstKind::Union(members) => {
            let mut key_sets: Vec<Vec<Key>> = members.iter().map(keys_of).collect();
            let Some(first) = key_sets.pop() else {
                return Ast::never();
            };
            let intersection = key_sets.into_iter().fold(first, |acc, keys| {
                acc.into_iter().filter(|k| keys.contains(k)).collect()
            });
            Ast::union(intersection.into_iter().map(|k| key_literal(&k)).collect())
        }
        AstKind::Refinement(r) => keyof(&r.from),
        AstKind::Transform(t) => keyof(&t.from),
        AstKind::TypeAlias(a) => keyof(&a.ast),
        AstKind::Lazy(l) => keyof(&(l.thunk)()),
        _ => Ast::never(),
    }
}

fn keys_of(ast: &Ast) -> Vec<Key> {
    match ast.kind() {
        AstKind::TypeLiteral(tl) => tl.properties.iter().map(|p| p.name.clone()).collect(),
        AstKind::Refinement(r) => keys_of(&r.from),
        AstKind::Transform(t) => keys_of(&t.from),
        AstKind::TypeAlias(a) => keys_of(&a.ast),
        AstKind::Lazy(l) => keys_of(&(l.thunk)()),
        _ => Vec::new(),
    }
}

fn key_literal(key: &Key) -> Ast {
    match key {
        Key::String(s) => Ast::literal(LiteralValue::String(s.clone())),
        Key::Symbol(s) => Ast::unique_symbol(crate::ast::literal::UniqueSymbol(s.clone())),
    }
}

/// `pick(ast, keys)`: on `TypeLiteral`, filters property signatures to
/// `keys`, and keeps an index signature only if every requested key that
/// isn't an explicit property would still satisfy that index's parameter
/// (conservatively: only when no picked key is an explicit property name
/// that the index signature would otherwise also have matched — index
/// signatures describe the *excess* key space, so they survive `pick`
/// unchanged; pick only narrows declared properties). Distributes over
/// `Union`. Preserves the container's own annotations.
pub fn pick(ast: &Ast, keys: &[Key]) -> Result<Ast, AstError> {
    match ast.kind() {
        AstKind::TypeLiteral(tl) => {
            let properties = tl
                .properties
                .iter()
                .filter(|p| keys.contains(&p.name))
                .cloned()
                .collect();
            let rebuilt = Ast::type_literal(properties, tl.index_signatures.clone())?;
            Ok(rebuilt.merge_annotations(ast.annotations()))
        }
        AstKind::Union(members) => {
            let picked: Result<Vec<_>, _> = members.iter().map(|m| pick(m, keys)).collect();
            Ok(Ast::union(picked?).merge_annotations(ast.annotations()))
        }
        _ => Err(AstError::NotStructLike),
    }
}

/// `omit(ast, keys)`: the dual of `pick` — keeps every property signature
/// *not* named in `keys`.
pub fn omit(ast: &Ast, keys: &[Key]) -> Result<Ast, AstError> {
    match ast.kind() {
        AstKind::TypeLiteral(tl) => {
            let properties = tl
                .properties
                .iter()
                .filter(|p| !keys.contains(&p.name))
                .cloned()
                .collect();
            let rebuilt = Ast::type_literal(properties, tl.index_signatures.clone())?;
            Ok(rebuilt.merge_annotations(ast.annotations()))
        }
        AstKind::Union(members) => {
            let omitted: Result<Vec<_>, _> = members.iter().map(|m| omit(m, keys)).collect();
            Ok(Ast::union(omitted?).merge_annotations(ast.annotations()))
        }
        _ => Err(AstError::NotStructLike),
    }
}

/// `partial(ast)`: on `TypeLiteral`, marks every property optional. On
/// `Tuple`, marks every fixed element optional and, if a `rest` segment is
/// present, unions `undefined` into its repeating element type. Distributes
/// over `Union`.
pub fn partial(ast: &Ast) -> Ast {
    match ast.kind() {
        AstKind::TypeLiteral(tl) => {
            let properties = tl
                .properties
                .iter()
                .cloned()
                .map(|mut p| {
                    p.optional = true;
                    p
                })
                .collect();
            // Properties were already valid (no duplicate keys); marking
            // every one optional cannot introduce a new collision.
            Ast::type_literal(properties, tl.index_signatures.clone())
                .expect("partial cannot violate struct invariants")
                .merge_annotations(ast.annotations())
        }
        AstKind::Tuple(t) => {
            let elements = t
                .elements
                .iter()
                .cloned()
                .map(|mut e| {
                    e.optional = true;
                    e
                })
                .collect();
            // The rest's repeating element (rest[0]) must admit `undefined` too,
            // since a partial tuple's variable-length middle is itself optional
            // per-position; rest[1..]'s trailing fixed types are unaffected.
            let rest = t.rest.clone().map(|mut r| {
                if !r.is_empty() {
                    r[0] = Ast::union(vec![r[0].clone(), Ast::undefined()]);
                }
                r
            });
            Ast::tuple(elements, rest, t.readonly)
                .expect("marking every tuple element optional cannot violate tuple invariants")
                .merge_annotations(ast.annotations())
        }
        AstKind::Union(members) => {
            Ast::union(members.iter().map(partial).collect()).merge_annotations(ast.annotations())
        }
        _ => ast.clone(),
    }
}

/// `extend(a, b)`: merges two struct-like ASTs. Key collisions are an error
/// unless the two property signatures are structurally identical.
/// Distributes over unions on either side (producing the cartesian product
/// of extended pairs).
pub fn extend(a: &Ast, b: &Ast) -> Result<Ast, AstError> {
    match (a.kind(), b.kind()) {
        (AstKind::Union(members), _) => {
            let extended: Result<Vec<_>, _> = members.iter().map(|m| extend(m, b)).collect();
            Ok(Ast::union(extended?))
        }
        (_, AstKind::Union(members)) => {
            let extended: Result<Vec<_>, _> = members.iter().map(|m| extend(a, m)).collect();
            Ok(Ast::union(extended?))
        }
        (AstKind::TypeLiteral(ta), AstKind::TypeLiteral(tb)) => extend_type_literals(ta, tb),
        _ => Err(AstError::ExtendNonStruct),
    }
}

fn extend_type_literals(a: &TypeLiteral, b: &TypeLiteral) -> Result<Ast, AstError> {
    let mut properties: Vec<PropertySignature> = a.properties.clone();
    for prop in &b.properties {
        match properties.iter().find(|p| p.name == prop.name) {
            Some(existing) if existing == prop => {}
            Some(_) => return Err(AstError::ExtendKeyConflict(prop.name.to_string())),
            None => properties.push(prop.clone()),
        }
    }
    let mut index_signatures: Vec<IndexSignature> = a.index_signatures.clone();
    index_signatures.extend(b.index_signatures.clone());
    Ast::type_literal(properties, index_signatures)
}
