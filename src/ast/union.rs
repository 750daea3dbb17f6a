//! Union normalization (§3.2 invariant 1, §4.B "Union flattening and
//! simplification happen inside `createUnion`").

use super::annotations::Annotations;
use super::{Ast, AstKind};

/// Flattens nested unions, drops `never` members, collapses to `unknown`/
/// `any` if either is present, deduplicates by structural equality
/// preserving first-seen order, and requires at least two survivors.
///
/// - Zero survivors → `never` (the only sound "empty union").
/// - One survivor → that member itself (a one-member union is not a union).
/// - `unknown`/`any` present → that keyword alone, per §8 property 4:
///   `union(unknown, s) ≡ unknown`.
pub fn create_union(members: Vec<Ast>) -> Ast {
    let mut flat = Vec::new();
    flatten(members, &mut flat);

    if flat.iter().any(|m| m.is_unknown()) {
        return Ast::unknown();
    }
    if flat.iter().any(|m| m.is_any()) {
        return Ast::any();
    }

    let mut deduped: Vec<Ast> = Vec::new();
    for member in flat {
        if member.is_never() {
            continue;
        }
        if !deduped.iter().any(|existing| existing == &member) {
            deduped.push(member);
        }
    }

    match deduped.len() {
        0 => Ast::never(),
        1 => deduped.into_iter().next().expect("len checked"),
        _ => Ast::new(AstKind::Union(deduped), Annotations::new()),
    }
}

fn flatten(members: Vec<Ast>, out: &mut Vec<Ast>) {
    for member in members {
        match member.kind() {
            AstKind::Union(inner) => flatten(inner.clone(), out),
            _ => out.push(member),
        }
    }
}
