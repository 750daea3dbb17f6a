//! The parser interpreter (component D, §4.D): a recursive fold from
//! [`Ast`] to decode/encode behavior, with precise failure paths,
//! transforms, refinements, and recursion via the `Lazy` memo table in
//! [`CompileContext`].

use std::collections::HashSet;

use crate::ast::struct_lit::TypeLiteral;
use crate::ast::tuple::Tuple;
use crate::ast::{Ast, AstKind};
use crate::options::{OnExcessProperty, ParseOptions};
use crate::result::{Failure, NonEmpty, ParseIssue, ParseResult, RefinementFailureKind, Success, TransformFailureKind};
use crate::value::{Key, Value};

use super::CompileContext;

fn type_fail(ast: &Ast, actual: &Value) -> Failure {
    Failure::single(ParseIssue::Type { expected: ast.clone(), actual: actual.clone() })
}

/// Decodes `input` against `ast`. §4.D.1 covers every variant's semantics.
pub fn decode_node(ast: &Ast, input: &Value, options: &ParseOptions, ctx: &CompileContext) -> ParseResult<Value> {
    match ast.kind() {
        AstKind::Never => Err(type_fail(ast, input)),
        AstKind::Unknown | AstKind::Any => Ok(Success::new(input.clone())),
        AstKind::Void | AstKind::Undefined => {
            if input.is_null() {
                Ok(Success::new(input.clone()))
            } else {
                Err(type_fail(ast, input))
            }
        }
        AstKind::StringKeyword => match input {
            Value::String(_) => Ok(Success::new(input.clone())),
            _ => Err(type_fail(ast, input)),
        },
        AstKind::NumberKeyword => match input {
            Value::Number(_) => Ok(Success::new(input.clone())),
            _ => Err(type_fail(ast, input)),
        },
        AstKind::BooleanKeyword => match input {
            Value::Bool(_) => Ok(Success::new(input.clone())),
            _ => Err(type_fail(ast, input)),
        },
        AstKind::BigIntKeyword => match input {
            Value::BigInt(_) => Ok(Success::new(input.clone())),
            _ => Err(type_fail(ast, input)),
        },
        AstKind::SymbolKeyword => match input {
            Value::Symbol(_) => Ok(Success::new(input.clone())),
            _ => Err(type_fail(ast, input)),
        },
        AstKind::ObjectKeyword => match input {
            Value::Object(_) | Value::Array(_) => Ok(Success::new(input.clone())),
            _ => Err(type_fail(ast, input)),
        },
        AstKind::Literal(lit) => {
            if lit == input {
                Ok(Success::new(input.clone()))
            } else {
                Err(type_fail(ast, input))
            }
        }
        AstKind::UniqueSymbol(expected) => match input {
            Value::Symbol(s) if *s == expected.0 => Ok(Success::new(input.clone())),
            _ => Err(type_fail(ast, input)),
        },
        AstKind::TemplateLiteral(template) => match input {
            Value::String(s) => {
                let re = ctx.regex_for(ast, template);
                if re.is_match(s) {
                    Ok(Success::new(input.clone()))
                } else {
                    Err(type_fail(ast, input))
                }
            }
            _ => Err(type_fail(ast, input)),
        },
        AstKind::Enums(variants) => {
            if variants.iter().any(|(_, v)| v == input) {
                Ok(Success::new(input.clone()))
            } else {
                Err(type_fail(ast, input))
            }
        }
        AstKind::Tuple(tuple) => decode_tuple(ast, tuple, input, options, ctx),
        AstKind::TypeLiteral(tl) => decode_type_literal(ast, tl, input, options, ctx),
        AstKind::Union(members) => decode_union(ast, members, input, options, ctx),
        AstKind::Refinement(r) => decode_refinement(ast, r, input, options, ctx),
        AstKind::Transform(t) => decode_transform(ast, t, input, options, ctx),
        AstKind::Lazy(l) => {
            let resolved = ctx.resolve_lazy(ast, &l.thunk);
            decode_node(&resolved, input, options, ctx)
        }
        AstKind::TypeAlias(a) => decode_node(&a.ast, input, options, ctx),
    }
}

fn decode_refinement(
    ast: &Ast,
    r: &crate::ast::Refinement,
    input: &Value,
    options: &ParseOptions,
    ctx: &CompileContext,
) -> ParseResult<Value> {
    match decode_node(&r.from, input, options, ctx) {
        Ok(success) => {
            if (r.predicate)(&success.value) {
                Ok(success)
            } else {
                Err(Failure::single(ParseIssue::Refinement {
                    ast: ast.clone(),
                    actual: success.value,
                    kind: RefinementFailureKind::Predicate,
                    inner: None,
                }))
            }
        }
        Err(failure) => Err(Failure::single(ParseIssue::Refinement {
            ast: ast.clone(),
            actual: input.clone(),
            kind: RefinementFailureKind::From,
            inner: Some(Box::new(failure.0)),
        })),
    }
}

fn decode_transform(
    ast: &Ast,
    t: &crate::ast::Transform,
    input: &Value,
    options: &ParseOptions,
    ctx: &CompileContext,
) -> ParseResult<Value> {
    match decode_node(&t.from, input, options, ctx) {
        Ok(from_success) => match (t.decode)(&from_success.value, options) {
            Ok(mut to_success) => {
                let mut warnings = from_success.warnings;
                warnings.append(&mut to_success.warnings);
                Ok(Success { value: to_success.value, warnings })
            }
            Err(failure) => Err(Failure::single(ParseIssue::Transform {
                ast: ast.clone(),
                actual: from_success.value,
                kind: TransformFailureKind::Transformation,
                inner: Some(Box::new(failure.0)),
            })),
        },
        Err(failure) => Err(Failure::single(ParseIssue::Transform {
            ast: ast.clone(),
            actual: input.clone(),
            kind: TransformFailureKind::From,
            inner: Some(Box::new(failure.0)),
        })),
    }
}

/// §4.D.1 Tuple decode: array-shaped input; fixed elements first, then the
/// rest's repeating head for the stretchable middle, then the rest's
/// trailing fixed types for the final positions (§9 design: `rest[0]`
/// repeats, `rest[1..]` trail).
fn decode_tuple(ast: &Ast, tuple: &Tuple, input: &Value, options: &ParseOptions, ctx: &CompileContext) -> ParseResult<Value> {
    let Value::Array(items) = input else {
        return Err(type_fail(ast, input));
    };

    let fixed_len = tuple.elements.len();

    if tuple.rest.is_none() && items.len() > fixed_len {
        return Err(Failure::single(ParseIssue::Index {
            index: fixed_len,
            errors: NonEmpty::single(ParseIssue::Unexpected { actual: items[fixed_len].clone() }),
        }));
    }

    let mut warnings = Vec::new();
    let mut issues: Vec<ParseIssue> = Vec::new();
    let mut decoded = Vec::with_capacity(items.len());

    let mut push_index_issue = |index: usize, failure: Failure, issues: &mut Vec<ParseIssue>| {
        issues.push(ParseIssue::Index { index, errors: failure.0 });
    };

    // Fixed leading elements.
    for (i, el) in tuple.elements.iter().enumerate() {
        match items.get(i) {
            Some(value) => match decode_node(&el.ast, value, options, ctx) {
                Ok(s) => {
                    decoded.push(s.value);
                    warnings.extend(s.warnings);
                }
                Err(f) => {
                    decoded.push(Value::Null);
                    push_index_issue(i, f, &mut issues);
                    if !options.all_errors {
                        return Err(Failure(NonEmpty::single(issues.remove(0))));
                    }
                }
            },
            None if el.optional => {}
            None => {
                issues.push(ParseIssue::Index {
                    index: i,
                    errors: NonEmpty::single(ParseIssue::Missing { expected: el.ast.clone() }),
                });
                if !options.all_errors {
                    return Err(Failure(NonEmpty::single(issues.remove(0))));
                }
            }
        }
    }

    if let Some(rest) = &tuple.rest {
        let head = &rest[0];
        let trailing_types = &rest[1..];
        let stretchable_count = items.len().saturating_sub(fixed_len + trailing_types.len());
        for j in 0..stretchable_count {
            let idx = fixed_len + j;
            match decode_node(head, &items[idx], options, ctx) {
                Ok(s) => {
                    decoded.push(s.value);
                    warnings.extend(s.warnings);
                }
                Err(f) => {
                    decoded.push(Value::Null);
                    push_index_issue(idx, f, &mut issues);
                    if !options.all_errors {
                        return Err(Failure(NonEmpty::single(issues.remove(0))));
                    }
                }
            }
        }
        for (k, trailing_ast) in trailing_types.iter().enumerate() {
            let idx = fixed_len + stretchable_count + k;
            match items.get(idx) {
                Some(value) => match decode_node(trailing_ast, value, options, ctx) {
                    Ok(s) => {
                        decoded.push(s.value);
                        warnings.extend(s.warnings);
                    }
                    Err(f) => {
                        decoded.push(Value::Null);
                        push_index_issue(idx, f, &mut issues);
                        if !options.all_errors {
                            return Err(Failure(NonEmpty::single(issues.remove(0))));
                        }
                    }
                },
                None => {
                    issues.push(ParseIssue::Index {
                        index: idx,
                        errors: NonEmpty::single(ParseIssue::Missing { expected: trailing_ast.clone() }),
                    });
                    if !options.all_errors {
                        return Err(Failure(NonEmpty::single(issues.remove(0))));
                    }
                }
            }
        }
    }

    if !issues.is_empty() {
        let mut iter = issues.into_iter();
        let mut nonempty = NonEmpty::single(iter.next().expect("checked non-empty"));
        for issue in iter {
            nonempty.push(issue);
        }
        return Err(Failure(nonempty));
    }

    Ok(Success { value: Value::Array(decoded), warnings })
}

/// §4.D.1 TypeLiteral decode.
fn decode_type_literal(ast: &Ast, tl: &TypeLiteral, input: &Value, options: &ParseOptions, ctx: &CompileContext) -> ParseResult<Value> {
    if input.is_array_shaped() || !input.is_object_shaped() {
        return Err(type_fail(ast, input));
    }
    let Value::Object(obj) = input else { unreachable!() };

    let mut warnings = Vec::new();
    let mut issues: Vec<ParseIssue> = Vec::new();
    let mut out = indexmap::IndexMap::new();

    macro_rules! bail_or_collect {
        ($issue:expr) => {{
            issues.push($issue);
            if !options.all_errors {
                return Err(Failure(NonEmpty::single(issues.remove(0))));
            }
        }};
    }

    for prop in &tl.properties {
        match obj.get(&prop.name) {
            Some(value) => match decode_node(&prop.ast, value, options, ctx) {
                Ok(s) => {
                    warnings.extend(s.warnings);
                    out.insert(prop.name.clone(), s.value);
                }
                Err(f) => bail_or_collect!(ParseIssue::Key { key: prop.name.clone(), errors: f.0 }),
            },
            None if prop.optional => {}
            None => bail_or_collect!(ParseIssue::Key {
                key: prop.name.clone(),
                errors: NonEmpty::single(ParseIssue::Missing { expected: prop.ast.clone() }),
            }),
        }
    }

    let declared: HashSet<&Key> = tl.properties.iter().map(|p| &p.name).collect();
    for (key, value) in obj.iter() {
        if declared.contains(key) {
            continue;
        }
        let matched = tl
            .index_signatures
            .iter()
            .find(|ix| decode_node(&ix.parameter, &key_as_value(key), options, ctx).is_ok());
        match matched {
            Some(ix) => match decode_node(&ix.ast, value, options, ctx) {
                Ok(s) => {
                    warnings.extend(s.warnings);
                    out.insert(key.clone(), s.value);
                }
                Err(f) => bail_or_collect!(ParseIssue::Key { key: key.clone(), errors: f.0 }),
            },
            None => match options.on_excess_property {
                OnExcessProperty::Ignore => {}
                OnExcessProperty::Error => {
                    if options.is_unexpected_allowed {
                        // Guard mode: excess keys never hard-fail.
                    } else {
                        bail_or_collect!(ParseIssue::Key {
                            key: key.clone(),
                            errors: NonEmpty::single(ParseIssue::Unexpected { actual: value.clone() }),
                        });
                    }
                }
            },
        }
    }

    if !issues.is_empty() {
        let mut iter = issues.into_iter();
        let mut nonempty = NonEmpty::single(iter.next().expect("checked non-empty"));
        for issue in iter {
            nonempty.push(issue);
        }
        return Err(Failure(nonempty));
    }

    Ok(Success { value: Value::Object(out), warnings })
}

fn key_as_value(key: &Key) -> Value {
    match key {
        Key::String(s) => Value::String(s.clone()),
        Key::Symbol(s) => Value::Symbol(s.clone()),
    }
}

/// §4.D.1 Union decode: try members in declared order; short-circuit on
/// first success; apply the fast discriminator when every member is a
/// `TypeLiteral` sharing one key whose value is a pairwise-distinct
/// `Literal`.
fn decode_union(ast: &Ast, members: &[Ast], input: &Value, options: &ParseOptions, ctx: &CompileContext) -> ParseResult<Value> {
    if let Some(discriminator) = find_discriminator(members) {
        if let Value::Object(obj) = input {
            if let Some(tag_value) = obj.get(&Key::String(discriminator.clone())) {
                if let Some(chosen) = members.iter().find(|m| {
                    matches!(m.kind(), AstKind::TypeLiteral(tl)
                        if tl.find_property(&Key::String(discriminator.clone()))
                            .map(|p| matches!(p.ast.kind(), AstKind::Literal(l) if l == tag_value))
                            .unwrap_or(false))
                }) {
                    return match decode_node(chosen, input, options, ctx) {
                        Ok(s) => Ok(s),
                        // Discriminator matched the tag but the rest of the
                        // shape didn't — fall back to full trial so
                        // refinements/transforms on other members still get
                        // a chance, per §4.D.1.
                        Err(_) => decode_union_full_trial(ast, members, input, options, ctx),
                    };
                }
            }
        }
        return decode_union_full_trial(ast, members, input, options, ctx);
    }
    decode_union_full_trial(ast, members, input, options, ctx)
}

fn decode_union_full_trial(ast: &Ast, members: &[Ast], input: &Value, options: &ParseOptions, ctx: &CompileContext) -> ParseResult<Value> {
    let mut branch_issues = Vec::new();
    for member in members {
        match decode_node(member, input, options, ctx) {
            Ok(s) => return Ok(s),
            Err(f) => branch_issues.push(ParseIssue::Member { errors: f.0 }),
        }
    }
    let mut iter = branch_issues.into_iter();
    let mut nonempty = NonEmpty::single(iter.next().unwrap_or_else(|| {
        ParseIssue::Type { expected: ast.clone(), actual: input.clone() }
    }));
    for issue in iter {
        nonempty.push(issue);
    }
    Err(Failure::single(ParseIssue::UnionMember { members: nonempty }))
}

/// Looks for a key present in every member's `TypeLiteral` whose value is a
/// `Literal` and whose literals are pairwise distinct across members —
/// the O(1) routing optimization in §4.D.1.
fn find_discriminator(members: &[Ast]) -> Option<String> {
    let type_literals: Vec<&TypeLiteral> = members
        .iter()
        .filter_map(|m| match m.kind() {
            AstKind::TypeLiteral(tl) => Some(tl),
            _ => None,
        })
        .collect();
    if type_literals.len() != members.len() || type_literals.is_empty() {
        return None;
    }
    let first = type_literals[0];
    'candidate: for prop in &first.properties {
        let Key::String(name) = &prop.name else { continue };
        if !matches!(prop.ast.kind(), AstKind::Literal(_)) {
            continue;
        }
        let mut seen_literals = Vec::new();
        for tl in &type_literals {
            match tl.find_property(&Key::String(name.clone())) {
                Some(p) => match p.ast.kind() {
                    AstKind::Literal(l) => {
                        if seen_literals.contains(l) {
                            continue 'candidate;
                        }
                        seen_literals.push(l.clone());
                    }
                    _ => continue 'candidate,
                },
                None => continue 'candidate,
            }
        }
        return Some(name.clone());
    }
    None
}

// ---------------------------------------------------------------------
// Encode (§4.D.2): the dual traversal. Structural (non-transforming)
// nodes encode identically to decode; `Transform` swaps direction, and
// `Refinement` re-verifies its predicate before encoding `from`, per the
// spec's resolution of its own open question (§9).
// ---------------------------------------------------------------------

pub fn encode_node(ast: &Ast, input: &Value, options: &ParseOptions, ctx: &CompileContext) -> ParseResult<Value> {
    match ast.kind() {
        AstKind::Transform(t) => encode_transform(ast, t, input, options, ctx),
        AstKind::Refinement(r) => encode_refinement(ast, r, input, options, ctx),
        AstKind::Tuple(tuple) => encode_tuple(ast, tuple, input, options, ctx),
        AstKind::TypeLiteral(tl) => encode_type_literal(ast, tl, input, options, ctx),
        AstKind::Union(members) => encode_union(members, input, options, ctx),
        AstKind::Lazy(l) => {
            let resolved = ctx.resolve_lazy(ast, &l.thunk);
            encode_node(&resolved, input, options, ctx)
        }
        AstKind::TypeAlias(a) => encode_node(&a.ast, input, options, ctx),
        // Keywords, literals, unique symbols, template literals, and enums
        // have no transform in their chain: decode and encode coincide
        // structurally (§4.D.2).
        _ => decode_node(ast, input, options, ctx),
    }
}

fn encode_refinement(ast: &Ast, r: &crate::ast::Refinement, input: &Value, options: &ParseOptions, ctx: &CompileContext) -> ParseResult<Value> {
    if !(r.predicate)(input) {
        return Err(Failure::single(ParseIssue::Refinement {
            ast: ast.clone(),
            actual: input.clone(),
            kind: RefinementFailureKind::Predicate,
            inner: None,
        }));
    }
    encode_node(&r.from, input, options, ctx)
}

fn encode_transform(ast: &Ast, t: &crate::ast::Transform, input: &Value, options: &ParseOptions, ctx: &CompileContext) -> ParseResult<Value> {
    match decode_node(&t.to, input, options, ctx) {
        Ok(to_success) => match (t.encode)(&to_success.value, options) {
            Ok(mut from_success) => {
                let mut warnings = to_success.warnings;
                warnings.append(&mut from_success.warnings);
                Ok(Success { value: from_success.value, warnings })
            }
            Err(failure) => Err(Failure::single(ParseIssue::Transform {
                ast: ast.clone(),
                actual: to_success.value,
                kind: TransformFailureKind::Transformation,
                inner: Some(Box::new(failure.0)),
            })),
        },
        Err(failure) => Err(Failure::single(ParseIssue::Transform {
            ast: ast.clone(),
            actual: input.clone(),
            kind: TransformFailureKind::To,
            inner: Some(Box::new(failure.0)),
        })),
    }
}

fn encode_tuple(ast: &Ast, tuple: &Tuple, input: &Value, options: &ParseOptions, ctx: &CompileContext) -> ParseResult<Value> {
    let Value::Array(items) = input else {
        return Err(type_fail(ast, input));
    };
    let mut warnings = Vec::new();
    let mut encoded = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let el_ast = element_ast_at(tuple, i);
        match el_ast {
            Some(el_ast) => match encode_node(el_ast, item, options, ctx) {
                Ok(s) => {
                    warnings.extend(s.warnings);
                    encoded.push(s.value);
                }
                Err(f) => return Err(Failure::single(ParseIssue::Index { index: i, errors: f.0 })),
            },
            None => encoded.push(item.clone()),
        }
    }
    Ok(Success { value: Value::Array(encoded), warnings })
}

fn element_ast_at(tuple: &Tuple, index: usize) -> Option<&Ast> {
    if index < tuple.elements.len() {
        return Some(&tuple.elements[index].ast);
    }
    tuple.rest_head()
}

fn encode_type_literal(ast: &Ast, tl: &TypeLiteral, input: &Value, options: &ParseOptions, ctx: &CompileContext) -> ParseResult<Value> {
    if !input.is_object_shaped() {
        return Err(type_fail(ast, input));
    }
    let Value::Object(obj) = input else { unreachable!() };
    let mut warnings = Vec::new();
    let mut out = indexmap::IndexMap::new();
    for prop in &tl.properties {
        match obj.get(&prop.name) {
            Some(value) => match encode_node(&prop.ast, value, options, ctx) {
                Ok(s) => {
                    warnings.extend(s.warnings);
                    out.insert(prop.name.clone(), s.value);
                }
                Err(f) => return Err(Failure::single(ParseIssue::Key { key: prop.name.clone(), errors: f.0 })),
            },
            // A required key missing on encode means the caller handed us a
            // value that never decoded successfully — a program bug, which
            // §4.D.2 says "surfaces it identically" rather than papering
            // over it.
            None if prop.optional => {}
            None => {
                return Err(Failure::single(ParseIssue::Key {
                    key: prop.name.clone(),
                    errors: NonEmpty::single(ParseIssue::Missing { expected: prop.ast.clone() }),
                }))
            }
        }
    }
    for (key, value) in obj.iter() {
        if out.contains_key(key) {
            continue;
        }
        if let Some(ix) = tl.index_signatures.first() {
            match encode_node(&ix.ast, value, options, ctx) {
                Ok(s) => {
                    warnings.extend(s.warnings);
                    out.insert(key.clone(), s.value);
                }
                Err(f) => return Err(Failure::single(ParseIssue::Key { key: key.clone(), errors: f.0 })),
            }
        }
    }
    Ok(Success { value: Value::Object(out), warnings })
}

fn encode_union(members: &[Ast], input: &Value, options: &ParseOptions, ctx: &CompileContext) -> ParseResult<Value> {
    let mut branch_issues = Vec::new();
    for member in members {
        match encode_node(member, input, options, ctx) {
            Ok(s) => return Ok(s),
            Err(f) => branch_issues.push(ParseIssue::Member { errors: f.0 }),
        }
    }
    let mut iter = branch_issues.into_iter();
    let mut nonempty = NonEmpty::single(
        iter.next()
            .unwrap_or(ParseIssue::Unexpected { actual: input.clone() }),
    );
    for issue in iter {
        nonempty.push(issue);
    }
    Err(Failure::single(ParseIssue::UnionMember { members: nonempty }))
}
