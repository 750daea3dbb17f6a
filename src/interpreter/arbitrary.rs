//! The arbitrary/random-value interpreter (component H, §2: "out of
//! scope... beyond its interface" — specified and implemented here behind
//! the `arbitrary` feature since the rest of the pack treats `rand` as the
//! natural fit for this concern).
//!
//! Generates a [`Value`] that would decode successfully against a given
//! [`Ast`], bounding recursion depth so a self-referential `Lazy` schema
//! terminates.

use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::ast::{Ast, AstKind};
use crate::value::{Key, SymbolId, Value};

use super::CompileContext;

const MAX_DEPTH: usize = 6;
const REFINEMENT_ATTEMPTS: usize = 100;
const MAX_COLLECTION_LEN: usize = 4;

/// Generates a value matching `ast`, using `ctx` to resolve `Lazy` nodes
/// the same way decode does.
pub fn generate(ast: &Ast, ctx: &CompileContext, rng: &mut impl Rng) -> Value {
    generate_at_depth(ast, ctx, rng, 0)
}

fn generate_at_depth(ast: &Ast, ctx: &CompileContext, rng: &mut impl Rng, depth: usize) -> Value {
    match ast.kind() {
        AstKind::Never => panic!("cannot generate a value of type never"),
        AstKind::Unknown | AstKind::Any => Value::Null,
        AstKind::Void | AstKind::Undefined => Value::Null,
        AstKind::StringKeyword => Value::String(random_string(rng)),
        AstKind::NumberKeyword => Value::Number(rng.gen_range(-1000.0..1000.0)),
        AstKind::BooleanKeyword => Value::Bool(rng.gen_bool(0.5)),
        AstKind::BigIntKeyword => Value::BigInt(rng.gen_range(-1_000_000..1_000_000)),
        AstKind::SymbolKeyword => Value::Symbol(SymbolId::new(random_string(rng))),
        AstKind::ObjectKeyword => Value::Object(indexmap::IndexMap::new()),
        AstKind::Literal(lit) => literal_to_value(lit),
        AstKind::UniqueSymbol(s) => Value::Symbol(s.0.clone()),
        AstKind::TemplateLiteral(template) => Value::String(generate_template(template, rng)),
        AstKind::Enums(variants) => {
            let (_, value) = variants.choose(rng).expect("Enums has at least one variant");
            literal_to_value(value)
        }
        AstKind::Tuple(tuple) => generate_tuple(tuple, ctx, rng, depth),
        AstKind::TypeLiteral(tl) => generate_type_literal(tl, ctx, rng, depth),
        AstKind::Union(members) => {
            let member = members.choose(rng).expect("Union has at least two members");
            generate_at_depth(member, ctx, rng, depth)
        }
        AstKind::Refinement(r) => generate_refinement(r, ctx, rng, depth),
        // Output type of a Transform is `to`, not `from` (§4.D.1: decode
        // maps from -> to).
        AstKind::Transform(t) => generate_at_depth(&t.to, ctx, rng, depth),
        AstKind::Lazy(l) => {
            if depth >= MAX_DEPTH {
                Value::Null
            } else {
                let resolved = ctx.resolve_lazy(ast, &l.thunk);
                generate_at_depth(&resolved, ctx, rng, depth + 1)
            }
        }
        AstKind::TypeAlias(a) => generate_at_depth(&a.ast, ctx, rng, depth),
    }
}

fn literal_to_value(lit: &crate::ast::literal::LiteralValue) -> Value {
    use crate::ast::literal::LiteralValue;
    match lit {
        LiteralValue::String(s) => Value::String(s.clone()),
        LiteralValue::Number(n) => Value::Number(*n),
        LiteralValue::Boolean(b) => Value::Bool(*b),
        LiteralValue::Null => Value::Null,
        LiteralValue::BigInt(n) => Value::BigInt(*n),
    }
}

fn random_string(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(1..12);
    rng.sample_iter(&Alphanumeric).take(len).map(char::from).collect()
}

fn generate_template(template: &crate::ast::template_literal::TemplateLiteral, rng: &mut impl Rng) -> String {
    use crate::ast::template_literal::SpanType;
    let mut out = template.head.clone();
    for span in &template.spans {
        match span.kind {
            SpanType::String => out.push_str(&random_string(rng)),
            SpanType::Number => out.push_str(&rng.gen_range(0..1000).to_string()),
        }
        out.push_str(&span.literal);
    }
    out
}

fn generate_tuple(tuple: &crate::ast::tuple::Tuple, ctx: &CompileContext, rng: &mut impl Rng, depth: usize) -> Value {
    let mut items = Vec::new();
    for el in &tuple.elements {
        if el.optional && rng.gen_bool(0.5) {
            continue;
        }
        items.push(generate_at_depth(&el.ast, ctx, rng, depth + 1));
    }
    if let Some(rest) = &tuple.rest {
        let head = &rest[0];
        let trailing = &rest[1..];
        let repeats = rng.gen_range(0..=MAX_COLLECTION_LEN);
        for _ in 0..repeats {
            items.push(generate_at_depth(head, ctx, rng, depth + 1));
        }
        for t in trailing {
            items.push(generate_at_depth(t, ctx, rng, depth + 1));
        }
    }
    Value::Array(items)
}

fn generate_type_literal(tl: &crate::ast::struct_lit::TypeLiteral, ctx: &CompileContext, rng: &mut impl Rng, depth: usize) -> Value {
    let mut out = indexmap::IndexMap::new();
    for prop in &tl.properties {
        if prop.optional && rng.gen_bool(0.5) {
            continue;
        }
        out.insert(prop.name.clone(), generate_at_depth(&prop.ast, ctx, rng, depth + 1));
    }
    if let Some(ix) = tl.index_signatures.first() {
        let extra = rng.gen_range(0..=2);
        for _ in 0..extra {
            let key = Key::String(random_string(rng));
            out.insert(key, generate_at_depth(&ix.ast, ctx, rng, depth + 1));
        }
    }
    Value::Object(out)
}

fn generate_refinement(r: &crate::ast::Refinement, ctx: &CompileContext, rng: &mut impl Rng, depth: usize) -> Value {
    let mut candidate = generate_at_depth(&r.from, ctx, rng, depth + 1);
    for _ in 0..REFINEMENT_ATTEMPTS {
        if (r.predicate)(&candidate) {
            return candidate;
        }
        candidate = generate_at_depth(&r.from, ctx, rng, depth + 1);
    }
    candidate
}
