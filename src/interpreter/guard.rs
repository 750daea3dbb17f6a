//! The guard interpreter (component E, §4.E): `unknown -> bool` structural
//! predicate. For any schema without a `Transform` node this coincides
//! with `decode(s)(x).isSuccess` (§8 property 2), so it is implemented as
//! a thin call into the same decode fold with guard-flavored options
//! rather than a second traversal.

use crate::ast::{Ast, AstKind};
use crate::options::{OnExcessProperty, ParseOptions};
use crate::value::Value;

use super::{parse, CompileContext};

/// Options a guard check runs under: excess properties never fail, and the
/// first mismatch is enough to answer `false`.
fn guard_options() -> ParseOptions {
    ParseOptions {
        all_errors: false,
        is_unexpected_allowed: true,
        on_excess_property: OnExcessProperty::Ignore,
    }
}

/// `Transform` is defined against its `from` side (§4.E): a guard check must
/// not run the transform's fallible `decode` closure, so it recurses into
/// `from` instead of folding through `decode_node` directly.
pub fn is(ast: &Ast, ctx: &CompileContext, value: &Value) -> bool {
    if let AstKind::Transform(t) = ast.kind() {
        return is(&t.from, ctx, value);
    }
    parse::decode_node(ast, value, &guard_options(), ctx).is_ok()
}
