//! `template_literal`: a `head` plus an ordered run of typed spans
//! describing a regex-shaped string domain (§3.1, §4.D.1).

use crate::ast::template_literal::{Span, SpanType, TemplateLiteral};
use crate::ast::Ast;

pub fn string_span(literal: impl Into<String>) -> Span {
    Span { kind: SpanType::String, literal: literal.into() }
}

pub fn number_span(literal: impl Into<String>) -> Span {
    Span { kind: SpanType::Number, literal: literal.into() }
}

pub fn template_literal(head: impl Into<String>, spans: Vec<Span>) -> Ast {
    Ast::template_literal(TemplateLiteral { head: head.into(), spans })
}
