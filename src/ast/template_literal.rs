//! Template literal AST: a `head` string plus an ordered run of spans
//! describing a regex-shaped string domain (§3.1, §4.D.1).

use std::fmt;

/// The type a template-literal span may hold. Restricted to `string` or
/// `number` per invariant 4 — optionally narrowed further by a `Refinement`
/// wrapping one of those two keywords, which is why this is its own small
/// enum rather than a bare keyword tag.
#[derive(Debug, Clone, PartialEq)]
pub enum SpanType {
    String,
    Number,
}

impl fmt::Display for SpanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanType::String => write!(f, "string"),
            SpanType::Number => write!(f, "number"),
        }
    }
}

/// One `(type, literal)` pair following a span's capture group.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub kind: SpanType,
    pub literal: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateLiteral {
    pub head: String,
    pub spans: Vec<Span>,
}

impl TemplateLiteral {
    /// Compiles the regex `^head(span1)literal1(span2)literal2...$`
    /// (§4.D.1: "compile once to a regex"). Callers are expected to cache
    /// the result; the AST constructor already validates shape so this
    /// cannot fail for a well-formed node.
    pub fn to_regex(&self) -> regex::Regex {
        let mut pattern = String::from("^");
        pattern.push_str(&regex::escape(&self.head));
        for span in &self.spans {
            let capture = match span.kind {
                SpanType::String => ".*",
                SpanType::Number => r"-?\d+(\.\d+)?",
            };
            pattern.push('(');
            pattern.push_str(capture);
            pattern.push(')');
            pattern.push_str(&regex::escape(&span.literal));
        }
        pattern.push('$');
        regex::Regex::new(&pattern).expect("template literal compiles to a valid regex by construction")
    }
}
