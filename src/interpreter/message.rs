//! Message resolution (component K, §7): turns a [`ParseIssue`] tree into
//! human-facing text.
//!
//! Spec'd walk is "from the deepest failure upward, first `Message`
//! annotation on an ancestor AST wins." Every terminal issue already
//! carries the exact `Ast` node that failed (see [`ParseIssue`] docs), so
//! there is no separate ancestor chain to thread here — checking that
//! node's own annotations *is* the walk, since `Refinement`/`Transform`
//! issues carry the wrapping node (whose annotations already absorbed the
//! combinator's own `annotate()` call, not `from`'s).

use std::fmt::Write as _;

use crate::result::{Failure, NonEmpty, ParseIssue, RefinementFailureKind, TransformFailureKind};
use crate::value::{Key, Value};

use super::pretty::render_value;

/// One path-prefixed leaf message, e.g. `a.b[2]: Expected string, actual 1`.
pub fn format_failure(failure: &Failure) -> String {
    let mut lines = Vec::new();
    collect_lines(&failure.0, String::new(), &mut lines);
    lines.join("\n")
}

fn collect_lines(issues: &NonEmpty<ParseIssue>, path: String, out: &mut Vec<String>) {
    for issue in issues.iter() {
        collect_one(issue, path.clone(), out);
    }
}

fn collect_one(issue: &ParseIssue, path: String, out: &mut Vec<String>) {
    match issue {
        ParseIssue::Key { key, errors } => collect_lines(errors, extend_path(&path, &key_segment(key)), out),
        ParseIssue::Index { index, errors } => collect_lines(errors, extend_path(&path, &format!("[{index}]")), out),
        ParseIssue::Member { errors } => collect_lines(errors, path, out),
        ParseIssue::UnionMember { members } => collect_lines(members, path, out),
        terminal => {
            let prefix = if path.is_empty() { String::new() } else { format!("{path}: ") };
            out.push(format!("{prefix}{}", resolve_terminal(terminal)));
        }
    }
}

fn key_segment(key: &Key) -> String {
    match key {
        Key::String(s) => s.clone(),
        Key::Symbol(s) => format!("[{s}]"),
    }
}

fn extend_path(path: &str, segment: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else if segment.starts_with('[') {
        format!("{path}{segment}")
    } else {
        format!("{path}.{segment}")
    }
}

/// Resolves a single terminal issue to its message text, preferring a
/// `Message` annotation on the issue's own `Ast` over the synthesized
/// default (§7).
pub fn resolve_terminal(issue: &ParseIssue) -> String {
    match issue {
        ParseIssue::Type { expected, actual } => {
            if let Some(f) = expected.annotations().message_fn() {
                return f(actual);
            }
            default_type_message(expected, actual)
        }
        ParseIssue::Refinement { ast, actual, kind, inner } => {
            if let Some(f) = ast.annotations().message_fn() {
                return f(actual);
            }
            match kind {
                RefinementFailureKind::Predicate => {
                    format!("Expected {}, actual {}", ast.render(), render_value(actual))
                }
                RefinementFailureKind::From => {
                    let mut s = format!("Expected {}, actual {}", ast.render(), render_value(actual));
                    if let Some(inner) = inner {
                        let _ = write!(s, " ({})", format_failure(&Failure((**inner).clone())));
                    }
                    s
                }
            }
        }
        ParseIssue::Transform { ast, actual, kind, inner } => {
            if let Some(f) = ast.annotations().message_fn() {
                return f(actual);
            }
            let base = match kind {
                TransformFailureKind::From | TransformFailureKind::To => {
                    format!("Expected {}, actual {}", ast.render(), render_value(actual))
                }
                TransformFailureKind::Transformation => {
                    format!("Transformation of {} failed on {}", ast.render(), render_value(actual))
                }
            };
            if let Some(inner) = inner {
                format!("{base} ({})", format_failure(&Failure((**inner).clone())))
            } else {
                base
            }
        }
        ParseIssue::Missing { expected } => {
            if let Some(f) = expected.annotations().message_fn() {
                return f(&Value::Null);
            }
            format!("Missing required value, expected {}", expected.render())
        }
        ParseIssue::Unexpected { actual } => format!("Unexpected value {}", render_value(actual)),
        ParseIssue::Key { .. } | ParseIssue::Index { .. } | ParseIssue::Member { .. } | ParseIssue::UnionMember { .. } => {
            unreachable!("path-wrapper issues are resolved by collect_one, not resolve_terminal")
        }
    }
}

fn default_type_message(expected: &crate::ast::Ast, actual: &Value) -> String {
    format!("Expected {}, actual {}", expected.render(), render_value(actual))
}
