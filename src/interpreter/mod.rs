//! The interpreters: recursive folds from [`crate::ast::Ast`] to a
//! decode/encode function (component D), a structural guard (component E),
//! and message/pretty/arbitrary support (component H).

#[cfg(feature = "arbitrary")]
pub mod arbitrary;
pub mod guard;
pub mod message;
pub mod parse;
pub mod pretty;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::ast::Ast;
use crate::options::ParseOptions;
use crate::result::ParseResult;
use crate::value::Value;

/// Per-compilation state: the `Lazy` memoization table (§3.3, §4.D.1,
/// §9) and a cache of compiled template-literal regexes, both keyed by
/// `Ast::identity` and local to one [`compile`] call (§5: "local to a
/// single compile invocation — no process-wide mutation").
#[derive(Default)]
pub struct CompileContext {
    lazy_resolved: RefCell<HashMap<usize, Ast>>,
    template_regex: RefCell<HashMap<usize, Rc<regex::Regex>>>,
}

impl CompileContext {
    /// Forces `lazy`'s thunk exactly once, memoizing the resulting `Ast` by
    /// the `Lazy` node's own identity; subsequent calls with the same
    /// identity reuse the cached resolution.
    pub fn resolve_lazy(&self, lazy_ast: &Ast, thunk: &crate::ast::lazy::Thunk) -> Ast {
        let key = lazy_ast.identity();
        if let Some(resolved) = self.lazy_resolved.borrow().get(&key) {
            return resolved.clone();
        }
        tracing::debug!(node = key, "forcing lazy schema node");
        let resolved = thunk();
        self.lazy_resolved.borrow_mut().insert(key, resolved.clone());
        resolved
    }

    pub fn regex_for(&self, template_ast: &Ast, template: &crate::ast::template_literal::TemplateLiteral) -> Rc<regex::Regex> {
        let key = template_ast.identity();
        if let Some(re) = self.template_regex.borrow().get(&key) {
            return re.clone();
        }
        let re = Rc::new(template.to_regex());
        self.template_regex.borrow_mut().insert(key, re.clone());
        re
    }
}

/// The compiled artifact of one `compile(ast)` call: a pure function of the
/// AST, callable for decode or encode (§4.D: "Same function, executed in
/// decode or encode mode").
pub struct Compiled {
    ast: Ast,
    ctx: CompileContext,
}

/// Compiles `ast` into a decode/encode pair. Pure function of the AST —
/// calling this twice on structurally equal ASTs behaves identically
/// (§5: "deterministic... bit-identical results").
pub fn compile(ast: Ast) -> Compiled {
    Compiled { ast, ctx: CompileContext::default() }
}

impl Compiled {
    pub fn decode(&self, input: &Value, options: &ParseOptions) -> ParseResult<Value> {
        parse::decode_node(&self.ast, input, options, &self.ctx)
    }

    pub fn encode(&self, input: &Value, options: &ParseOptions) -> ParseResult<Value> {
        parse::encode_node(&self.ast, input, options, &self.ctx)
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn ctx(&self) -> &CompileContext {
        &self.ctx
    }
}
