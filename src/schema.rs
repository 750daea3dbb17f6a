//! The combinator-facing surface (component F, §4.D.3, §6): a typed
//! wrapper over a compiled [`Ast`] plus the `decode`/`encode`/`is`/
//! `asserts`/`*OrThrow` operations every schema exposes.
//!
//! `Schema<T>` is phantom-typed on the host-language type `T` the decoded
//! value is meant to represent. The library itself operates on the
//! dynamic [`Value`] domain (decode/encode are pure `Value -> Value`
//! functions, per the Non-goals: no coercion beyond declared transforms),
//! so `T` exists purely so callers get a typed handle back from
//! `Schema::<T>::new` without the library committing to a concrete
//! `serde`-derived shape for every combinator. Combinators that know their
//! output shape (struct, tuple, …) pick `T = Value` unless the caller
//! layers a `transform` onto something `serde`-deserializable.

use std::marker::PhantomData;

use crate::ast::Ast;
use crate::error::SchemaError;
use crate::interpreter::{compile, guard, message, Compiled};
use crate::options::ParseOptions;
use crate::result::ParseResult;
use crate::value::Value;

/// A compiled schema. Cloning is cheap: the underlying [`Ast`] is
/// `Rc`-backed and the compile cache is rebuilt per clone (compile is a
/// pure, deterministic function of the AST, so rebuilding costs only
/// time, never correctness — see [`crate::interpreter::compile`]).
pub struct Schema<T = Value> {
    compiled: Compiled,
    _marker: PhantomData<T>,
}

impl<T> Clone for Schema<T> {
    fn clone(&self) -> Self {
        Schema::new(self.compiled.ast().clone())
    }
}

impl<T> Schema<T> {
    pub fn new(ast: Ast) -> Self {
        Schema { compiled: compile(ast), _marker: PhantomData }
    }

    pub fn ast(&self) -> &Ast {
        self.compiled.ast()
    }

    /// Decodes `input` with default options (short-circuit, excess
    /// properties ignored).
    pub fn decode(&self, input: &Value) -> ParseResult<Value> {
        self.decode_with(input, &ParseOptions::default())
    }

    pub fn decode_with(&self, input: &Value, options: &ParseOptions) -> ParseResult<Value> {
        self.compiled.decode(input, options)
    }

    pub fn encode(&self, input: &Value) -> ParseResult<Value> {
        self.encode_with(input, &ParseOptions::default())
    }

    pub fn encode_with(&self, input: &Value, options: &ParseOptions) -> ParseResult<Value> {
        self.compiled.encode(input, options)
    }

    /// Structural predicate (§8 property 2). Never fails — a non-matching
    /// value simply yields `false`.
    pub fn is(&self, value: &Value) -> bool {
        guard::is(self.compiled.ast(), self.compiled_ctx(), value)
    }

    /// Decodes, discarding the value: useful as a standalone assertion.
    pub fn asserts(&self, value: &Value) -> Result<(), SchemaError> {
        self.decode(value).map(|_| ()).map_err(|f| SchemaError::Decode(message::format_failure(&f)))
    }

    pub fn decode_or_throw(&self, input: &Value) -> Result<Value, SchemaError> {
        self.decode(input)
            .map(|s| s.value)
            .map_err(|f| SchemaError::Decode(message::format_failure(&f)))
    }

    pub fn encode_or_throw(&self, input: &Value) -> Result<Value, SchemaError> {
        self.encode(input)
            .map(|s| s.value)
            .map_err(|f| SchemaError::Encode(message::format_failure(&f)))
    }

    /// Draws a random value satisfying this schema (feature `arbitrary`).
    #[cfg(feature = "arbitrary")]
    pub fn arbitrary(&self, rng: &mut impl rand::Rng) -> Value {
        crate::interpreter::arbitrary::generate(self.compiled.ast(), self.compiled_ctx(), rng)
    }

    /// `pretty(schema)(value)` (§4.H): renders a decoded `value` the way a
    /// default failure message would quote it, unless this schema's AST
    /// carries a `Custom("pretty")` annotation, which takes precedence.
    pub fn pretty(&self, value: &Value) -> String {
        crate::interpreter::pretty::render_for_schema(self.compiled.ast(), value)
    }

    fn compiled_ctx(&self) -> &crate::interpreter::CompileContext {
        self.compiled.ctx()
    }
}

impl<T> From<Ast> for Schema<T> {
    fn from(ast: Ast) -> Self {
        Schema::new(ast)
    }
}
