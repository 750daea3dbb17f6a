//! Lazy AST: a deferred, identity-memoized node enabling recursive schemas
//! (§3.1, §3.3, §4.D.1, §9 design note).
//!
//! The memoization key used by interpreters is not stored on `Lazy` itself —
//! it's the pointer identity of the *outer* `Ast` handle that wraps this
//! node (see [`Ast::identity`]). Because `Ast` is reference-counted, every
//! clone of the `Ast` returned by [`crate::combinators::lazy`] shares that
//! identity, which is exactly the "object identity of the Lazy node" the
//! spec asks interpreters to key their per-compilation cache on.

use std::sync::Arc;

use super::Ast;

pub type Thunk = Arc<dyn Fn() -> Ast + Send + Sync>;

#[derive(Clone)]
pub struct Lazy {
    pub thunk: Thunk,
}

impl std::fmt::Debug for Lazy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lazy(<thunk>)")
    }
}

impl PartialEq for Lazy {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.thunk, &other.thunk)
    }
}
