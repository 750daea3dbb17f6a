//! Refinement AST: narrows the domain of `from` without changing the
//! decoded type (§3.1, invariant 5, §4.D.1).

use std::sync::Arc;

use crate::value::Value;

use super::Ast;

/// A boolean predicate over the already-decoded value of `from`.
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

#[derive(Clone)]
pub struct Refinement {
    pub from: Ast,
    pub predicate: Predicate,
}

impl std::fmt::Debug for Refinement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Refinement")
            .field("from", &self.from)
            .field("predicate", &"<fn>")
            .finish()
    }
}

/// Refinements compare equal only by identity of the underlying `from` plus
/// pointer-identity of the predicate closure — two separately constructed
/// closures with the same behavior are not considered structurally equal,
/// since closures cannot be compared for behavioral equivalence.
impl PartialEq for Refinement {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && Arc::ptr_eq(&self.predicate, &other.predicate)
    }
}
