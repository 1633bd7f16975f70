//! Shared-ownership handle over an immutable expression node.
//!
//! Expression trees are built by composition of already-constructed
//! sub-expressions; a child may be referenced by any number of parents. The
//! handle makes that sharing explicit: cloning is O(1) and bumps the embedded
//! reference count, dropping the last clone destroys the node, and equality is
//! pointee identity rather than structural comparison.

use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use crate::expr::Expr;

/// A shared handle to an immutable [`Expr`].
///
/// `ExprRef` is the only way nodes reference their children, so a
/// sub-expression used in several parents is stored exactly once. The absent
/// handle is spelled `Option<ExprRef>` at API boundaries; there is no internal
/// null state.
///
/// # Equality
///
/// Two handles are equal iff they point at the *same* node. Structural
/// comparison of expressions is deliberately not provided here; a rewrite
/// engine defines term comparison on top of the enumeration protocol.
#[derive(Debug, Clone)]
pub struct ExprRef(Arc<Expr>);

impl ExprRef {
    pub(crate) fn from_arc(node: Arc<Expr>) -> Self {
        ExprRef(node)
    }

    pub(crate) fn into_arc(self) -> Arc<Expr> {
        self.0
    }

    /// Address of the pointee, used for identity hashing and sharing audits.
    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }

    /// Number of handles currently sharing this node.
    ///
    /// Only an observation aid; the count can change as handles are cloned
    /// and dropped elsewhere.
    #[must_use]
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl Deref for ExprRef {
    type Target = Expr;

    fn deref(&self) -> &Expr {
        &self.0
    }
}

impl PartialEq for ExprRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ExprRef {}

impl Hash for ExprRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}
