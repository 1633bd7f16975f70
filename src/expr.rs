//! Expression nodes for the term model.
//!
//! This module defines:
//! - `Expr` - an immutable expression node
//! - `ExprKind` - the variants of expression nodes (Symbol, Literal,
//!   Parenthesized, Concatenation)
//! - Constructors and inspection operations on [`ExprRef`]
//!
//! # Architecture
//!
//! ## Closed node family
//! The four kinds form a closed tagged variant. A symbol and a parenthesized
//! group are *terms*: atomic from the outside, each denoting exactly one term.
//! A literal is a packed run of symbols that enumerates term-by-term exactly
//! like a concatenation of individual symbol nodes, without per-symbol boxing.
//! A concatenation sequences its children in stored order.
//!
//! ## Structural sharing
//! Children are held as [`ExprRef`] handles, so one sub-expression may appear
//! under any number of parents without copying. The reference graph is acyclic
//! by construction: a node can only reference expressions that already existed
//! when it was built.
//!
//! ## Immutability
//! Nodes are fully initialized at construction and never mutated. There is no
//! in-place edit operation anywhere in the crate.

use std::ops::Add;
use std::sync::Arc;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

use rustc_hash::FxHashSet;

use crate::handle::ExprRef;

static EXPR_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 {
    EXPR_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Placeholder node used while draining children during drop.
static DUMMY_REF: LazyLock<ExprRef> = LazyLock::new(|| {
    ExprRef::from_arc(Arc::new(Expr {
        id: 0,
        kind: ExprKind::Literal(Vec::new().into_boxed_slice()),
    }))
});

/// An immutable expression node.
///
/// Reached through [`ExprRef`] handles; constructed once, read-only
/// thereafter. The `id` is a process-unique debug aid and takes no part in
/// any comparison.
#[derive(Debug)]
pub struct Expr {
    /// Unique ID for debugging (not used in equality comparisons)
    pub(crate) id: u64,
    pub(crate) kind: ExprKind,
}

/// The kind (structure) of an expression node.
#[derive(Debug)]
pub enum ExprKind {
    /// A single atomic symbol, e.g. `'w'`. A term.
    Symbol(char),

    /// A packed run of symbols, e.g. `"abcdefg"`: behaves term-by-term like
    /// that many [`Symbol`](ExprKind::Symbol) nodes.
    Literal(Box<[char]>),

    /// A bracketed group `( ... )` around a shared inner expression. Counts
    /// as one term from the outside regardless of the inner structure.
    Parenthesized(ExprRef),

    /// An ordered sequence of shared children, traversed by sequencing their
    /// terms. Empty children are transparent to traversal.
    Concatenation(Vec<ExprRef>),
}

impl Expr {
    pub(crate) fn new(kind: ExprKind) -> Self {
        Expr {
            id: next_id(),
            kind,
        }
    }

    /// The node's structure.
    pub fn kind(&self) -> &ExprKind {
        &self.kind
    }

    /// Process-unique debug identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// True iff this expression denotes zero atomic terms.
    ///
    /// A parenthesized group is never empty: it is one term even when its
    /// inner expression is empty. A concatenation is empty iff every child is.
    pub fn is_empty(&self) -> bool {
        match &self.kind {
            ExprKind::Symbol(_) | ExprKind::Parenthesized(_) => false,
            ExprKind::Literal(run) => run.is_empty(),
            ExprKind::Concatenation(children) => children.iter().all(|c| c.is_empty()),
        }
    }

    /// Total count of atomic terms reachable by full traversal.
    pub fn terms_count(&self) -> usize {
        match &self.kind {
            ExprKind::Symbol(_) | ExprKind::Parenthesized(_) => 1,
            ExprKind::Literal(run) => run.len(),
            ExprKind::Concatenation(children) => children.iter().map(|c| c.terms_count()).sum(),
        }
    }

    /// True iff this node is itself a term (a symbol or a bracketed group).
    pub fn is_term(&self) -> bool {
        matches!(
            self.kind,
            ExprKind::Symbol(_) | ExprKind::Parenthesized(_)
        )
    }

    /// The symbol value, if this node is a [`Symbol`](ExprKind::Symbol).
    pub fn as_symbol(&self) -> Option<char> {
        match self.kind {
            ExprKind::Symbol(c) => Some(c),
            _ => None,
        }
    }

    /// The backing run, if this node is a [`Literal`](ExprKind::Literal).
    pub fn as_literal(&self) -> Option<&[char]> {
        match &self.kind {
            ExprKind::Literal(run) => Some(run),
            _ => None,
        }
    }

    /// The child expressions referenced by this node.
    pub fn children(&self) -> &[ExprRef] {
        match &self.kind {
            ExprKind::Symbol(_) | ExprKind::Literal(_) => &[],
            ExprKind::Parenthesized(inner) => std::slice::from_ref(inner),
            ExprKind::Concatenation(children) => children,
        }
    }

    // Analysis methods

    /// Count the total number of nodes in the tree.
    ///
    /// A node shared by several parents is counted once per occurrence; see
    /// [`ExprRef::distinct_node_count`] for the identity-based count.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Maximum nesting depth of the tree.
    pub fn max_depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(|c| c.max_depth())
            .max()
            .unwrap_or(0)
    }
}

impl ExprRef {
    fn node(kind: ExprKind) -> ExprRef {
        ExprRef::from_arc(Arc::new(Expr::new(kind)))
    }

    /// Create a symbol expression.
    ///
    /// # Example
    /// ```
    /// use refal_terms::ExprRef;
    ///
    /// let w = ExprRef::symbol('w');
    /// assert_eq!(w.terms_count(), 1);
    /// assert_eq!(w.to_string(), "w");
    /// ```
    pub fn symbol(symbol: char) -> ExprRef {
        ExprRef::node(ExprKind::Symbol(symbol))
    }

    /// Create a literal expression from a run of symbols.
    ///
    /// `literal("")` is a valid empty expression.
    pub fn literal(symbols: impl AsRef<str>) -> ExprRef {
        ExprRef::node(ExprKind::Literal(symbols.as_ref().chars().collect()))
    }

    /// Create a parenthesized group around an existing (possibly shared)
    /// expression.
    pub fn parenthesized(inner: ExprRef) -> ExprRef {
        ExprRef::node(ExprKind::Parenthesized(inner))
    }

    /// Create a concatenation of existing (possibly shared) expressions.
    ///
    /// Children are kept exactly as given: insertion order is significant and
    /// nested concatenations stay nested.
    pub fn concatenation(children: impl IntoIterator<Item = ExprRef>) -> ExprRef {
        ExprRef::node(ExprKind::Concatenation(children.into_iter().collect()))
    }

    /// The empty expression (a concatenation of zero children).
    pub fn empty() -> ExprRef {
        ExprRef::concatenation([])
    }

    /// Number of distinct nodes in the tree, counting a shared node once.
    ///
    /// `node_count() - distinct_node_count()` measures how much of the tree
    /// is structurally shared.
    pub fn distinct_node_count(&self) -> usize {
        fn visit(node: &ExprRef, seen: &mut FxHashSet<usize>) {
            if !seen.insert(node.addr()) {
                return;
            }
            for child in node.children() {
                visit(child, seen);
            }
        }

        let mut seen = FxHashSet::default();
        visit(self, &mut seen);
        seen.len()
    }
}

impl From<char> for ExprRef {
    fn from(symbol: char) -> Self {
        ExprRef::symbol(symbol)
    }
}

impl From<&str> for ExprRef {
    fn from(symbols: &str) -> Self {
        ExprRef::literal(symbols)
    }
}

/// `a + b` concatenates two expressions without copying either.
impl Add for ExprRef {
    type Output = ExprRef;

    fn add(self, rhs: ExprRef) -> ExprRef {
        ExprRef::concatenation([self, rhs])
    }
}

impl Add for &ExprRef {
    type Output = ExprRef;

    fn add(self, rhs: &ExprRef) -> ExprRef {
        ExprRef::concatenation([self.clone(), rhs.clone()])
    }
}

// Iterative drop to prevent stack overflow on deeply nested trees. Children
// are detached into a work queue; a node is recursed into only once its last
// handle is gone.
impl Drop for Expr {
    fn drop(&mut self) {
        fn drain_children(kind: &mut ExprKind, queue: &mut Vec<ExprRef>) {
            match kind {
                ExprKind::Parenthesized(inner) => {
                    queue.push(std::mem::replace(inner, DUMMY_REF.clone()));
                }
                ExprKind::Concatenation(children) => {
                    queue.extend(std::mem::take(children));
                }
                ExprKind::Symbol(_) | ExprKind::Literal(_) => {}
            }
        }

        let mut work_queue = Vec::new();
        drain_children(&mut self.kind, &mut work_queue);

        while let Some(child) = work_queue.pop() {
            if let Ok(mut child_expr) = Arc::try_unwrap(child.into_arc()) {
                drain_children(&mut child_expr.kind, &mut work_queue);
            }
        }
    }
}
