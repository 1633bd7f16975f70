//! Expression visitor pattern for tree traversal
//!
//! Provides a clean interface for walking the node tree without manually
//! handling the recursive structure. This walks *nodes* in stored order;
//! for the flat term sequence use [`ExprRef::terms`](crate::ExprRef::terms).

use rustc_hash::FxHashSet;

use crate::expr::{Expr, ExprKind};
use crate::handle::ExprRef;

/// Trait for visiting expression nodes.
///
/// Implement this trait to define custom behavior when traversing an
/// expression tree. Each method returns a boolean indicating whether to
/// continue into the node's children.
pub trait ExprVisitor {
    /// Visit a symbol node.
    fn visit_symbol(&mut self, symbol: char) -> bool;

    /// Visit a literal node with its backing run.
    fn visit_literal(&mut self, run: &[char]) -> bool;

    /// Visit a parenthesized node, returns true to visit the inner expression.
    fn visit_parenthesized(&mut self, inner: &ExprRef) -> bool;

    /// Visit a concatenation node, returns true to visit the children.
    fn visit_concatenation(&mut self, children: &[ExprRef]) -> bool;
}

/// Walk an expression tree with a visitor.
///
/// Visits nodes in pre-order (parent before children), children in stored
/// order. A node shared by several parents is visited once per occurrence.
pub fn walk_expr<V: ExprVisitor>(expr: &Expr, visitor: &mut V) {
    match expr.kind() {
        ExprKind::Symbol(c) => {
            visitor.visit_symbol(*c);
        }
        ExprKind::Literal(run) => {
            visitor.visit_literal(run);
        }
        ExprKind::Parenthesized(inner) => {
            if visitor.visit_parenthesized(inner) {
                walk_expr(inner, visitor);
            }
        }
        ExprKind::Concatenation(children) => {
            if visitor.visit_concatenation(children) {
                for child in children {
                    walk_expr(child, visitor);
                }
            }
        }
    }
}

/// A simple visitor that counts node occurrences.
#[derive(Default)]
pub struct NodeCounter {
    pub count: usize,
}

impl ExprVisitor for NodeCounter {
    fn visit_symbol(&mut self, _symbol: char) -> bool {
        self.count += 1;
        true
    }

    fn visit_literal(&mut self, _run: &[char]) -> bool {
        self.count += 1;
        true
    }

    fn visit_parenthesized(&mut self, _inner: &ExprRef) -> bool {
        self.count += 1;
        true
    }

    fn visit_concatenation(&mut self, _children: &[ExprRef]) -> bool {
        self.count += 1;
        true
    }
}

/// A visitor that collects the distinct symbol values occurring anywhere in
/// the tree, literal runs included.
#[derive(Default)]
pub struct SymbolCollector {
    pub symbols: FxHashSet<char>,
}

impl ExprVisitor for SymbolCollector {
    fn visit_symbol(&mut self, symbol: char) -> bool {
        self.symbols.insert(symbol);
        true
    }

    fn visit_literal(&mut self, run: &[char]) -> bool {
        self.symbols.extend(run.iter().copied());
        true
    }

    fn visit_parenthesized(&mut self, _inner: &ExprRef) -> bool {
        true
    }

    fn visit_concatenation(&mut self, _children: &[ExprRef]) -> bool {
        true
    }
}
