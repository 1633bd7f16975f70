//! Term model for a Refal-style string/term-rewriting engine
//!
//! An immutable, structurally shared representation of symbolic expressions:
//! sequences of symbols and parenthesized sub-sequences, composed by
//! concatenation and traversable left-to-right or right-to-left without
//! copying.
//!
//! # Features
//! - Expressions built by composing already-constructed, shared sub-expressions
//! - Packed literal runs that enumerate term-by-term like boxed symbols
//! - Bidirectional enumeration via a cursor protocol or a double-ended iterator
//! - Empty sub-expressions fully transparent to traversal
//! - Visitor-pattern traversal over the node tree
//!
//! # Usage Examples
//!
//! ## Building and rendering
//! ```
//! use refal_terms::ExprRef;
//!
//! let a = ExprRef::literal("abcdefg");
//! let b = ExprRef::symbol('w');
//! let c = ExprRef::concatenation([
//!     a.clone(), b.clone(), a.clone(), b.clone(), a.clone(), b.clone(),
//! ]);
//! let d = ExprRef::concatenation([
//!     a.clone(), b.clone(), c.clone(), a, b, c,
//! ]);
//!
//! assert_eq!(d.terms_count(), 64);
//! assert_eq!(d.to_string().len(), 64);
//! ```
//!
//! ## Enumerating terms
//! ```
//! use refal_terms::{Direction, ExprRef};
//!
//! let e = ExprRef::concatenation([ExprRef::literal("abc"), ExprRef::symbol('w')]);
//!
//! let forward: String = e
//!     .terms(Direction::LeftToRight)
//!     .map(|t| t.as_symbol().unwrap())
//!     .collect();
//! assert_eq!(forward, "abcw");
//!
//! // The cursor protocol underneath the iterator:
//! let mut cursor = e.begin(Direction::RightToLeft);
//! let end = e.end(Direction::RightToLeft);
//! assert_eq!(cursor.current().as_symbol(), Some('w'));
//! while cursor != end {
//!     cursor.advance();
//! }
//! ```

mod cursor;
mod direction;
mod display;
mod expr;
mod handle;
mod term;
pub mod visitor;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use cursor::{TermCursor, Terms};
pub use direction::Direction;
pub use expr::{Expr, ExprKind};
pub use handle::ExprRef;
pub use term::Term;
pub use visitor::{ExprVisitor, NodeCounter, SymbolCollector, walk_expr};
