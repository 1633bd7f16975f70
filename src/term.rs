//! Atomic term views surfaced by enumeration.
//!
//! A term is the indivisible unit of an expression: either one symbol or one
//! bracketed group. Every term is itself a trivial expression denoting exactly
//! one term, so a term can always be lifted back into the expression model
//! with [`Term::to_expr`].

use crate::handle::ExprRef;

/// An atomic term read off an expression by a cursor.
///
/// `Symbol` terms are plain values: a cursor over a literal run synthesizes a
/// fresh one per step, and comparison is by symbol value. `Parenthesized`
/// terms carry the shared inner expression; comparison is by inner-expression
/// identity, never by structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// One atomic symbol.
    Symbol(char),
    /// One bracketed group holding a shared inner expression.
    Parenthesized(ExprRef),
}

impl Term {
    /// The symbol value, if this is a symbol term.
    pub fn as_symbol(&self) -> Option<char> {
        match self {
            Term::Symbol(c) => Some(*c),
            Term::Parenthesized(_) => None,
        }
    }

    /// The inner expression of a bracketed group.
    ///
    /// This is the read-through a matcher uses to recurse into the group.
    pub fn inner(&self) -> Option<&ExprRef> {
        match self {
            Term::Symbol(_) => None,
            Term::Parenthesized(inner) => Some(inner),
        }
    }

    /// Lift the term into a one-term expression.
    ///
    /// Builds a fresh node; for a bracketed group the inner expression stays
    /// shared with the term's origin.
    pub fn to_expr(&self) -> ExprRef {
        match self {
            Term::Symbol(c) => ExprRef::symbol(*c),
            Term::Parenthesized(inner) => ExprRef::parenthesized(inner.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_term() {
        let t = Term::Symbol('w');
        assert_eq!(t.as_symbol(), Some('w'));
        assert!(t.inner().is_none());
        assert_eq!(t.to_string(), "w");
    }

    #[test]
    fn test_parenthesized_term_reads_through() {
        let inner = ExprRef::literal("xy");
        let t = Term::Parenthesized(inner.clone());
        assert_eq!(t.inner(), Some(&inner));
        assert!(t.as_symbol().is_none());
        assert_eq!(t.to_string(), "(xy)");
    }

    #[test]
    fn test_to_expr_is_one_term() {
        let t = Term::Symbol('q');
        let e = t.to_expr();
        assert_eq!(e.terms_count(), 1);
        assert!(e.is_term());

        let inner = ExprRef::literal("ab");
        let g = Term::Parenthesized(inner.clone()).to_expr();
        assert_eq!(g.terms_count(), 1);
        // The lifted group shares the inner expression, not a copy of it.
        assert_eq!(g.children()[0], inner);
    }

    #[test]
    fn test_term_equality() {
        assert_eq!(Term::Symbol('a'), Term::Symbol('a'));
        assert_ne!(Term::Symbol('a'), Term::Symbol('b'));

        let inner = ExprRef::literal("xy");
        let other = ExprRef::literal("xy");
        assert_eq!(
            Term::Parenthesized(inner.clone()),
            Term::Parenthesized(inner.clone())
        );
        // Structurally equal but distinct inner expressions compare unequal.
        assert_ne!(Term::Parenthesized(inner), Term::Parenthesized(other));
    }
}
