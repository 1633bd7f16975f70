// Display formatting for expressions and terms
use std::fmt;

use crate::expr::{Expr, ExprKind};
use crate::handle::ExprRef;
use crate::term::Term;

impl fmt::Display for Expr {
    /// Renders children in stored order, regardless of any traversal
    /// direction requested elsewhere. A bracketed group renders its inner
    /// expression wrapped in `(` `)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Symbol(c) => write!(f, "{}", c),
            ExprKind::Literal(run) => {
                for c in run {
                    write!(f, "{}", c)?;
                }
                Ok(())
            }
            ExprKind::Parenthesized(inner) => write!(f, "({})", &**inner),
            ExprKind::Concatenation(children) => {
                for child in children {
                    write!(f, "{}", &**child)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for ExprRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Symbol(c) => write!(f, "{}", c),
            Term::Parenthesized(inner) => write!(f, "({})", &**inner),
        }
    }
}
