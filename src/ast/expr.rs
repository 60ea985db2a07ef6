//! Expression tree definitions
//!
//! Expressions own their children outright. Each node renders to a fully
//! parenthesized prefix form for tests and debugging.

use crate::lexer::Token;
use std::fmt;

/// Expression node
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal value, rendered verbatim
    Literal { value: String },

    /// Unary operation: `(- 1)`
    Unary { operator: Token, operand: Box<Expr> },

    /// Binary operation: `(+ 1 2)`
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },

    /// Parenthesized expression: `(group 1)`
    Grouping { inner: Box<Expr> },
}

impl Expr {
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
        }
    }

    pub fn unary(operator: Token, operand: Expr) -> Self {
        Self::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Self::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn grouping(inner: Expr) -> Self {
        Self::Grouping {
            inner: Box::new(inner),
        }
    }

    /// Render the tree to its parenthesized text form
    pub fn tree_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{}", value),
            Self::Unary { operator, operand } => write!(f, "({} {})", operator.lexeme, operand),
            Self::Binary {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", operator.lexeme, left, right),
            Self::Grouping { inner } => write!(f, "(group {})", inner),
        }
    }
}
