//! Expression tree module
//!
//! The node types a parser builds from scanner tokens.

pub mod expr;

pub use expr::Expr;
