//! # Lox Scanner
//!
//! Front end pieces for the Lox scripting language:
//! - an error-tolerant scanner that turns source text into tokens
//! - the expression tree a parser builds from those tokens, with a
//!   parenthesized text rendering
//!
//! ## Architecture
//!
//! - `lexer`: Tokenization of source code
//! - `ast`: Expression nodes and their rendering
//! - `error`: Scan errors and diagnostics

pub mod ast;
pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use ast::Expr;
pub use error::{Diagnostic, ScanError, ScanErrorKind, ScanResult, SourceLocation};
pub use lexer::{Keyword, ScanOutput, Scanner, Token, TokenType};

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan a source unit, keeping the tokens found before and after any error
///
/// # Arguments
///
/// * `source` - The source code to scan
/// * `filename` - Optional filename recorded in every location
pub fn scan(source: &str, filename: Option<&str>) -> ScanOutput {
    Scanner::new(source, filename).scan_tokens()
}

/// Scan a source unit, returning its tokens only if the scan was clean
///
/// Returns every scan error instead of the tokens when any occurred.
pub fn tokenize(source: &str, filename: Option<&str>) -> ScanResult<Vec<Token>> {
    scan(source, filename).into_result()
}
