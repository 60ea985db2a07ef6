//! Error handling for the Lox scanner
//!
//! Scan errors are recoverable: they are collected while scanning and handed
//! back to the caller alongside the tokens, never thrown.

use std::fmt;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type for the all-or-nothing scanning entry points
pub type ScanResult<T> = Result<T, Vec<ScanError>>;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
    /// Optional filename
    pub filename: Option<String>,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize, filename: Option<String>) -> Self {
        Self {
            line,
            column,
            filename,
        }
    }

    /// Create a source location without a filename
    pub fn at(line: usize, column: usize) -> Self {
        Self::new(line, column, None)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref filename) = self.filename {
            write!(f, "{}:{}:{}", filename, self.line, self.column)
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// The kinds of lexical fault the scanner can report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// A string literal ran into the end of input before its closing quote
    UnterminatedString,
    /// A character that starts no token
    UnexpectedCharacter(char),
}

/// A recoverable error found while scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    kind: ScanErrorKind,
    message: String,
    location: SourceLocation,
}

impl ScanError {
    /// Create a new scan error
    pub fn new(kind: ScanErrorKind, location: SourceLocation) -> Self {
        let message = match kind {
            ScanErrorKind::UnterminatedString => "Unterminated string".to_string(),
            ScanErrorKind::UnexpectedCharacter(c) => format!("Unexpected character '{}'", c),
        };

        Self {
            kind,
            message,
            location,
        }
    }

    /// Create an unterminated string error
    pub fn unterminated_string(location: SourceLocation) -> Self {
        Self::new(ScanErrorKind::UnterminatedString, location)
    }

    /// Create an unexpected character error
    pub fn unexpected_character(c: char, location: SourceLocation) -> Self {
        Self::new(ScanErrorKind::UnexpectedCharacter(c), location)
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        "Lexer Error"
    }

    /// Get the specific fault this error describes
    pub fn error_kind(&self) -> &ScanErrorKind {
        &self.kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the location where the offending construct started
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.kind(), self.message(), self.location)
    }
}

impl std::error::Error for ScanError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_location_display() {
        let loc = SourceLocation::at(10, 5);
        assert_eq!(loc.to_string(), "10:5");

        let loc_with_file = SourceLocation::new(10, 5, Some("test.lox".to_string()));
        assert_eq!(loc_with_file.to_string(), "test.lox:10:5");
    }

    #[test]
    fn test_error_creation() {
        let loc = SourceLocation::at(1, 1);
        let err = ScanError::unterminated_string(loc.clone());

        assert_eq!(err.kind(), "Lexer Error");
        assert_eq!(err.error_kind(), &ScanErrorKind::UnterminatedString);
        assert_eq!(err.message(), "Unterminated string");
        assert_eq!(err.location(), &loc);
    }

    #[test]
    fn test_unexpected_character_message() {
        let err = ScanError::unexpected_character('@', SourceLocation::at(3, 7));
        assert_eq!(err.error_kind(), &ScanErrorKind::UnexpectedCharacter('@'));
        assert_eq!(err.message(), "Unexpected character '@'");
    }

    #[test]
    fn test_error_display() {
        let err = ScanError::unterminated_string(SourceLocation::at(5, 10));
        assert_eq!(err.to_string(), "Lexer Error: Unterminated string at 5:10");
    }
}
