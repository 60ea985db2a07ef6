//! Diagnostic formatting for scan errors
//!
//! Renders a scan error together with the source lines around it.

use super::{ScanError, SourceLocation};
use colored::Colorize;

/// A scan error paired with the source it was found in
pub struct Diagnostic<'a> {
    error: &'a ScanError,
    source: Option<&'a str>,
}

impl<'a> Diagnostic<'a> {
    /// Create a new diagnostic from an error
    pub fn new(error: &'a ScanError) -> Self {
        Self {
            error,
            source: None,
        }
    }

    /// Create a diagnostic with source code context
    pub fn with_source(error: &'a ScanError, source: &'a str) -> Self {
        Self {
            error,
            source: Some(source),
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        let kind = self.error.kind().red().bold();
        output.push_str(&format!("{}: {}\n", kind, self.error.message()));

        let location = self.error.location();
        output.push_str(&format!("  {} {}\n", "-->".blue().bold(), location));

        if let Some(source) = self.source {
            output.push_str(&Self::format_source_context(source, location));
        }

        output
    }

    fn format_source_context(source: &str, location: &SourceLocation) -> String {
        let mut output = String::new();
        let lines: Vec<&str> = source.lines().collect();

        if location.line == 0 || location.line > lines.len() {
            return output;
        }

        let line_idx = location.line - 1;
        let width = location.line.to_string().len().max((line_idx + 2).to_string().len());

        if line_idx > 0 {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx, width = width).blue(),
                lines[line_idx - 1]
            ));
        }

        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", location.line, width = width).blue().bold(),
            lines[line_idx]
        ));

        // "  " + line number + " " before the source text
        let padding = " ".repeat(width + 3 + location.column.saturating_sub(1));
        output.push_str(&format!("{}{}\n", padding, "^".red().bold()));

        if line_idx + 1 < lines.len() {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx + 2, width = width).blue(),
                lines[line_idx + 1]
            ));
        }

        output
    }
}

impl std::fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_without_source() {
        let err = ScanError::unexpected_character('@', SourceLocation::at(1, 1));
        let formatted = Diagnostic::new(&err).format();

        assert!(formatted.contains("Lexer Error"));
        assert!(formatted.contains("Unexpected character '@'"));
        assert!(formatted.contains("1:1"));
    }

    #[test]
    fn test_diagnostic_with_source() {
        colored::control::set_override(false);

        let source = "var x = 42;\nvar y = @;\nvar z = 10;";
        let err = ScanError::unexpected_character('@', SourceLocation::at(2, 9));
        let formatted = Diagnostic::with_source(&err, source).format();

        assert!(formatted.contains("var x = 42;"));
        assert!(formatted.contains("  2 var y = @;"));
        assert!(formatted.contains("var z = 10;"));

        let caret_line = formatted
            .lines()
            .find(|line| line.trim() == "^")
            .unwrap();
        assert_eq!(caret_line.find('^'), "  2 var y = @;".find('@'));
    }

    #[test]
    fn test_diagnostic_location_out_of_range() {
        let err = ScanError::unterminated_string(SourceLocation::at(9, 1));
        let formatted = Diagnostic::with_source(&err, "\"abc").format();

        assert!(formatted.contains("Unterminated string"));
        assert!(!formatted.contains('^'));
    }
}
